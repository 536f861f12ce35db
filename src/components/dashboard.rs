//! Dashboard Component
//!
//! Project list with sidebar filters, search, and summary stats.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FilterSidebar, ProjectGrid, StatsCards};
use crate::context::use_app_context;
use crate::filters::{filter_projects, FilterCategory};
use crate::loader::ProjectListState;
use crate::location;
use crate::stats::DashboardStats;
use crate::store::{use_session_store, SessionStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_session_store();

    // State
    let (search, set_search) = signal(location::current_search());
    let (category, set_category) = signal(FilterCategory::All);
    let (sidebar_open, set_sidebar_open) = signal(false);
    let list = RwSignal::new(ProjectListState::new());

    // Follow the top bar's search once mounted; the URL value wins on mount
    Effect::new(move |prev: Option<()>| {
        let global = store.search_query().get();
        if prev.is_some() && global != search.get_untracked() {
            set_search.set(global);
        }
    });

    // Load projects when the search or the session token changes
    Effect::new(move |_| {
        let query = search.get();
        let token = store.auth_token().get();
        let ticket = list
            .try_update(|state| state.begin_fetch_for(token.as_deref()))
            .flatten();
        let (Some(ticket), Some(token)) = (ticket, token) else {
            log::debug!("no session token, not fetching projects");
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = api.list_projects(&token, &query).await;
            if list.try_update(|state| state.complete_fetch(ticket, result)).is_none() {
                log::debug!("dashboard closed before projects arrived");
            }
        });
    });

    // Derived view state
    let loading = Signal::derive(move || list.with(|state| state.loading));
    let stats = Memo::new(move |_| list.with(|state| DashboardStats::compute(&state.projects, Utc::now())));
    let visible = Memo::new(move |_| list.with(|state| filter_projects(&state.projects, category.get())));

    let on_search = move |ev: web_sys::Event| {
        let query = event_target_value(&ev);
        location::replace_search_param(&query);
        set_search.set(query);
    };

    view! {
        <div class="dashboard-layout">
            <FilterSidebar
                open=sidebar_open
                set_open=set_sidebar_open
                category=category
                set_category=set_category
            />

            <main class="dashboard-main">
                <div class="dashboard-toolbar">
                    <input
                        type="text"
                        class="dashboard-search"
                        placeholder="Search projects..."
                        prop:value=move || search.get()
                        on:input=on_search
                    />
                </div>

                <StatsCards stats=stats />

                <h2 class="dashboard-heading">{move || category.get().heading()}</h2>

                <ProjectGrid projects=visible loading=loading />
            </main>
        </div>
    }
}
