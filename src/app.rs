//! Project Hub Frontend App
//!
//! Root component: provides the session store, app context and API client,
//! then switches between the registration and dashboard pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{Dashboard, RegistrationPage, TopBar};
use crate::config::AppConfig;
use crate::context::{AppContext, Page};
use crate::location;
use crate::store::{SessionState, SessionStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (page, set_page) = signal(Page::from_path(&location::current_path()));
    let store = Store::new(SessionState::new());

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new((page, set_page), ApiClient::new(&config)));

    log::info!("starting against backend {}", config.api_base_url);

    // Back/forward: follow the address bar
    let _ = window_event_listener(leptos::ev::popstate, move |_| {
        set_page.set(Page::from_path(&location::current_path()));
    });

    let current_page = Memo::new(move |_| Page::resolve(page.get(), store.is_authenticated().get()));

    // Keep the address bar on the page actually shown
    Effect::new(move |_| {
        let shown = current_page.get();
        if shown != page.get_untracked() {
            location::replace_path(shown.path());
            set_page.set(shown);
        }
    });

    view! {
        <div class="app-layout">
            <TopBar />
            {move || match current_page.get() {
                Page::Register => view! { <RegistrationPage /> }.into_any(),
                Page::Dashboard => view! { <Dashboard /> }.into_any(),
            }}
        </div>
    }
}
