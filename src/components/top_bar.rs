//! Top Bar Component
//!
//! App title plus, once signed in, the global search box and user name.

use leptos::prelude::*;

use crate::store::{store_set_search, use_session_store, SessionStateStoreFields};

#[component]
pub fn TopBar() -> impl IntoView {
    let store = use_session_store();

    let user_name = move || {
        store
            .current_user()
            .get()
            .map(|user| user.display_name())
            .unwrap_or_default()
    };

    view! {
        <header class="top-bar">
            <span class="top-bar-title">"Project Hub"</span>
            <Show when=move || store.is_authenticated().get()>
                <input
                    type="search"
                    class="top-bar-search"
                    placeholder="Search..."
                    prop:value=move || store.search_query().get()
                    on:input=move |ev| store_set_search(&store, event_target_value(&ev))
                />
                <span class="top-bar-user">{user_name}</span>
            </Show>
        </header>
    }
}
