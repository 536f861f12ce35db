//! Session Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Provided through
//! context by `App`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{AuthResponse, User};

/// Session-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    /// Bearer token issued at registration
    pub auth_token: Option<String>,
    pub current_user: Option<User>,
    pub is_authenticated: bool,
    /// Global search box in the top bar
    pub search_query: String,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type SessionStore = Store<SessionState>;

/// Get the session store from context
pub fn use_session_store() -> SessionStore {
    expect_context::<SessionStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Open a session from a successful registration
pub fn store_sign_in(store: &SessionStore, auth: AuthResponse) {
    log::info!("session opened for {}", auth.user.display_name());
    store.auth_token().set(Some(auth.token));
    store.current_user().set(Some(auth.user));
    store.is_authenticated().set(true);
}

/// Update the global search query
pub fn store_set_search(store: &SessionStore, query: String) {
    store.search_query().set(query);
}
