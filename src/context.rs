//! Application Context
//!
//! Shared handles provided via Leptos Context API: current page and the
//! backend client.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::location;

/// Top-level pages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Register,
    Dashboard,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Register => "/register",
            Page::Dashboard => "/dashboard",
        }
    }

    /// Page for an address-bar path; unknown paths land on registration
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/dashboard" => Page::Dashboard,
            _ => Page::Register,
        }
    }

    /// Page actually shown: the dashboard needs a session
    pub fn resolve(requested: Page, authenticated: bool) -> Self {
        if requested == Page::Dashboard && !authenticated {
            Page::Register
        } else {
            requested
        }
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    /// Backend client
    api: StoredValue<ApiClient, LocalStorage>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>), api: ApiClient) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            api: StoredValue::new_local(api),
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Switch page and record it in browser history
    pub fn navigate(&self, page: Page) {
        if self.page.get_untracked() != page {
            location::push_path(page.path());
        }
        self.set_page.set(page);
    }
}

/// Get the app context; `App` always provides it
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
