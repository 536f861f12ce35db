//! Browser Location Helpers
//!
//! Reading and rewriting the address bar: the current page path and the
//! dashboard's `search` query parameter.

use serde::Serialize;

#[derive(Serialize)]
struct SearchParams {
    search: String,
}

/// First `search` value of a query string (with or without leading `?`)
pub fn search_from_query(query: &str) -> String {
    serde_urlencoded::from_str::<Vec<(String, String)>>(query.trim_start_matches('?'))
        .ok()
        .and_then(|pairs| pairs.into_iter().find(|(key, _)| key == "search"))
        .map(|(_, value)| value)
        .unwrap_or_default()
}

/// `?search=...` for the given search text
pub fn query_for_search(search: &str) -> String {
    let params = SearchParams { search: search.to_string() };
    match serde_urlencoded::to_string(&params) {
        Ok(encoded) => format!("?{}", encoded),
        Err(_) => String::new(),
    }
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .map(|query| search_from_query(&query))
        .unwrap_or_default()
}

/// Replace the `search` query parameter without adding a history entry
pub fn replace_search_param(search: &str) {
    let url = format!("{}{}", current_path(), query_for_search(search));
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url)) {
            log::warn!("failed to update URL: {:?}", e);
        }
    }
}

/// Replace the current path (dropping the query string) in place
pub fn replace_path(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path)) {
            log::warn!("failed to replace URL with {}: {:?}", path, e);
        }
    }
}

/// Push a new path (dropping the query string) onto browser history
pub fn push_path(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path)) {
            log::warn!("failed to navigate to {}: {:?}", path, e);
        }
    }
}
