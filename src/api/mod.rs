//! Backend API Client
//!
//! Typed wrappers over the REST backend, organized by domain. Uses
//! `reqwest`, which runs on the browser's `fetch` when built for wasm32.

mod auth;
mod error;
mod projects;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::models::ErrorBody;

pub use error::{registration_failure_message, ApiError};

/// Shared HTTP client for the backend
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an absolute URL for a path under `/api`
    fn endpoint(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Turn a response into `T`, or into the matching `ApiError`
    async fn read_json<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error);
            return Err(ApiError::Server { status: status.as_u16(), message });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_api_prefix() {
        let api = ApiClient::new(&AppConfig::with_base_url("http://localhost:3000/"));
        assert_eq!(api.endpoint("/projects"), "http://localhost:3000/api/projects");
        assert_eq!(api.base_url(), "http://localhost:3000");
    }
}
