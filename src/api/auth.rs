//! Auth Endpoints

use super::{ApiClient, ApiError};
use crate::models::{AuthResponse, RegisterRequest};

impl ApiClient {
    /// `POST /api/auth/register`
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        log::info!("registering {} against {}", request.email, self.base_url);
        let response = self
            .client
            .post(self.endpoint("/auth/register"))
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::network(&self.base_url, e))?;

        self.read_json(response).await
    }
}
