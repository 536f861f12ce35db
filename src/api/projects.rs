//! Project Endpoints

use super::{ApiClient, ApiError};
use crate::models::Project;

impl ApiClient {
    /// `GET /api/projects?archived=0&search=<search>` with a bearer token
    pub async fn list_projects(&self, token: &str, search: &str) -> Result<Vec<Project>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("/projects"))
            .bearer_auth(token)
            .query(&[("archived", "0"), ("search", search)])
            .send()
            .await
            .map_err(|e| ApiError::network(&self.base_url, e))?;

        let projects: Vec<Project> = self.read_json(response).await?;
        log::debug!("fetched {} projects for search {:?}", projects.len(), search);
        Ok(projects)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::{ApiClient, ApiError};
    use crate::config::AppConfig;
    use crate::models::ProjectStatus;

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(&AppConfig::with_base_url(server.uri()))
    }

    #[tokio::test]
    async fn test_list_projects_sends_token_and_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .and(query_param("archived", "0"))
            .and(query_param("search", "apollo launch"))
            .and(header("authorization", "Bearer tok-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": 1,
                    "title": "Apollo",
                    "description": "Moon",
                    "status": "in-progress",
                    "created_at": "2024-01-01T00:00:00Z",
                    "updated_at": "2024-02-01T00:00:00Z"
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let api = client_for(&server);
        let projects = api.list_projects("tok-123", "apollo launch").await.unwrap();

        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].title, "Apollo");
        assert_eq!(projects[0].status, ProjectStatus::InProgress);
    }

    #[tokio::test]
    async fn test_list_projects_empty_search_still_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .and(query_param("search", ""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let api = client_for(&server);
        let projects = api.list_projects("tok", "").await.unwrap();
        assert!(projects.is_empty());
    }

    #[tokio::test]
    async fn test_list_projects_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "Invalid token" })))
            .mount(&server)
            .await;

        let api = client_for(&server);
        let err = api.list_projects("stale", "").await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Server { status: 401, message: Some("Invalid token".to_string()) }
        );
    }

    #[tokio::test]
    async fn test_list_projects_rejects_non_array_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "projects": [] })))
            .mount(&server)
            .await;

        let api = client_for(&server);
        let err = api.list_projects("tok", "").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
