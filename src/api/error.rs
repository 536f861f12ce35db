//! API Errors

use thiserror::Error;

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never got a response (server down, CORS, DNS, ...)
    #[error("no response from {base_url}: {reason}")]
    Network { base_url: String, reason: String },

    /// Non-2xx response; `message` is the body's `error` field when present
    #[error("server responded with status {status}")]
    Server { status: u16, message: Option<String> },

    /// 2xx response whose body did not match the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub(crate) fn network(base_url: &str, err: reqwest::Error) -> Self {
        ApiError::Network {
            base_url: base_url.to_string(),
            reason: err.to_string(),
        }
    }
}

/// User-facing message for a failed registration attempt
pub fn registration_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Server { message: Some(message), .. } if !message.is_empty() => message.clone(),
        ApiError::Server { .. } => "Registration failed. Server responded with an error.".to_string(),
        ApiError::Network { base_url, .. } => format!(
            "Registration failed. No response from server. Please check if the backend server is running at {}",
            base_url
        ),
        ApiError::Decode(_) => "Registration failed due to a network error.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_wins() {
        let err = ApiError::Server { status: 409, message: Some("Email already registered".into()) };
        assert_eq!(registration_failure_message(&err), "Email already registered");
    }

    #[test]
    fn test_server_without_message() {
        let err = ApiError::Server { status: 500, message: None };
        assert_eq!(
            registration_failure_message(&err),
            "Registration failed. Server responded with an error."
        );
    }

    #[test]
    fn test_server_empty_message_falls_back() {
        let err = ApiError::Server { status: 400, message: Some(String::new()) };
        assert_eq!(
            registration_failure_message(&err),
            "Registration failed. Server responded with an error."
        );
    }

    #[test]
    fn test_network_message_names_backend() {
        let err = ApiError::Network {
            base_url: "http://localhost:3000".into(),
            reason: "connection refused".into(),
        };
        let message = registration_failure_message(&err);
        assert!(message.starts_with("Registration failed. No response from server."));
        assert!(message.ends_with("running at http://localhost:3000"));
    }

    #[test]
    fn test_decode_is_generic() {
        let err = ApiError::Decode("missing field `token`".into());
        assert_eq!(registration_failure_message(&err), "Registration failed due to a network error.");
    }
}
