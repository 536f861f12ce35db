//! Build-time Configuration
//!
//! The WASM bundle has no process environment, so settings are baked in
//! with `option_env!` when the bundle is compiled.

use log::LevelFilter;

/// Backend origin used when `API_BASE_URL` is unset or empty
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin, without trailing slash
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("API_BASE_URL"), option_env!("LOG_LEVEL"))
    }

    fn from_values(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = match base_url.map(str::trim) {
            Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
            _ => DEFAULT_API_BASE_URL.to_string(),
        };
        let log_level = log_level
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(LevelFilter::Info);

        Self { api_base_url, log_level }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self::from_values(Some(&base_url), None)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_empty_base_url_counts_as_unset() {
        let config = AppConfig::from_values(Some("  "), Some(""));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("https://pm.example.com/"), Some("debug"));
        assert_eq!(config.api_base_url, "https://pm.example.com");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = AppConfig::from_values(None, Some("chatty"));
        assert_eq!(config.log_level, LevelFilter::Info);
    }
}
