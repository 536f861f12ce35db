//! Frontend Models
//!
//! Data structures matching backend payloads.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Role assigned to every self-registered account
pub const DEFAULT_ROLE: &str = "team_member";

/// Record identifier; the backend may send either a number or a string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// Project lifecycle status
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    /// Any other server value ("todo", "planned", ...)
    Other(String),
}

impl From<String> for ProjectStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "completed" => ProjectStatus::Completed,
            "in-progress" => ProjectStatus::InProgress,
            _ => ProjectStatus::Other(raw),
        }
    }
}

impl ProjectStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, ProjectStatus::Completed)
    }

    pub fn as_str(&self) -> &str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Other(raw) => raw,
        }
    }

    /// Badge text: first letter upper-cased, first '-' turned into a space
    pub fn label(&self) -> String {
        let raw = self.as_str().replacen('-', " ", 1);
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "status-badge completed",
            ProjectStatus::InProgress => "status-badge in-progress",
            ProjectStatus::Other(_) => "status-badge todo",
        }
    }
}

/// Project record as returned by `GET /api/projects`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: ProjectStatus,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// User record returned alongside the session token
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
}

impl User {
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }
}

/// Body of `POST /api/auth/register`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub profile_picture_url: Option<String>,
}

/// Successful registration response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Error body the backend sends with non-2xx responses
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Lenient timestamp parsing: RFC 3339, SQLite-style text, or epoch millis.
/// Anything unparseable becomes `None`.
mod timestamp {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Raw>::deserialize(deserializer)?;
        Ok(raw.and_then(|raw| match raw {
            Raw::Millis(ms) => Utc.timestamp_millis_opt(ms).single(),
            Raw::Text(text) => parse_text(&text),
            Raw::Other(_) => None,
        }))
    }

    fn parse_text(text: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
            .ok()
            .map(|naive| naive.and_utc())
    }
}
