//! Project List Loading State
//!
//! Holds the loaded projects and the loading flag. Every fetch takes a
//! generation ticket; only the newest ticket's result is applied.

use crate::api::ApiError;
use crate::models::Project;

/// Identifies one fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct ProjectListState {
    pub projects: Vec<Project>,
    pub loading: bool,
    latest: u64,
}

impl ProjectListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch; any ticket issued before this one becomes stale
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest += 1;
        self.loading = true;
        FetchTicket(self.latest)
    }

    /// Start a fetch only when there is a session token; an empty token
    /// counts as none
    pub fn begin_fetch_for(&mut self, token: Option<&str>) -> Option<FetchTicket> {
        match token {
            Some(token) if !token.is_empty() => Some(self.begin_fetch()),
            _ => None,
        }
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Apply a fetch result. Returns false if the ticket was stale and the
    /// result was dropped. A failure keeps the previous list.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<Project>, ApiError>) -> bool {
        if !self.is_current(ticket) {
            log::debug!("dropping stale project response (ticket {}, latest {})", ticket.0, self.latest);
            return false;
        }
        self.loading = false;
        match result {
            Ok(projects) => {
                log::info!("loaded {} projects", projects.len());
                self.projects = projects;
            }
            Err(e) => log::error!("error fetching projects: {}", e),
        }
        true
    }
}
