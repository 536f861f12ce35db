//! Dashboard Statistics
//!
//! Summary counters shown above the project list.

use chrono::{DateTime, Duration, Utc};

use crate::models::Project;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub active_projects: usize,
    pub completed_projects: usize,
    /// Projects whose last update falls in the 7 days up to `now`
    pub updated_this_week: usize,
}

impl DashboardStats {
    pub fn compute(projects: &[Project], now: DateTime<Utc>) -> Self {
        let completed_projects = projects.iter().filter(|p| p.status.is_completed()).count();
        let week_start = now - Duration::days(7);
        let updated_this_week = projects
            .iter()
            .filter_map(|p| p.updated_at)
            .filter(|updated| *updated > week_start && *updated <= now)
            .count();

        Self {
            total_projects: projects.len(),
            active_projects: projects.len() - completed_projects,
            completed_projects,
            updated_this_week,
        }
    }
}
