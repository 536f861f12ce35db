//! Project Filters
//!
//! Client-side narrowing of the loaded project list, independent of the
//! server-side search.

use crate::models::Project;

/// How many projects the "recent" view shows
pub const RECENT_LIMIT: usize = 5;

/// Sidebar filter selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterCategory {
    #[default]
    All,
    Active,
    Completed,
    Recent,
}

impl FilterCategory {
    /// Sidebar order
    pub const ALL: [FilterCategory; 4] = [
        FilterCategory::All,
        FilterCategory::Active,
        FilterCategory::Completed,
        FilterCategory::Recent,
    ];

    pub fn sidebar_label(self) -> &'static str {
        match self {
            FilterCategory::All => "All Projects",
            FilterCategory::Active => "Active Projects",
            FilterCategory::Completed => "Completed Projects",
            FilterCategory::Recent => "Recent Updates",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            FilterCategory::All => "All Projects",
            FilterCategory::Active => "Active Projects",
            FilterCategory::Completed => "Completed Projects",
            FilterCategory::Recent => "Recently Updated Projects",
        }
    }
}

/// Projects to display for `category`, in display order
pub fn filter_projects(projects: &[Project], category: FilterCategory) -> Vec<Project> {
    match category {
        FilterCategory::All => projects.to_vec(),
        FilterCategory::Active => projects
            .iter()
            .filter(|p| !p.status.is_completed())
            .cloned()
            .collect(),
        FilterCategory::Completed => projects
            .iter()
            .filter(|p| p.status.is_completed())
            .cloned()
            .collect(),
        FilterCategory::Recent => {
            let mut recent = projects.to_vec();
            // Stable; `None` sorts below any timestamp so undated projects go last
            recent.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
            recent.truncate(RECENT_LIMIT);
            recent
        }
    }
}
