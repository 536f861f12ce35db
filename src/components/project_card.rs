//! Project Card Component
//!
//! One project in the dashboard grid, linking to its detail page.

use leptos::prelude::*;

use crate::models::Project;

/// `Mon D, YYYY`, e.g. "Mar 1, 2024"
fn format_created(project: &Project) -> String {
    project
        .created_at
        .map(|created| created.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let href = format!("/projects/{}", project.id);
    let created = format_created(&project);
    let description = project.description.clone().unwrap_or_default();

    view! {
        <a href=href class="project-link">
            <div class="card project-card">
                <div class="card-header">
                    <div class="project-card-title-row">
                        <h3 class="card-title">{project.title.clone()}</h3>
                        <span class=project.status.badge_class()>{project.status.label()}</span>
                    </div>
                    <p class="card-description">{created}</p>
                </div>
                <div class="card-content">
                    <p class="project-description">{description}</p>
                </div>
            </div>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::tests::make_project;

    #[test]
    fn test_created_date_format() {
        let project = make_project(1, "todo", None);
        assert_eq!(format_created(&project), "Jun 1, 2024");
    }

    #[test]
    fn test_missing_created_date() {
        let project = Project { created_at: None, ..make_project(1, "todo", None) };
        assert_eq!(format_created(&project), "");
    }
}
