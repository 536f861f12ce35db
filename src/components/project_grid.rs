//! Project Grid Component
//!
//! Spinner while loading, an empty-state panel, or the card grid.

use leptos::prelude::*;

use crate::components::ProjectCard;
use crate::models::Project;

#[component]
pub fn ProjectGrid(projects: Memo<Vec<Project>>, loading: Signal<bool>) -> impl IntoView {
    view! {
        {move || {
            if loading.get() {
                view! {
                    <div class="loading-panel">
                        <div class="spinner"></div>
                    </div>
                }.into_any()
            } else if projects.with(|p| p.is_empty()) {
                view! {
                    <div class="empty-panel">
                        <p>"No projects found"</p>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="project-grid">
                        <For
                            each=move || projects.get()
                            // Every rendered field, so edits re-render the card
                            key=|p| (
                                p.id.clone(),
                                p.title.clone(),
                                p.description.clone(),
                                p.status.as_str().to_string(),
                                p.created_at,
                                p.updated_at,
                            )
                            children=move |project| view! { <ProjectCard project=project /> }
                        />
                    </div>
                }.into_any()
            }
        }}
    }
}
