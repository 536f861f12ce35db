//! UI Components
//!
//! Leptos components for the top bar, dashboard and registration pages.

mod dashboard;
mod filter_sidebar;
mod project_card;
mod project_grid;
mod registration_page;
mod stats_cards;
mod top_bar;

pub use dashboard::Dashboard;
pub use filter_sidebar::FilterSidebar;
pub use project_card::ProjectCard;
pub use project_grid::ProjectGrid;
pub use registration_page::RegistrationPage;
pub use stats_cards::StatsCards;
pub use top_bar::TopBar;
