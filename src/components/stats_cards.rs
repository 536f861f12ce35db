//! Stats Cards Component

use leptos::prelude::*;

use crate::stats::DashboardStats;

/// Row of four summary cards
#[component]
pub fn StatsCards(stats: Memo<DashboardStats>) -> impl IntoView {
    view! {
        <div class="stats-grid">
            <StatCard title="Total Projects" accent="stat-total" value=Signal::derive(move || stats.get().total_projects) />
            <StatCard title="Active Projects" accent="stat-active" value=Signal::derive(move || stats.get().active_projects) />
            <StatCard title="Completed" accent="stat-completed" value=Signal::derive(move || stats.get().completed_projects) />
            <StatCard title="Updated This Week" accent="stat-week" value=Signal::derive(move || stats.get().updated_this_week) />
        </div>
    }
}

#[component]
fn StatCard(title: &'static str, accent: &'static str, value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="card-header">
                <h3 class="card-title">{title}</h3>
            </div>
            <div class="card-content">
                <p class=format!("stat-value {}", accent)>{move || value.get()}</p>
            </div>
        </div>
    }
}
