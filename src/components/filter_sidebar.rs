//! Filter Sidebar Component
//!
//! Collapsible panel with the four project filter buttons.

use leptos::prelude::*;

use crate::filters::FilterCategory;

#[component]
pub fn FilterSidebar(
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
    category: ReadSignal<FilterCategory>,
    set_category: WriteSignal<FilterCategory>,
) -> impl IntoView {
    let panel_class = move || {
        if open.get() { "filter-sidebar open" } else { "filter-sidebar" }
    };

    view! {
        // Only visible on narrow screens
        <button
            class="sidebar-toggle"
            on:click=move |_| set_open.update(|v| *v = !*v)
        >
            {move || if open.get() { "×" } else { "☰" }}
        </button>

        <aside class=panel_class>
            <h2 class="sidebar-title">"Dashboard"</h2>
            <nav class="sidebar-nav">
                {FilterCategory::ALL.iter().map(|&option| {
                    let is_selected = move || category.get() == option;
                    view! {
                        <button
                            class=move || if is_selected() { "sidebar-btn active" } else { "sidebar-btn" }
                            on:click=move |_| set_category.set(option)
                        >
                            {option.sidebar_label()}
                        </button>
                    }
                }).collect_view()}
            </nav>
        </aside>
    }
}
