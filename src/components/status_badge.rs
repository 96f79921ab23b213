//! Status Badges
//!
//! Colored pills for record statuses and due states. The tone becomes part of
//! the CSS class, e.g. `status-badge status-overdue`.

use leptos::prelude::*;

use crate::pipeline::DueState;

#[component]
pub fn StatusBadge(#[prop(into)] label: String, tone: &'static str) -> impl IntoView {
    view! { <span class=format!("status-badge status-{tone}")>{label}</span> }
}

/// Nothing for settled or undated items
#[component]
pub fn DueBadge(due: DueState) -> impl IntoView {
    let label = due.label();
    (!label.is_empty())
        .then(|| view! { <span class=format!("due-badge {}", due.css_class())>{label}</span> })
}
