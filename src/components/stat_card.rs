//! Stat Card Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::Page;

/// Dashboard number with a caption. With a `target` the card opens that page.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(optional)] target: Option<Page>,
    #[prop(optional)] warn: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let class = match (target.is_some(), warn) {
        (true, true) => "stat-card clickable warn",
        (true, false) => "stat-card clickable",
        (false, true) => "stat-card warn",
        (false, false) => "stat-card",
    };

    view! {
        <div
            class=class
            on:click=move |_| {
                if let Some(page) = target {
                    ctx.open(page);
                }
            }
        >
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
            {hint.map(|hint| view! { <div class="stat-hint">{hint}</div> })}
        </div>
    }
}
