//! Empty State Component

use leptos::prelude::*;

#[component]
pub fn EmptyState(
    #[prop(into)] message: String,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-icon">"∅"</div>
            <p class="empty-message">{message}</p>
            {hint.map(|hint| view! { <p class="empty-hint">{hint}</p> })}
        </div>
    }
}
