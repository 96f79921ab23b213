//! Unread Badge Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Unread message count of the session user, hidden at zero
#[component]
pub fn UnreadBadge() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let count = Memo::new(move |_| match ctx.session() {
        Some(session) => store.messages().read().unread_for(session.user_id),
        None => 0,
    });

    view! {
        <Show when=move || { count.get() > 0 }>
            <span class="unread-badge">{move || count.get()}</span>
        </Show>
    }
}
