//! Dashboard Layout Component
//!
//! Sidebar on the left, top bar with page title and current user above the
//! page content.

use leptos::prelude::*;

use crate::components::{Sidebar, UnreadBadge};
use crate::context::use_app_context;
use crate::format;
use crate::mock_data::UNKNOWN_USER;
use crate::models::Role;
use crate::routes::{Page, Route};

#[component]
pub fn DashboardLayout(role: Role, children: Children) -> impl IntoView {
    let ctx = use_app_context();

    let title = move || ctx.route.get().page().map(|p| p.title()).unwrap_or_default();
    let user_name = Memo::new(move |_| {
        ctx.session()
            .and_then(|s| ctx.data.user(s.user_id))
            .map(|u| u.name.clone())
            .unwrap_or_else(|| UNKNOWN_USER.to_string())
    });

    view! {
        <div class="dashboard-layout">
            <Sidebar role=role />
            <div class="dashboard-main">
                <header class="top-bar">
                    <h1 class="page-title">{title}</h1>
                    <div class="top-bar-user">
                        <button
                            class="inbox-btn"
                            title="Messages"
                            on:click=move |_| ctx.open(Page::Messages)
                        >
                            "✉"
                            <UnreadBadge />
                        </button>
                        <span class="avatar">{move || format::initials(&user_name.get())}</span>
                        <div class="user-meta">
                            <span class="user-name">{move || user_name.get()}</span>
                            <span class="user-role">{role.label()}</span>
                        </div>
                        <button class="switch-role" on:click=move |_| ctx.navigate(Route::Landing)>
                            "Switch role"
                        </button>
                    </div>
                </header>
                <main class="dashboard-content">{children()}</main>
            </div>
        </div>
    }
}
