//! Sidebar Component
//!
//! Role menu of the dashboard. Entries come from `Role::nav_items`.

use leptos::prelude::*;

use crate::components::UnreadBadge;
use crate::context::use_app_context;
use crate::models::Role;
use crate::routes::{Page, Route};

#[component]
pub fn Sidebar(role: Role) -> impl IntoView {
    let ctx = use_app_context();
    let current = Memo::new(move |_| ctx.route.get().page().map(|p| p.section()));

    let items = role
        .nav_items()
        .iter()
        .map(|item| {
            let page = item.page;
            let href = Route::Dashboard { role, page }.path();
            let item_class = move || {
                if current.get() == Some(page) { "nav-item active" } else { "nav-item" }
            };
            view! {
                <li class=item_class>
                    <a
                        href=href
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.prevent_default();
                            ctx.open(page);
                        }
                    >
                        <span class="nav-icon">{item.icon}</span>
                        <span class="nav-label">{item.label}</span>
                        {(page == Page::Messages).then(|| view! { <UnreadBadge /> })}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="sidebar">
            <a
                class="sidebar-brand"
                href="/"
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    ctx.navigate(Route::Landing);
                }
            >
                {ctx.config.app_name.clone()}
            </a>
            <div class="sidebar-role">{role.label()}</div>
            <ul class="sidebar-nav">{items}</ul>
        </nav>
    }
}
