//! Public Header Component
//!
//! Shown outside the dashboard: brand and one entry link per role.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Role;
use crate::routes::Route;

#[component]
pub fn PublicHeader() -> impl IntoView {
    let ctx = use_app_context();

    let links = Role::ALL
        .into_iter()
        .map(|role| {
            let route = Route::dashboard(role);
            let href = route.path();
            view! {
                <a
                    class="header-link"
                    href=href
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        ctx.navigate(route.clone());
                    }
                >
                    {role.label()}
                </a>
            }
        })
        .collect_view();

    view! {
        <header class="public-header">
            <a
                class="header-brand"
                href="/"
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    ctx.navigate(Route::Landing);
                }
            >
                {ctx.config.app_name.clone()}
            </a>
            <nav class="header-links">{links}</nav>
        </header>
    }
}
