//! Not Found Page

use leptos::prelude::*;

use crate::components::PublicHeader;
use crate::context::use_app_context;
use crate::routes::Route;

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    let ctx = use_app_context();
    view! {
        <PublicHeader />
        <section class="not-found">
            <h1>"Page not found"</h1>
            <p>"Nothing lives at " <code>{path}</code> "."</p>
            <button on:click=move |_| ctx.navigate(Route::Landing)>"Back to start"</button>
        </section>
    }
}
