//! Landing Page
//!
//! Role picker. Each card opens the dashboard of that role as its demo user.

use leptos::prelude::*;

use crate::components::PublicHeader;
use crate::context::use_app_context;
use crate::models::Role;
use crate::routes::Route;
use crate::session::Session;

fn blurb(role: Role) -> &'static str {
    match role {
        Role::AgencyOwner => "Every client, project, invoice and team member in one place.",
        Role::AgencyMember => "Your assigned projects and tasks, with the conversations around them.",
        Role::Freelancer => "Projects you deliver for, their clients and your invoices.",
        Role::Client => "Progress, invoices and files for your company's projects.",
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_app_context();

    let cards = Role::ALL
        .into_iter()
        .map(|role| {
            let session = Session::for_role(role, ctx.config, ctx.data);
            let user = ctx.data.user(session.user_id).map(|u| u.name.clone());
            let route = Route::dashboard(role);
            view! {
                <button class="role-card" on:click=move |_| ctx.navigate(route.clone())>
                    <h3>{role.label()}</h3>
                    <p>{blurb(role)}</p>
                    {user.map(|name| view! { <span class="role-user">"Signed in as " {name}</span> })}
                </button>
            }
        })
        .collect_view();

    view! {
        <PublicHeader />
        <section class="landing">
            <h1>{ctx.config.app_name.clone()}</h1>
            <p class="landing-tagline">"Pick a role to explore the dashboard."</p>
            <div class="role-grid">{cards}</div>
        </section>
    }
}
