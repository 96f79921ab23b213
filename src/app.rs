//! Client Portal App
//!
//! Route switch. Landing and not-found pages get the public header; every
//! dashboard route renders inside `DashboardLayout`.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::DashboardLayout;
use crate::config::AppConfig;
use crate::context::{current_path, use_app_context, AppContext};
use crate::mock_data::MockData;
use crate::pages::{
    ClientsPage, DashboardPage, DocumentsPage, InvoiceDetailPage, InvoicesPage, LandingPage,
    MessagesPage, NotFoundPage, ProjectDetailPage, ProjectsPage, TasksPage, TeamPage, ThreadPage,
};
use crate::routes::{Page, Route};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let data = MockData::embedded();
    let config = AppConfig::embedded();

    let route = signal(Route::parse(&current_path()));
    let ctx = AppContext::new(data, config, route);
    provide_context(ctx);
    provide_context(Store::new(AppState::new(data)));

    // Back/forward buttons
    let handle = window_event_listener(ev::popstate, move |_| ctx.sync_with_location());
    on_cleanup(move || handle.remove());

    let role = Memo::new(move |_| ctx.route.get().role());

    move || match role.get() {
        Some(role) => view! {
            <DashboardLayout role=role>
                <PageOutlet />
            </DashboardLayout>
        }
        .into_any(),
        None => match ctx.route.get() {
            Route::NotFound(path) => view! { <NotFoundPage path=path /> }.into_any(),
            _ => view! { <LandingPage /> }.into_any(),
        },
    }
}

/// Page of the current dashboard route
#[component]
fn PageOutlet() -> impl IntoView {
    let ctx = use_app_context();
    let page = Memo::new(move |_| ctx.route.get().page());

    move || match page.get() {
        Some(Page::Dashboard) | None => view! { <DashboardPage /> }.into_any(),
        Some(Page::Clients) => view! { <ClientsPage /> }.into_any(),
        Some(Page::Projects) => view! { <ProjectsPage /> }.into_any(),
        Some(Page::ProjectDetail(id)) => view! { <ProjectDetailPage project_id=id /> }.into_any(),
        Some(Page::Tasks) => view! { <TasksPage /> }.into_any(),
        Some(Page::Invoices) => view! { <InvoicesPage /> }.into_any(),
        Some(Page::InvoiceDetail(id)) => view! { <InvoiceDetailPage invoice_id=id /> }.into_any(),
        Some(Page::Documents) => view! { <DocumentsPage /> }.into_any(),
        Some(Page::Messages) => view! { <MessagesPage /> }.into_any(),
        Some(Page::Thread(id)) => view! { <ThreadPage conversation_id=id /> }.into_any(),
        Some(Page::Team) => view! { <TeamPage /> }.into_any(),
    }
}
