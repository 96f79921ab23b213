//! Project Detail Page
//!
//! A project with its tasks, files and (for roles that bill) invoices.

use leptos::prelude::*;

use crate::components::{DueBadge, EmptyState, StatusBadge};
use crate::context::use_app_context;
use crate::format;
use crate::listings::projects::project_detail;
use crate::routes::Page;

#[component]
pub fn ProjectDetailPage(project_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.dashboard_session();
    let currency = ctx.config.currency_symbol.clone();

    let Some(detail) = project_detail(ctx.data, &session, project_id, &ctx.calendar) else {
        log::info!("project {project_id} not visible to {}", session.role.slug());
        return view! {
            <EmptyState message="Project not found" />
            <button class="back-btn" on:click=move |_| ctx.open(Page::Projects)>"← Projects"</button>
        }
        .into_any();
    };

    let row = detail.row;
    let show_invoices = session.role.can_open(Page::Invoices);

    let tasks = if detail.tasks.is_empty() {
        view! { <EmptyState message="No tasks yet" /> }.into_any()
    } else {
        view! {
            <ul class="task-list">
                {detail
                    .tasks
                    .into_iter()
                    .map(|task| {
                        view! {
                            <li class="task-item">
                                <StatusBadge label=task.status.label() tone=task.status.as_str() />
                                <span class="task-title">{task.title}</span>
                                <StatusBadge label=task.priority.label() tone=task.priority.as_str() />
                                <span class="date">{format::optional_date(task.due_date)}</span>
                                <DueBadge due=task.due />
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    let documents = if detail.documents.is_empty() {
        view! { <EmptyState message="No files uploaded" /> }.into_any()
    } else {
        view! {
            <ul class="file-list">
                {detail
                    .documents
                    .into_iter()
                    .map(|doc| {
                        view! {
                            <li class="file-item">
                                <span class="file-icon">{doc.kind.icon()}</span>
                                <span class="file-name">{doc.name}</span>
                                <span class="muted">{format::file_size(doc.size_bytes)}</span>
                                <span class="muted">{format::date(doc.upload_date)}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    let invoices = show_invoices.then(|| {
        let rows = detail
            .invoices
            .into_iter()
            .map(|invoice| {
                let id = invoice.id;
                view! {
                    <li class="invoice-item clickable" on:click=move |_| ctx.open(Page::InvoiceDetail(id))>
                        <span class="strong">{invoice.number}</span>
                        <span class="num">{format::currency(invoice.total, &currency)}</span>
                        <StatusBadge label=invoice.status.label() tone=invoice.status.as_str() />
                    </li>
                }
            })
            .collect_view();
        view! {
            <section class="panel">
                <h3>"Invoices"</h3>
                <ul class="invoice-list">{rows}</ul>
            </section>
        }
    });

    view! {
        <div class="detail-page project-detail">
            <button class="back-btn" on:click=move |_| ctx.open(Page::Projects)>"← Projects"</button>
            <header class="detail-header">
                <h2>{row.name}</h2>
                <StatusBadge label=row.status.label() tone=row.status.as_str() />
                <DueBadge due=row.due />
            </header>
            <p class="description">{detail.description}</p>
            <dl class="detail-meta">
                <dt>"Client"</dt>
                <dd>{row.client_name}</dd>
                <dt>"Lead"</dt>
                <dd>{row.assignee_name.unwrap_or_else(|| "Unassigned".to_string())}</dd>
                <dt>"Due"</dt>
                <dd>{format::optional_date(row.due_date)}</dd>
                <dt>"Budget"</dt>
                <dd>{format::currency(row.budget, &currency)}</dd>
                <dt>"Progress"</dt>
                <dd>
                    <div class="progress">
                        <div class="progress-bar" style=format!("width: {}%", row.progress)></div>
                    </div>
                    {format!("{}%", row.progress)}
                </dd>
            </dl>
            <section class="panel">
                <h3>"Tasks"</h3>
                {tasks}
            </section>
            <section class="panel">
                <h3>"Files"</h3>
                {documents}
            </section>
            {invoices}
        </div>
    }
    .into_any()
}
