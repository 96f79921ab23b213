//! Dashboard Page

use leptos::prelude::*;

use crate::components::{DueBadge, EmptyState, StatCard, StatusBadge};
use crate::context::use_app_context;
use crate::format;
use crate::listings::dashboard::{derive_dashboard, DeadlineKind};
use crate::routes::Page;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let session = ctx.dashboard_session();
    let currency = ctx.config.currency_symbol.clone();

    let summary = Memo::new(move |_| {
        let messages = store.messages().read();
        derive_dashboard(ctx.data, &messages, &session, &ctx.calendar)
    });

    let task_target = session.role.can_open(Page::Tasks).then_some(Page::Tasks);

    let stats = move || {
        let s = summary.get();
        let invoice_cards = s.invoices.map(|invoices| {
            view! {
                <StatCard
                    label="Outstanding"
                    value=format::currency(invoices.outstanding, &currency)
                    hint=format!("{} invoices", invoices.count)
                    target=Page::Invoices
                />
                <StatCard
                    label="Overdue invoices"
                    value=invoices.overdue_count.to_string()
                    target=Page::Invoices
                    warn={invoices.overdue_count > 0}
                />
            }
        });
        view! {
            <StatCard label="Active projects" value=s.active_projects.to_string() target=Page::Projects />
            {match task_target {
                Some(page) => view! {
                    <StatCard label="Open tasks" value=s.open_tasks.to_string() target=page />
                }.into_any(),
                None => view! { <StatCard label="Open tasks" value=s.open_tasks.to_string() /> }.into_any(),
            }}
            {invoice_cards}
            <StatCard
                label="Unread messages"
                value=s.unread_messages.to_string()
                target=Page::Messages
                warn={s.unread_messages > 0}
            />
        }
    };

    let deadlines = move || {
        let deadlines = summary.get().deadlines;
        if deadlines.is_empty() {
            return view! { <EmptyState message="Nothing due in the next few days" /> }.into_any();
        }
        view! {
            <ul class="deadline-list">
                {deadlines
                    .into_iter()
                    .map(|d| {
                        let project_id = d.project_id;
                        let kind = match d.kind {
                            DeadlineKind::Project => "Project",
                            DeadlineKind::Task => "Task",
                        };
                        view! {
                            <li class="deadline" on:click=move |_| ctx.open(Page::ProjectDetail(project_id))>
                                <span class="deadline-kind">{kind}</span>
                                <div class="deadline-main">
                                    <span class="deadline-title">{d.title}</span>
                                    <span class="deadline-project">{d.project_name}</span>
                                </div>
                                <span class="deadline-date">{format::date(d.due_date)}</span>
                                <DueBadge due=d.due />
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    let currency = ctx.config.currency_symbol.clone();
    let recent = move || {
        let rows = summary.get().recent_invoices;
        if rows.is_empty() {
            return ().into_any();
        }
        let currency = currency.clone();
        view! {
            <section class="panel">
                <h2>"Recent invoices"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Invoice"</th>
                            <th>"Client"</th>
                            <th>"Issued"</th>
                            <th class="num">"Amount"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| {
                                let id = row.id;
                                view! {
                                    <tr class="clickable" on:click=move |_| ctx.open(Page::InvoiceDetail(id))>
                                        <td>{row.number}</td>
                                        <td>{row.client_name}</td>
                                        <td>{format::date(row.issue_date)}</td>
                                        <td class="num">{format::currency(row.total, &currency)}</td>
                                        <td><StatusBadge label=row.status.label() tone=row.status.as_str() /></td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </section>
        }
        .into_any()
    };

    view! {
        <div class="dashboard-page">
            <div class="stat-grid">{stats}</div>
            <section class="panel">
                <h2>"Upcoming deadlines"</h2>
                {deadlines}
            </section>
            {recent}
        </div>
    }
}
