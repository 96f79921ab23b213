//! Invoice Detail Page

use leptos::prelude::*;

use crate::components::{DueBadge, EmptyState, StatusBadge};
use crate::context::use_app_context;
use crate::format;
use crate::listings::invoices::invoice_detail;
use crate::routes::Page;

#[component]
pub fn InvoiceDetailPage(invoice_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.dashboard_session();
    let currency = ctx.config.currency_symbol.clone();

    let Some(detail) = invoice_detail(ctx.data, &session, invoice_id, &ctx.calendar) else {
        log::info!("invoice {invoice_id} not visible to {}", session.role.slug());
        return view! {
            <EmptyState message="Invoice not found" hint="It may belong to another client." />
            <button class="back-btn" on:click=move |_| ctx.open(Page::Invoices)>"← Invoices"</button>
        }
        .into_any();
    };

    let row = detail.row;
    let project_id = row.project_id;
    let due = ctx.calendar.due_state(Some(row.due_date), &row.status);
    let items = detail
        .items
        .into_iter()
        .map(|item| {
            let amount = item.amount();
            view! {
                <tr>
                    <td>{item.description}</td>
                    <td class="num">{item.quantity.to_string()}</td>
                    <td class="num">{format::currency(item.rate, &currency)}</td>
                    <td class="num">{format::currency(amount, &currency)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="detail-page invoice-detail">
            <button class="back-btn" on:click=move |_| ctx.open(Page::Invoices)>"← Invoices"</button>
            <header class="detail-header">
                <h2>{row.number}</h2>
                <StatusBadge label=row.status.label() tone=row.status.as_str() />
                <DueBadge due=due />
            </header>
            <dl class="detail-meta">
                <dt>"Client"</dt>
                <dd>
                    {row.client_name}
                    {detail.client_email.map(|email| view! { <span class="muted">" · " {email}</span> })}
                </dd>
                <dt>"Project"</dt>
                <dd>
                    <a class="link" on:click=move |_| ctx.open(Page::ProjectDetail(project_id))>
                        {row.project_name}
                    </a>
                </dd>
                <dt>"Issued"</dt>
                <dd>{format::date(row.issue_date)}</dd>
                <dt>"Due"</dt>
                <dd>{format::date(row.due_date)}</dd>
            </dl>
            <table class="data-table line-items">
                <thead>
                    <tr>
                        <th>"Description"</th>
                        <th class="num">"Qty"</th>
                        <th class="num">"Rate"</th>
                        <th class="num">"Amount"</th>
                    </tr>
                </thead>
                <tbody>{items}</tbody>
                <tfoot>
                    <tr>
                        <td colspan="3">"Subtotal"</td>
                        <td class="num">{format::currency(detail.subtotal, &currency)}</td>
                    </tr>
                    <tr class="total">
                        <td colspan="3">"Total"</td>
                        <td class="num">{format::currency(row.total, &currency)}</td>
                    </tr>
                </tfoot>
            </table>
        </div>
    }
    .into_any()
}
