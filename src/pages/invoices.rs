//! Invoices Page
//!
//! Totals of the filtered set above the table, so the cards always describe
//! the rows being shown.

use leptos::prelude::*;

use super::{client_options, project_options};
use crate::components::{
    options_of, selected, selected_id, DueBadge, EmptyState, FilterSelect, SearchBox, SortHeader,
    StatCard, StatusBadge,
};
use crate::context::use_app_context;
use crate::format;
use crate::listings::invoices::{derive_invoices, InvoiceQuery, InvoiceSort, InvoiceSummary};
use crate::models::{InvoiceStatus, Role};
use crate::routes::Page;

#[component]
pub fn InvoicesPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.dashboard_session();
    let defaults = InvoiceQuery::default();

    let search = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let client = RwSignal::new(String::new());
    let project = RwSignal::new(String::new());
    let sort = RwSignal::new(defaults.sort);
    let direction = RwSignal::new(defaults.direction);

    let rows = Memo::new(move |_| {
        let query = InvoiceQuery {
            search: search.get(),
            status: selected(&InvoiceStatus::ALL, &status.get(), InvoiceStatus::as_str),
            client_id: selected_id(&client.get()),
            project_id: selected_id(&project.get()),
            sort: sort.get(),
            direction: direction.get(),
        };
        derive_invoices(ctx.data, &session, &query, &ctx.calendar)
    });
    let summary = Memo::new(move |_| rows.with(|rows| InvoiceSummary::of(rows)));

    let currency = ctx.config.currency_symbol.clone();
    let cards = move || {
        let s = summary.get();
        view! {
            <StatCard label="Billed" value=format::currency(s.billed, &currency) hint=format!("{} invoices", s.count) />
            <StatCard label="Paid" value=format::currency(s.paid, &currency) />
            <StatCard label="Outstanding" value=format::currency(s.outstanding, &currency) />
            <StatCard label="Overdue" value=s.overdue_count.to_string() warn={s.overdue_count > 0} />
        }
    };

    let client_filter = (session.role != Role::Client).then(|| {
        view! {
            <FilterSelect
                label="Client"
                options=client_options(ctx.data, &session)
                value=client
                all_label="All clients"
            />
        }
    });

    let currency = ctx.config.currency_symbol.clone();
    view! {
        <div class="listing-page">
            <div class="stat-grid">{cards}</div>
            <div class="toolbar">
                <SearchBox value=search placeholder="Search number, client or project" />
                <FilterSelect
                    label="Status"
                    options=options_of(&InvoiceStatus::ALL, InvoiceStatus::as_str, InvoiceStatus::label)
                    value=status
                />
                {client_filter}
                <FilterSelect
                    label="Project"
                    options=project_options(ctx.data, &session)
                    value=project
                    all_label="All projects"
                />
            </div>
            <Show
                when=move || !rows.get().is_empty()
                fallback=|| view! { <EmptyState message="No invoices match your filters" /> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <SortHeader label="Invoice" key=InvoiceSort::Number sort=sort direction=direction />
                            <th>"Client"</th>
                            <th>"Project"</th>
                            <SortHeader label="Issued" key=InvoiceSort::IssueDate sort=sort direction=direction />
                            <SortHeader label="Due" key=InvoiceSort::DueDate sort=sort direction=direction />
                            <SortHeader label="Amount" key=InvoiceSort::Amount sort=sort direction=direction />
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|row| row.id
                            children={
                                let currency = currency.clone();
                                move |row| {
                                    let id = row.id;
                                    let due = ctx.calendar.due_state(Some(row.due_date), &row.status);
                                    let row_class = if row.overdue { "clickable overdue" } else { "clickable" };
                                    view! {
                                        <tr class=row_class on:click=move |_| ctx.open(Page::InvoiceDetail(id))>
                                            <td class="strong">{row.number}</td>
                                            <td>{row.client_name}</td>
                                            <td>{row.project_name}</td>
                                            <td>{format::date(row.issue_date)}</td>
                                            <td>
                                                <span class="date">{format::date(row.due_date)}</span>
                                                <DueBadge due=due />
                                            </td>
                                            <td class="num">{format::currency(row.total, &currency)}</td>
                                            <td><StatusBadge label=row.status.label() tone=row.status.as_str() /></td>
                                        </tr>
                                    }
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
