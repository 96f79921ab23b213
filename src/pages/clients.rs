//! Clients Page

use leptos::prelude::*;

use crate::components::{options_of, selected, EmptyState, FilterSelect, SearchBox, SortHeader, StatusBadge};
use crate::context::use_app_context;
use crate::format;
use crate::listings::clients::{derive_clients, has_overdue, ClientQuery, ClientSort};
use crate::models::ClientStatus;
use crate::pipeline::Direction;

#[component]
pub fn ClientsPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.dashboard_session();

    let search = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let sort = RwSignal::new(ClientSort::default());
    let direction = RwSignal::new(Direction::default());

    let rows = Memo::new(move |_| {
        let query = ClientQuery {
            search: search.get(),
            status: selected(&ClientStatus::ALL, &status.get(), ClientStatus::as_str),
            sort: sort.get(),
            direction: direction.get(),
        };
        derive_clients(ctx.data, &session, &query)
    });

    let currency = ctx.config.currency_symbol.clone();
    view! {
        <div class="listing-page">
            <div class="toolbar">
                <SearchBox value=search placeholder="Search name, contact or industry" />
                <FilterSelect
                    label="Status"
                    options=options_of(&ClientStatus::ALL, ClientStatus::as_str, ClientStatus::label)
                    value=status
                />
            </div>
            <Show
                when=move || !rows.get().is_empty()
                fallback=|| view! { <EmptyState message="No clients match your filters" /> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <SortHeader label="Client" key=ClientSort::Name sort=sort direction=direction />
                            <th>"Contact"</th>
                            <th>"Industry"</th>
                            <SortHeader label="Projects" key=ClientSort::Projects sort=sort direction=direction />
                            <SortHeader label="Outstanding" key=ClientSort::Outstanding sort=sort direction=direction />
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
                                    let overdue = has_overdue(ctx.data, row.id);
                                    view! {
                                        <tr>
                                            <td class="strong">{row.name}</td>
                                            <td>
                                                <div>{row.contact_name}</div>
                                                <div class="muted">{row.email}</div>
                                                {row.phone.map(|phone| view! { <div class="muted">{phone}</div> })}
                                            </td>
                                            <td>{row.industry}</td>
                                            <td class="num">
                                                {format!("{} active / {}", row.active_projects, row.project_count)}
                                            </td>
                                            <td class="num">
                                                {format::currency(row.outstanding, &currency)}
                                                {overdue.then(|| view! { <span class="chip warn">"Overdue"</span> })}
                                            </td>
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
