//! Projects Page

use leptos::prelude::*;

use super::client_options;
use crate::components::{
    options_of, selected, selected_id, DueBadge, EmptyState, FilterSelect, SearchBox, SortHeader,
    StatusBadge,
};
use crate::context::use_app_context;
use crate::format;
use crate::listings::projects::{derive_projects, ProjectQuery, ProjectSort};
use crate::models::{ProjectStatus, Role};
use crate::pipeline::Direction;
use crate::routes::Page;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.dashboard_session();

    let search = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let client = RwSignal::new(String::new());
    let sort = RwSignal::new(ProjectSort::default());
    let direction = RwSignal::new(Direction::default());

    let rows = Memo::new(move |_| {
        let query = ProjectQuery {
            search: search.get(),
            status: selected(&ProjectStatus::ALL, &status.get(), ProjectStatus::as_str),
            client_id: selected_id(&client.get()),
            sort: sort.get(),
            direction: direction.get(),
        };
        let rows = derive_projects(ctx.data, &session, &query, &ctx.calendar);
        log::debug!("{} projects for {:?}", rows.len(), query);
        rows
    });

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

    view! {
        <div class="listing-page">
            <div class="toolbar">
                <SearchBox value=search placeholder="Search projects or clients" />
                <FilterSelect
                    label="Status"
                    options=options_of(&ProjectStatus::ALL, ProjectStatus::as_str, ProjectStatus::label)
                    value=status
                />
                {client_filter}
            </div>
            <Show
                when=move || !rows.get().is_empty()
                fallback=|| view! { <EmptyState message="No projects match your filters" /> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <SortHeader label="Project" key=ProjectSort::Name sort=sort direction=direction />
                            <SortHeader label="Client" key=ProjectSort::Client sort=sort direction=direction />
                            <th>"Status"</th>
                            <SortHeader label="Due" key=ProjectSort::DueDate sort=sort direction=direction />
                            <SortHeader label="Progress" key=ProjectSort::Progress sort=sort direction=direction />
                            <th>"Lead"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|row| row.id
                            children=move |row| {
                                let id = row.id;
                                view! {
                                    <tr class="clickable" on:click=move |_| ctx.open(Page::ProjectDetail(id))>
                                        <td class="strong">{row.name}</td>
                                        <td>{row.client_name}</td>
                                        <td><StatusBadge label=row.status.label() tone=row.status.as_str() /></td>
                                        <td>
                                            <span class="date">{format::optional_date(row.due_date)}</span>
                                            <DueBadge due=row.due />
                                        </td>
                                        <td>
                                            <div class="progress">
                                                <div class="progress-bar" style=format!("width: {}%", row.progress)></div>
                                            </div>
                                            <span class="progress-label">{format!("{}%", row.progress)}</span>
                                        </td>
                                        <td>{row.assignee_name.unwrap_or_else(|| "Unassigned".to_string())}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
