//! Tasks Page

use leptos::prelude::*;

use super::project_options;
use crate::components::{
    options_of, selected, selected_id, DueBadge, EmptyState, FilterSelect, SearchBox, SortHeader,
    StatusBadge,
};
use crate::context::use_app_context;
use crate::format;
use crate::listings::tasks::{derive_tasks, TaskQuery, TaskSort};
use crate::models::{Priority, TaskStatus};
use crate::pipeline::Direction;
use crate::routes::Page;

#[component]
pub fn TasksPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.dashboard_session();

    let search = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let priority = RwSignal::new(String::new());
    let project = RwSignal::new(String::new());
    let mine_only = RwSignal::new(false);
    let sort = RwSignal::new(TaskSort::default());
    let direction = RwSignal::new(Direction::default());

    let rows = Memo::new(move |_| {
        let query = TaskQuery {
            search: search.get(),
            status: selected(&TaskStatus::ALL, &status.get(), TaskStatus::as_str),
            priority: selected(&Priority::ALL, &priority.get(), Priority::as_str),
            project_id: selected_id(&project.get()),
            mine_only: mine_only.get(),
            sort: sort.get(),
            direction: direction.get(),
        };
        derive_tasks(ctx.data, &session, &query, &ctx.calendar)
    });

    view! {
        <div class="listing-page">
            <div class="toolbar">
                <SearchBox value=search placeholder="Search tasks or projects" />
                <FilterSelect
                    label="Status"
                    options=options_of(&TaskStatus::ALL, TaskStatus::as_str, TaskStatus::label)
                    value=status
                />
                <FilterSelect
                    label="Priority"
                    options=options_of(&Priority::ALL, Priority::as_str, Priority::label)
                    value=priority
                />
                <FilterSelect
                    label="Project"
                    options=project_options(ctx.data, &session)
                    value=project
                    all_label="All projects"
                />
                <label class="toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || mine_only.get()
                        on:change=move |ev| mine_only.set(event_target_checked(&ev))
                    />
                    "Assigned to me"
                </label>
            </div>
            <Show
                when=move || !rows.get().is_empty()
                fallback=|| view! { <EmptyState message="No tasks match your filters" /> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <SortHeader label="Task" key=TaskSort::Title sort=sort direction=direction />
                            <SortHeader label="Project" key=TaskSort::Project sort=sort direction=direction />
                            <th>"Status"</th>
                            <SortHeader label="Priority" key=TaskSort::Priority sort=sort direction=direction />
                            <SortHeader label="Due" key=TaskSort::DueDate sort=sort direction=direction />
                            <th>"Assignee"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|row| row.id
                            children=move |row| {
                                let project_id = row.project_id;
                                view! {
                                    <tr>
                                        <td class="strong">{row.title}</td>
                                        <td>
                                            <a
                                                class="link"
                                                on:click=move |_| ctx.open(Page::ProjectDetail(project_id))
                                            >
                                                {row.project_name}
                                            </a>
                                        </td>
                                        <td><StatusBadge label=row.status.label() tone=row.status.as_str() /></td>
                                        <td><StatusBadge label=row.priority.label() tone=row.priority.as_str() /></td>
                                        <td>
                                            <span class="date">{format::optional_date(row.due_date)}</span>
                                            <DueBadge due=row.due />
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
