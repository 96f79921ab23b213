//! Documents Page
//!
//! Files grouped under their project; groups in alphabetical order.

use leptos::prelude::*;

use super::project_options;
use crate::components::{
    options_of, selected, selected_id, EmptyState, FilterSelect, SearchBox, SortHeader,
};
use crate::context::use_app_context;
use crate::format;
use crate::listings::documents::{derive_document_groups, DocumentQuery, DocumentSort};
use crate::models::DocumentKind;
use crate::routes::Page;

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let ctx = use_app_context();
    let session = ctx.dashboard_session();
    let defaults = DocumentQuery::default();

    let search = RwSignal::new(String::new());
    let kind = RwSignal::new(String::new());
    let project = RwSignal::new(String::new());
    let sort = RwSignal::new(defaults.sort);
    let direction = RwSignal::new(defaults.direction);

    let groups = Memo::new(move |_| {
        let query = DocumentQuery {
            search: search.get(),
            kind: selected(&DocumentKind::ALL, &kind.get(), DocumentKind::as_str),
            project_id: selected_id(&project.get()),
            sort: sort.get(),
            direction: direction.get(),
        };
        derive_document_groups(ctx.data, &session, &query)
    });
    let total = move || groups.with(|groups| groups.iter().map(|g| g.documents.len()).sum::<usize>());

    view! {
        <div class="listing-page">
            <div class="toolbar">
                <SearchBox value=search placeholder="Search file or uploader" />
                <FilterSelect
                    label="Type"
                    options=options_of(&DocumentKind::ALL, DocumentKind::as_str, DocumentKind::label)
                    value=kind
                />
                <FilterSelect
                    label="Project"
                    options=project_options(ctx.data, &session)
                    value=project
                    all_label="All projects"
                />
                <span class="result-count">{move || format!("{} files", total())}</span>
            </div>
            <Show
                when=move || { total() > 0 }
                fallback=|| view! { <EmptyState message="No files match your filters" /> }
            >
                <For
                    each=move || groups.get()
                    key=|group| (group.project_id, group.documents.iter().map(|d| d.id).collect::<Vec<_>>())
                    children=move |group| {
                        let project_id = group.project_id;
                        let title = if group.has_project_page {
                            view! {
                                <a class="link" on:click=move |_| ctx.open(Page::ProjectDetail(project_id))>
                                    {group.project_name}
                                </a>
                            }
                            .into_any()
                        } else {
                            view! { <span>{group.project_name}</span> }.into_any()
                        };
                        view! {
                            <section class="document-group">
                                <h3 class="group-title">
                                    {title}
                                    <span class="muted">{format!(" ({})", group.documents.len())}</span>
                                </h3>
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <SortHeader label="Name" key=DocumentSort::Name sort=sort direction=direction />
                                            <th>"Uploaded by"</th>
                                            <SortHeader label="Uploaded" key=DocumentSort::UploadDate sort=sort direction=direction />
                                            <SortHeader label="Size" key=DocumentSort::Size sort=sort direction=direction />
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {group
                                            .documents
                                            .into_iter()
                                            .map(|doc| {
                                                view! {
                                                    <tr>
                                                        <td>
                                                            <span class="file-icon">{doc.kind.icon()}</span>
                                                            {doc.name}
                                                        </td>
                                                        <td>{doc.uploader_name}</td>
                                                        <td>{format::date(doc.upload_date)}</td>
                                                        <td class="num">{format::file_size(doc.size_bytes)}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </section>
                        }
                    }
                />
            </Show>
        </div>
    }
}
