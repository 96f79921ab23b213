//! Team Page

use leptos::prelude::*;

use crate::components::{selected, EmptyState, FilterSelect, SearchBox};
use crate::context::use_app_context;
use crate::format;
use crate::listings::team::{derive_team, TeamQuery};
use crate::models::Role;

const AGENCY_ROLES: [Role; 3] = [Role::AgencyOwner, Role::AgencyMember, Role::Freelancer];

#[component]
pub fn TeamPage() -> impl IntoView {
    let ctx = use_app_context();

    let search = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());

    let rows = Memo::new(move |_| {
        let query = TeamQuery {
            search: search.get(),
            role: selected(&AGENCY_ROLES, &role.get(), Role::slug),
        };
        derive_team(ctx.data, &query)
    });

    let role_options = AGENCY_ROLES
        .iter()
        .map(|r| (r.slug().to_string(), r.label().to_string()))
        .collect::<Vec<_>>();

    view! {
        <div class="listing-page">
            <div class="toolbar">
                <SearchBox value=search placeholder="Search name, email or title" />
                <FilterSelect label="Role" options=role_options value=role />
            </div>
            <Show
                when=move || !rows.get().is_empty()
                fallback=|| view! { <EmptyState message="Nobody matches your search" /> }
            >
                <div class="team-grid">
                    <For
                        each=move || rows.get()
                        key=|row| row.id
                        children=move |row| {
                            let initials = format::initials(&row.name);
                            view! {
                                <div class="team-card">
                                    <span class="avatar">{initials}</span>
                                    <div class="team-meta">
                                        <span class="strong">{row.name}</span>
                                        <span class="muted">{row.title}</span>
                                        <span class="muted">{row.email}</span>
                                    </div>
                                    <span class="role-chip">{row.role.label()}</span>
                                    <div class="team-load">
                                        <span>{format!("{} open tasks", row.open_tasks)}</span>
                                        <span>{format!("{} projects", row.projects)}</span>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
