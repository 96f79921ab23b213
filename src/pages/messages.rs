//! Messages Page
//!
//! Conversation inbox, most recent activity first.

use leptos::prelude::*;

use crate::components::{EmptyState, SearchBox};
use crate::context::use_app_context;
use crate::format;
use crate::listings::conversations::{derive_conversations, ConversationQuery};
use crate::routes::Page;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn MessagesPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let session = ctx.dashboard_session();

    let search = RwSignal::new(String::new());
    let unread_only = RwSignal::new(false);

    let rows = Memo::new(move |_| {
        let query = ConversationQuery { search: search.get(), unread_only: unread_only.get() };
        let messages = store.messages().read();
        derive_conversations(ctx.data, &messages, &session, &query)
    });

    view! {
        <div class="listing-page">
            <div class="toolbar">
                <SearchBox value=search placeholder="Search subject, people or messages" />
                <label class="toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || unread_only.get()
                        on:change=move |ev| unread_only.set(event_target_checked(&ev))
                    />
                    "Unread only"
                </label>
            </div>
            <Show
                when=move || !rows.get().is_empty()
                fallback=|| view! { <EmptyState message="No conversations" /> }
            >
                <ul class="conversation-list">
                    <For
                        each=move || rows.get()
                        key=|row| (row.id, row.unread, row.last_activity)
                        children=move |row| {
                            let id = row.id;
                            let item_class = if row.unread > 0 { "conversation unread" } else { "conversation" };
                            let time = row
                                .last_activity
                                .map(|ts| format::message_time(ts, ctx.calendar.today))
                                .unwrap_or_default();
                            view! {
                                <li class=item_class on:click=move |_| ctx.open(Page::Thread(id))>
                                    <div class="conversation-head">
                                        <span class="conversation-subject">{row.subject}</span>
                                        <span class="conversation-time">{time}</span>
                                    </div>
                                    <div class="conversation-people">
                                        {row.participant_names.join(", ")}
                                        {row.project_name.map(|p| view! { <span class="muted">" · " {p}</span> })}
                                    </div>
                                    <div class="conversation-preview">
                                        <span>{row.preview}</span>
                                        {(row.unread > 0)
                                            .then(|| view! { <span class="unread-badge">{row.unread}</span> })}
                                    </div>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
