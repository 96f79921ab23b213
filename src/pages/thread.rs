//! Conversation Thread Page
//!
//! Messages of one conversation and the composer. Opening the thread marks
//! it read for the session user.

use leptos::prelude::*;

use crate::components::{EmptyState, MessageBody};
use crate::context::use_app_context;
use crate::format;
use crate::listings::conversations::derive_thread;
use crate::routes::Page;
use crate::store::{store_mark_read, store_send_message, use_app_store, AppStateStoreFields};

#[component]
pub fn ThreadPage(conversation_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let session = ctx.dashboard_session();

    let subject = store
        .messages()
        .read_untracked()
        .conversation(conversation_id)
        .filter(|c| ctx.data.can_see_conversation(&session, c))
        .map(|c| c.subject.clone());

    let Some(subject) = subject else {
        log::info!("conversation {conversation_id} not visible to {}", session.role.slug());
        return view! {
            <EmptyState message="Conversation not found" />
            <button class="back-btn" on:click=move |_| ctx.open(Page::Messages)>"← Messages"</button>
        }
        .into_any();
    };

    store_mark_read(&store, conversation_id, session.user_id);

    let thread = Memo::new(move |_| {
        let messages = store.messages().read();
        derive_thread(ctx.data, &messages, &session, conversation_id).unwrap_or_default()
    });

    let draft = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move || {
        let content = draft.get_untracked();
        match store_send_message(&store, conversation_id, session.user_id, &content, ctx.config.now()) {
            Ok(_) => {
                draft.set(String::new());
                error.set(None);
            }
            Err(e) => {
                log::warn!("message not sent: {e}");
                error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <div class="thread-page">
            <button class="back-btn" on:click=move |_| ctx.open(Page::Messages)>"← Messages"</button>
            <h2 class="thread-subject">{subject}</h2>
            <ul class="message-list">
                <For
                    each=move || thread.get()
                    key=|message| message.id
                    children=move |message| {
                        let bubble_class = if message.mine { "message mine" } else { "message" };
                        view! {
                            <li class=bubble_class>
                                <div class="message-meta">
                                    <span class="message-sender">{message.sender_name}</span>
                                    <span class="message-time">
                                        {format::message_time(message.timestamp, ctx.calendar.today)}
                                    </span>
                                </div>
                                <MessageBody content=message.content attachments=message.attachments />
                            </li>
                        }
                    }
                />
            </ul>
            <form
                class="composer"
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }
            >
                <textarea
                    placeholder="Write a message. Markdown works; Shift+Enter for a new line."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            submit();
                        }
                    }
                ></textarea>
                <button type="submit" disabled=move || draft.get().trim().is_empty()>"Send"</button>
            </form>
            {move || error.get().map(|e| view! { <p class="composer-error">{e}</p> })}
        </div>
    }
    .into_any()
}
