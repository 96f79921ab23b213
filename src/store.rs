//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Only state that
//! changes during a session lives here; the fixtures themselves are static.

use chrono::NaiveDateTime;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::StoreError;
use crate::message_store::MessageStore;
use crate::mock_data::MockData;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Conversations and messages, including ones sent this session
    pub messages: MessageStore,
}

impl AppState {
    pub fn new(data: &MockData) -> Self {
        Self {
            messages: MessageStore::new(data.conversations.clone(), data.messages.clone()),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a message to a conversation, returning the new message id
pub fn store_send_message(
    store: &AppStore,
    conversation_id: u32,
    sender_id: u32,
    content: &str,
    timestamp: NaiveDateTime,
) -> Result<u32, StoreError> {
    let id = store
        .messages()
        .write()
        .append(conversation_id, sender_id, content, timestamp)?;
    log::info!("sent message {id} to conversation {conversation_id}");
    Ok(id)
}

/// Mark a conversation read for `reader`. Does not notify subscribers when
/// nothing was unread.
pub fn store_mark_read(store: &AppStore, conversation_id: u32, reader: u32) -> usize {
    let unread = store.messages().read_untracked().unread_in(conversation_id, reader);
    if unread == 0 {
        return 0;
    }
    store.messages().write().mark_read(conversation_id, reader)
}
