//! Conversations Listing
//!
//! Reads from the session's `MessageStore` rather than the fixtures, so sent
//! messages and read receipts show up immediately.

use chrono::NaiveDateTime;

use crate::message_store::MessageStore;
use crate::mock_data::MockData;
use crate::models::{Attachment, Conversation};
use crate::pipeline::{sort_rows, Direction, Filter, SortValue};
use crate::session::Session;

const PREVIEW_CHARS: usize = 80;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConversationQuery {
    pub search: String,
    pub unread_only: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversationRow {
    pub id: u32,
    pub subject: String,
    /// Everyone except the session user
    pub participant_names: Vec<String>,
    pub project_name: Option<String>,
    pub preview: String,
    pub last_activity: Option<NaiveDateTime>,
    pub unread: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageRow {
    pub id: u32,
    pub sender_name: String,
    pub mine: bool,
    pub content: String,
    pub timestamp: NaiveDateTime,
    pub attachments: Vec<Attachment>,
}

fn preview(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}…", head.trim_end())
    } else {
        head
    }
}

pub fn derive_conversations(
    data: &MockData,
    store: &MessageStore,
    session: &Session,
    query: &ConversationQuery,
) -> Vec<ConversationRow> {
    let me = session.user_id;
    let mut rows = Filter::new()
        .when(|c: &Conversation| data.can_see_conversation(session, c))
        .when(|c| !query.unread_only || store.unread_in(c.id, me) > 0)
        .text(&query.search, |c, needle| {
            needle.matches(&c.subject)
                || c.participants.iter().any(|&id| needle.matches(data.user_name(id)))
                || store.messages_in(c.id).iter().any(|m| needle.matches(&m.content))
        })
        .apply(store.conversations());

    sort_rows(&mut rows, Direction::Descending, |c| {
        SortValue::Timestamp(store.latest_in(c.id).map(|m| m.timestamp))
    });

    rows.into_iter()
        .map(|c| {
            let latest = store.latest_in(c.id);
            ConversationRow {
                id: c.id,
                subject: c.subject.clone(),
                participant_names: c
                    .participants
                    .iter()
                    .filter(|&&id| id != me)
                    .map(|&id| data.user_name(id).to_string())
                    .collect(),
                project_name: c.project_id.map(|id| data.project_name(id).to_string()),
                preview: latest.map(|m| preview(&m.content)).unwrap_or_default(),
                last_activity: latest.map(|m| m.timestamp),
                unread: store.unread_in(c.id, me),
            }
        })
        .collect()
}

/// Messages of one conversation, oldest first. `None` when the conversation
/// does not exist or is out of scope.
pub fn derive_thread(
    data: &MockData,
    store: &MessageStore,
    session: &Session,
    conversation_id: u32,
) -> Option<Vec<MessageRow>> {
    let conversation = store.conversation(conversation_id)?;
    if !data.can_see_conversation(session, conversation) {
        return None;
    }
    Some(
        store
            .messages_in(conversation_id)
            .into_iter()
            .map(|m| MessageRow {
                id: m.id,
                sender_name: data.user_name(m.sender_id).to_string(),
                mine: m.sender_id == session.user_id,
                content: m.content.clone(),
                timestamp: m.timestamp,
                attachments: m.attachments.clone(),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::fixtures::*;
    use chrono::NaiveDate;

    fn store(data: &MockData) -> MessageStore {
        MessageStore::new(data.conversations.clone(), data.messages.clone())
    }

    #[test]
    fn test_latest_activity_first() {
        let data = data();
        let store = store(&data);
        let rows = derive_conversations(&data, &store, &owner(), &ConversationQuery::default());
        assert_eq!(rows.len(), data.conversations.len());
        assert_eq!(rows[0].subject, "Team standup notes");
        assert!(rows.windows(2).all(|w| w[0].last_activity >= w[1].last_activity));
    }

    #[test]
    fn test_client_sees_only_own_conversations() {
        let data = data();
        let store = store(&data);
        let rows = derive_conversations(&data, &store, &client(), &ConversationQuery::default());
        let ids: Vec<u32> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(rows.iter().all(|r| !r.participant_names.contains(&"James Porter".to_string())));
    }

    #[test]
    fn test_unread_only_and_mark_read() {
        let data = data();
        let mut store = store(&data);
        let query = ConversationQuery { unread_only: true, ..Default::default() };
        let before = derive_conversations(&data, &store, &client(), &query);
        assert_eq!(before.len(), 1);
        assert_eq!(before[0].id, 3);

        store.mark_read(3, client().user_id);
        assert!(derive_conversations(&data, &store, &client(), &query).is_empty());
    }

    #[test]
    fn test_search_matches_message_content() {
        let data = data();
        let store = store(&data);
        let query = ConversationQuery { search: "printer".to_string(), ..Default::default() };
        let rows = derive_conversations(&data, &store, &owner(), &query);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].subject, "Illustration timeline");
    }

    #[test]
    fn test_sent_message_moves_conversation_to_top() {
        let data = data();
        let mut store = store(&data);
        let sent_at = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap().and_hms_opt(8, 0, 0).unwrap();
        store.append(4, 1, "Any update on the revision?", sent_at).unwrap();
        let rows = derive_conversations(&data, &store, &owner(), &ConversationQuery::default());
        assert_eq!(rows[0].id, 4);
        assert_eq!(rows[0].preview, "Any update on the revision?");
    }

    #[test]
    fn test_thread_scope_and_order() {
        let data = data();
        let store = store(&data);
        let thread = derive_thread(&data, &store, &client(), 1).unwrap();
        assert_eq!(thread.len(), 4);
        assert!(thread[0].mine);
        assert!(thread.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
        assert!(derive_thread(&data, &store, &client(), 2).is_none());
        assert!(derive_thread(&data, &store, &owner(), 77).is_none());
    }

    #[test]
    fn test_preview_truncates() {
        let long = "word ".repeat(40);
        let p = preview(&long);
        assert!(p.ends_with('…'));
        assert!(p.chars().count() <= PREVIEW_CHARS + 1);
        assert_eq!(preview("short"), "short");
    }
}
