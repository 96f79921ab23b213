//! Message Store
//!
//! Session-local conversations and messages. Sending and marking read only
//! touch this store, so the changes disappear on reload.

use chrono::NaiveDateTime;

use crate::error::StoreError;
use crate::models::{Conversation, Message};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageStore {
    conversations: Vec<Conversation>,
    messages: Vec<Message>,
}

impl MessageStore {
    pub fn new(conversations: Vec<Conversation>, messages: Vec<Message>) -> Self {
        Self { conversations, messages }
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn conversation(&self, id: u32) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    /// Messages of a conversation, oldest first
    pub fn messages_in(&self, conversation_id: u32) -> Vec<&Message> {
        let mut messages: Vec<&Message> = self
            .messages
            .iter()
            .filter(|m| m.conversation_id == conversation_id)
            .collect();
        messages.sort_by_key(|m| m.timestamp);
        messages
    }

    pub fn latest_in(&self, conversation_id: u32) -> Option<&Message> {
        self.messages
            .iter()
            .filter(|m| m.conversation_id == conversation_id)
            .max_by_key(|m| m.timestamp)
    }

    /// Unread messages addressed to `user_id` in one conversation
    pub fn unread_in(&self, conversation_id: u32, user_id: u32) -> usize {
        self.messages
            .iter()
            .filter(|m| m.conversation_id == conversation_id && m.sender_id != user_id && !m.read)
            .count()
    }

    /// Unread messages across every conversation `user_id` takes part in
    pub fn unread_for(&self, user_id: u32) -> usize {
        self.conversations
            .iter()
            .filter(|c| c.participants.contains(&user_id))
            .map(|c| self.unread_in(c.id, user_id))
            .sum()
    }

    /// Append a message and return its id
    pub fn append(
        &mut self,
        conversation_id: u32,
        sender_id: u32,
        content: &str,
        timestamp: NaiveDateTime,
    ) -> Result<u32, StoreError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(StoreError::EmptyMessage);
        }
        if self.conversation(conversation_id).is_none() {
            return Err(StoreError::UnknownConversation(conversation_id));
        }
        let id = self.messages.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        self.messages.push(Message {
            id,
            conversation_id,
            sender_id,
            content: content.to_string(),
            timestamp,
            read: true,
            attachments: Vec::new(),
        });
        log::debug!("appended message {id} to conversation {conversation_id}");
        Ok(id)
    }

    /// Mark everything `reader` received in a conversation as read.
    /// Returns how many messages changed.
    pub fn mark_read(&mut self, conversation_id: u32, reader: u32) -> usize {
        let mut changed = 0;
        for message in self
            .messages
            .iter_mut()
            .filter(|m| m.conversation_id == conversation_id && m.sender_id != reader && !m.read)
        {
            message.read = true;
            changed += 1;
        }
        if changed > 0 {
            log::debug!("marked {changed} messages read in conversation {conversation_id}");
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    fn message(id: u32, conversation_id: u32, sender_id: u32, timestamp: NaiveDateTime, read: bool) -> Message {
        Message {
            id,
            conversation_id,
            sender_id,
            content: format!("message {id}"),
            timestamp,
            read,
            attachments: Vec::new(),
        }
    }

    fn store() -> MessageStore {
        MessageStore::new(
            vec![
                Conversation { id: 1, subject: "Kickoff".to_string(), participants: vec![1, 2], project_id: None },
                Conversation { id: 2, subject: "Billing".to_string(), participants: vec![1, 3], project_id: None },
            ],
            vec![
                message(1, 1, 2, at(3, 9), false),
                message(2, 1, 1, at(2, 9), true),
                message(3, 1, 2, at(4, 9), false),
                message(4, 2, 3, at(5, 9), false),
            ],
        )
    }

    #[test]
    fn test_messages_in_are_chronological() {
        let store = store();
        let ids: Vec<u32> = store.messages_in(1).iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(store.latest_in(1).map(|m| m.id), Some(3));
    }

    #[test]
    fn test_unread_counts_exclude_own_messages() {
        let store = store();
        assert_eq!(store.unread_in(1, 1), 2);
        assert_eq!(store.unread_in(1, 2), 0);
        assert_eq!(store.unread_for(1), 3);
        assert_eq!(store.unread_for(2), 0);
    }

    #[test]
    fn test_append_assigns_next_id() {
        let mut store = store();
        let id = store.append(2, 1, "  Invoice attached  ", at(6, 10)).unwrap();
        assert_eq!(id, 5);
        let latest = store.latest_in(2).unwrap();
        assert_eq!(latest.content, "Invoice attached");
        assert!(latest.read);
    }

    #[test]
    fn test_append_rejects_blank_and_unknown() {
        let mut store = store();
        assert_eq!(store.append(1, 1, "   ", at(6, 10)), Err(StoreError::EmptyMessage));
        assert_eq!(store.append(9, 1, "hello", at(6, 10)), Err(StoreError::UnknownConversation(9)));
    }

    #[test]
    fn test_mark_read_is_idempotent() {
        let mut store = store();
        assert_eq!(store.mark_read(1, 1), 2);
        assert_eq!(store.mark_read(1, 1), 0);
        assert_eq!(store.unread_for(1), 1);
    }
}
