//! Application Errors
//!
//! Lookup misses and empty listings are not errors; they resolve to fallback
//! labels and empty states. What remains is decoding embedded assets, parsing
//! routes and rejecting invalid message store operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to decode mock collection `{collection}`: {source}")]
    MockData {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to decode configuration: {0}")]
    Config(#[source] serde_json::Error),

    #[error("no route matches `{0}`")]
    UnknownRoute(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("message content is empty")]
    EmptyMessage,

    #[error("conversation {0} does not exist")]
    UnknownConversation(u32),
}

pub type AppResult<T> = Result<T, AppError>;
