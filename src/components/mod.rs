//! UI Components
//!
//! Reusable Leptos components.

mod dashboard_layout;
mod empty_state;
mod filter_select;
mod header;
mod message_body;
mod search_box;
mod sidebar;
mod sort_header;
mod stat_card;
mod status_badge;
mod unread_badge;

pub use dashboard_layout::DashboardLayout;
pub use empty_state::EmptyState;
pub use filter_select::{options_of, selected, selected_id, FilterSelect};
pub use header::PublicHeader;
pub use message_body::MessageBody;
pub use search_box::SearchBox;
pub use sidebar::Sidebar;
pub use sort_header::SortHeader;
pub use stat_card::StatCard;
pub use status_badge::{DueBadge, StatusBadge};
pub use unread_badge::UnreadBadge;
