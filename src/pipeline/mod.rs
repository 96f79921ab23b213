//! List Derivation Pipeline
//!
//! Filter → sort → group over borrowed rows. Every stage is a pure function
//! of its inputs; screens rerun the whole pipeline whenever a criterion
//! changes.

pub mod due;
pub mod filter;
pub mod group;
pub mod sort;

pub use due::{days_until, is_overdue, DueState};
pub use filter::Filter;
pub use group::group_by_label;
pub use sort::{locale_cmp, sort_rows, Direction, SortValue};
