//! Sort Stage
//!
//! Rows are ordered by a single named key and a direction. The sort is stable,
//! so rows with tied keys keep their filtered order. Missing dates always go
//! last, whichever way the column is sorted.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn toggle(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Ascending => "▲",
            Direction::Descending => "▼",
        }
    }
}

/// Value a row exposes for the selected sort key
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue<'a> {
    Date(Option<NaiveDate>),
    Timestamp(Option<NaiveDateTime>),
    Text(&'a str),
    Number(f64),
}

/// Case-insensitive ordering with lowercase ahead of uppercase on ties,
/// close to what a browser collator does for Latin text
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    primary.then_with(|| a.cmp(b).reverse())
}

fn cmp_present_first<V: Ord>(a: &Option<V>, b: &Option<V>, direction: Direction) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn compare(a: &SortValue<'_>, b: &SortValue<'_>, direction: Direction) -> Ordering {
    match (a, b) {
        (SortValue::Date(a), SortValue::Date(b)) => cmp_present_first(a, b, direction),
        (SortValue::Timestamp(a), SortValue::Timestamp(b)) => cmp_present_first(a, b, direction),
        (SortValue::Text(a), SortValue::Text(b)) => direction.apply(locale_cmp(a, b)),
        (SortValue::Number(a), SortValue::Number(b)) => {
            direction.apply(a.partial_cmp(b).unwrap_or(Ordering::Equal))
        }
        // a key function returns one variant for every row
        _ => Ordering::Equal,
    }
}

/// Stable in-place sort of borrowed rows
pub fn sort_rows<'s, T>(
    rows: &mut [&'s T],
    direction: Direction,
    key: impl Fn(&'s T) -> SortValue<'s>,
) {
    rows.sort_by(|a, b| compare(&key(*a), &key(*b), direction));
}
