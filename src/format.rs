//! Display Formatting
//!
//! Money, dates and sizes as they appear in tables and cards.

use chrono::{NaiveDate, NaiveDateTime};

/// `$12,500.00`
pub fn currency(amount: f64, symbol: &str) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if negative { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{:02}", cents % 100)
}

/// `Mar 16, 2026`
pub fn date(d: NaiveDate) -> String {
    d.format("%b %-d, %Y").to_string()
}

pub fn optional_date(d: Option<NaiveDate>) -> String {
    d.map(date).unwrap_or_else(|| "No due date".to_string())
}

/// Time of day for messages sent today, otherwise the short date
pub fn message_time(ts: NaiveDateTime, today: NaiveDate) -> String {
    if ts.date() == today {
        ts.format("%H:%M").to_string()
    } else {
        ts.format("%b %-d").to_string()
    }
}

pub fn file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else if bytes < GB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    }
}

/// First letters of the first and last name
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next().and_then(|w| w.chars().next());
    let last = words.last().and_then(|w| w.chars().next());
    first.into_iter().chain(last).flat_map(char::to_uppercase).collect()
}
