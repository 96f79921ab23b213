//! Derived Due Fields
//!
//! Day arithmetic for deadlines. Both sides are whole calendar days.

use chrono::NaiveDate;

use crate::models::Lifecycle;

/// Whole days from `today` until `due`; negative once the date has passed
pub fn days_until(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

/// Past due and still open
pub fn is_overdue<S: Lifecycle>(due: Option<NaiveDate>, status: &S, today: NaiveDate) -> bool {
    match due {
        Some(due) => !status.is_terminal() && days_until(due, today) < 0,
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueState {
    /// Terminal status; the date no longer matters
    Settled,
    NoDate,
    Overdue(i64),
    DueToday,
    DueSoon(i64),
    Upcoming(i64),
}

impl DueState {
    pub fn classify<S: Lifecycle>(
        due: Option<NaiveDate>,
        status: &S,
        today: NaiveDate,
        soon_window: i64,
    ) -> Self {
        if status.is_terminal() {
            return DueState::Settled;
        }
        let Some(due) = due else {
            return DueState::NoDate;
        };
        match days_until(due, today) {
            d if d < 0 => DueState::Overdue(-d),
            0 => DueState::DueToday,
            d if d <= soon_window => DueState::DueSoon(d),
            d => DueState::Upcoming(d),
        }
    }

    /// Overdue, due today or inside the due-soon window
    pub fn is_pressing(&self) -> bool {
        matches!(self, DueState::Overdue(_) | DueState::DueToday | DueState::DueSoon(_))
    }

    /// Short human label, e.g. "Overdue by 3 days"
    pub fn label(&self) -> String {
        match *self {
            DueState::Settled | DueState::NoDate => String::new(),
            DueState::Overdue(d) => format!("Overdue by {}", plural_days(d)),
            DueState::DueToday => "Due today".to_string(),
            DueState::DueSoon(d) | DueState::Upcoming(d) => format!("Due in {}", plural_days(d)),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            DueState::Overdue(_) => "due overdue",
            DueState::DueToday | DueState::DueSoon(_) => "due soon",
            _ => "due",
        }
    }
}

fn plural_days(d: i64) -> String {
    if d == 1 {
        "1 day".to_string()
    } else {
        format!("{d} days")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvoiceStatus, TaskStatus};

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, d).unwrap()
    }

    #[test]
    fn test_days_until_crosses_month() {
        assert_eq!(days_until(date(3, 2), date(2, 27)), 3);
        assert_eq!(days_until(date(2, 27), date(3, 2)), -3);
    }

    #[test]
    fn test_paid_invoice_is_never_overdue() {
        assert!(!is_overdue(Some(date(1, 1)), &InvoiceStatus::Paid, date(6, 1)));
        assert!(is_overdue(Some(date(1, 1)), &InvoiceStatus::Sent, date(6, 1)));
        assert!(!is_overdue(None, &InvoiceStatus::Sent, date(6, 1)));
    }

    #[test]
    fn test_classify() {
        let today = date(5, 10);
        let open = TaskStatus::Todo;
        assert_eq!(DueState::classify(Some(date(5, 7)), &open, today, 7), DueState::Overdue(3));
        assert_eq!(DueState::classify(Some(today), &open, today, 7), DueState::DueToday);
        assert_eq!(DueState::classify(Some(date(5, 17)), &open, today, 7), DueState::DueSoon(7));
        assert_eq!(DueState::classify(Some(date(5, 18)), &open, today, 7), DueState::Upcoming(8));
        assert!(DueState::DueSoon(7).is_pressing());
        assert!(!DueState::Upcoming(8).is_pressing());
        assert!(!DueState::NoDate.is_pressing());
        assert_eq!(DueState::classify(None, &open, today, 7), DueState::NoDate);
        assert_eq!(
            DueState::classify(Some(date(5, 7)), &TaskStatus::Completed, today, 7),
            DueState::Settled
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(DueState::Overdue(1).label(), "Overdue by 1 day");
        assert_eq!(DueState::DueSoon(4).label(), "Due in 4 days");
        assert_eq!(DueState::Settled.label(), "");
    }
}
