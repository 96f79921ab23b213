//! Screen Listings
//!
//! One query and one derivation per screen. Each derivation runs the shared
//! pipeline over the mock collections in the session's scope and returns
//! owned rows with foreign keys already resolved to labels.

pub mod clients;
pub mod conversations;
pub mod dashboard;
pub mod documents;
pub mod invoices;
pub mod projects;
pub mod tasks;
pub mod team;

use chrono::NaiveDate;

use crate::config::AppConfig;
use crate::models::Lifecycle;
use crate::pipeline::DueState;

/// "Today" plus the due-soon window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    pub today: NaiveDate,
    pub due_soon_days: i64,
}

impl Calendar {
    pub fn new(today: NaiveDate, due_soon_days: i64) -> Self {
        Self { today, due_soon_days }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.today(), config.due_soon_days)
    }

    pub fn due_state<S: Lifecycle>(&self, due: Option<NaiveDate>, status: &S) -> DueState {
        DueState::classify(due, status, self.today, self.due_soon_days)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;

    use super::Calendar;
    use crate::mock_data::MockData;
    use crate::models::Role;
    use crate::session::Session;

    pub fn data() -> MockData {
        MockData::from_fixtures().expect("fixtures decode")
    }

    /// Same date as the embedded configuration
    pub fn calendar() -> Calendar {
        Calendar::new(NaiveDate::from_ymd_opt(2026, 3, 16).unwrap(), 7)
    }

    pub fn owner() -> Session {
        Session { role: Role::AgencyOwner, user_id: 1, client_id: None }
    }

    pub fn member() -> Session {
        Session { role: Role::AgencyMember, user_id: 2, client_id: None }
    }

    pub fn freelancer() -> Session {
        Session { role: Role::Freelancer, user_id: 5, client_id: None }
    }

    pub fn client() -> Session {
        Session { role: Role::Client, user_id: 6, client_id: Some(1) }
    }
}
