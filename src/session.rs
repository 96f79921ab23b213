//! Session
//!
//! Who is looking at the dashboard. An auth provider would supply this; here
//! the role comes from the route prefix and the user from configuration.

use crate::config::AppConfig;
use crate::mock_data::MockData;
use crate::models::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
    pub user_id: u32,
    /// Client record of a client contact
    pub client_id: Option<u32>,
}

impl Session {
    /// Session for the configured demo user of `role`. Without a configured
    /// user the first fixture user holding that role is used.
    pub fn for_role(role: Role, config: &AppConfig, data: &MockData) -> Self {
        let user = config
            .demo_user(role)
            .and_then(|id| data.user(id))
            .or_else(|| data.users.iter().find(|u| u.role == role));
        match user {
            Some(user) => Self { role, user_id: user.id, client_id: user.client_id },
            None => {
                log::warn!("no user available for role {}", role.slug());
                Self { role, user_id: 0, client_id: None }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_session_carries_client_id() {
        let data = MockData::from_fixtures().unwrap();
        let config = AppConfig::load();
        let session = Session::for_role(Role::Client, &config, &data);
        assert_eq!(session.user_id, 6);
        assert_eq!(session.client_id, Some(1));
    }

    #[test]
    fn test_unconfigured_role_uses_first_matching_user() {
        let data = MockData::from_fixtures().unwrap();
        let session = Session::for_role(Role::Freelancer, &AppConfig::default(), &data);
        assert_eq!(session.user_id, 4);
    }
}
