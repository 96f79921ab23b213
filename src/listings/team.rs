//! Team Listing

use crate::mock_data::MockData;
use crate::models::{Lifecycle, Role, User};
use crate::pipeline::{sort_rows, Direction, Filter, SortValue};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TeamQuery {
    pub search: String,
    pub role: Option<Role>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamRow {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub title: String,
    pub role: Role,
    pub open_tasks: usize,
    pub projects: usize,
}

/// Everyone working on the agency side, clients excluded
pub fn derive_team(data: &MockData, query: &TeamQuery) -> Vec<TeamRow> {
    let mut rows = Filter::new()
        .when(|u: &User| u.role != Role::Client)
        .eq(query.role, |u| u.role)
        .text(&query.search, |u, needle| {
            needle.any([u.name.as_str(), u.email.as_str(), u.title.as_str()])
        })
        .apply(&data.users);

    sort_rows(&mut rows, Direction::Ascending, |u| SortValue::Text(&u.name));

    rows.into_iter()
        .map(|u| TeamRow {
            id: u.id,
            name: u.name.clone(),
            email: u.email.clone(),
            title: u.title.clone(),
            role: u.role,
            open_tasks: data
                .tasks
                .iter()
                .filter(|t| t.assignee_id == Some(u.id) && !t.status.is_terminal())
                .count(),
            projects: data
                .projects
                .iter()
                .filter(|p| p.assigned_to_id == Some(u.id))
                .count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::fixtures::*;

    #[test]
    fn test_excludes_clients() {
        let data = data();
        let rows = derive_team(&data, &TeamQuery::default());
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.role != Role::Client));
        assert_eq!(rows[0].name, "Diego Alvarez");
    }

    #[test]
    fn test_workload_counts() {
        let data = data();
        let rows = derive_team(&data, &TeamQuery { role: Some(Role::AgencyMember), ..Default::default() });
        let marcus = rows.iter().find(|r| r.name == "Marcus Webb").unwrap();
        assert_eq!(marcus.open_tasks, 3);
        assert_eq!(marcus.projects, 3);
    }

    #[test]
    fn test_search_by_title() {
        let data = data();
        let rows = derive_team(&data, &TeamQuery { search: "illustr".to_string(), ..Default::default() });
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Emma Larsen");
    }
}
