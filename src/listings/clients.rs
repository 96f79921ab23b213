//! Clients Listing

use crate::mock_data::MockData;
use crate::models::{Client, ClientStatus, InvoiceStatus, Lifecycle};
use crate::pipeline::{sort_rows, Direction, Filter, SortValue};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientSort {
    #[default]
    Name,
    Projects,
    Outstanding,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClientQuery {
    pub search: String,
    pub status: Option<ClientStatus>,
    pub sort: ClientSort,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientRow {
    pub id: u32,
    pub name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub industry: String,
    pub status: ClientStatus,
    pub project_count: usize,
    pub active_projects: usize,
    pub outstanding: f64,
}

fn project_counts(data: &MockData, client_id: u32) -> (usize, usize) {
    data.projects
        .iter()
        .filter(|p| p.client_id == client_id)
        .fold((0, 0), |(all, active), p| {
            (all + 1, active + usize::from(!p.status.is_terminal()))
        })
}

fn outstanding(data: &MockData, client_id: u32) -> f64 {
    data.invoices
        .iter()
        .filter(|i| i.client_id == client_id && i.status.is_outstanding())
        .map(|i| i.total)
        .sum()
}

pub fn derive_clients(data: &MockData, session: &Session, query: &ClientQuery) -> Vec<ClientRow> {
    let visible = data.visible_client_ids(session);
    let mut rows = Filter::new()
        .when(|c: &Client| visible.contains(&c.id))
        .eq(query.status, |c| c.status)
        .text(&query.search, |c, needle| {
            needle.any([
                c.name.as_str(),
                c.contact_name.as_str(),
                c.email.as_str(),
                c.industry.as_str(),
            ])
        })
        .apply(&data.clients);

    sort_rows(&mut rows, query.direction, |c| match query.sort {
        ClientSort::Name => SortValue::Text(&c.name),
        ClientSort::Projects => SortValue::Number(project_counts(data, c.id).0 as f64),
        ClientSort::Outstanding => SortValue::Number(outstanding(data, c.id)),
    });

    rows.into_iter()
        .map(|c| {
            let (project_count, active_projects) = project_counts(data, c.id);
            ClientRow {
                id: c.id,
                name: c.name.clone(),
                contact_name: c.contact_name.clone(),
                email: c.email.clone(),
                phone: c.phone.clone(),
                industry: c.industry.clone(),
                status: c.status,
                project_count,
                active_projects,
                outstanding: outstanding(data, c.id),
            }
        })
        .collect()
}

/// Overdue invoices of a client; drives the warning chip on the client card
pub fn has_overdue(data: &MockData, client_id: u32) -> bool {
    data.invoices
        .iter()
        .any(|i| i.client_id == client_id && i.status == InvoiceStatus::Overdue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::fixtures::*;

    #[test]
    fn test_alphabetical_by_default() {
        let data = data();
        let rows = derive_clients(&data, &owner(), &ClientQuery::default());
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Acme Corp", "Bloom Botanics", "Lumen Health", "Northwind Logistics", "Orbit Coffee Co."]
        );
    }

    #[test]
    fn test_aggregates() {
        let data = data();
        let rows = derive_clients(&data, &owner(), &ClientQuery::default());
        let acme = rows.iter().find(|r| r.id == 1).unwrap();
        assert_eq!(acme.project_count, 2);
        assert_eq!(acme.active_projects, 2);
        assert_eq!(acme.outstanding, 10600.0);
        let bloom = rows.iter().find(|r| r.id == 2).unwrap();
        assert_eq!(bloom.active_projects, 1);
    }

    #[test]
    fn test_sort_by_outstanding_descending() {
        let data = data();
        let query = ClientQuery {
            sort: ClientSort::Outstanding,
            direction: Direction::Descending,
            ..Default::default()
        };
        let rows = derive_clients(&data, &owner(), &query);
        assert_eq!(rows[0].name, "Lumen Health");
    }

    #[test]
    fn test_inactive_filter_and_search() {
        let data = data();
        let query = ClientQuery { status: Some(ClientStatus::Inactive), ..Default::default() };
        assert_eq!(derive_clients(&data, &owner(), &query).len(), 1);

        let query = ClientQuery { search: "health".to_string(), ..Default::default() };
        let rows = derive_clients(&data, &owner(), &query);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].contact_name, "Ava Thompson");
    }

    #[test]
    fn test_freelancer_scope_and_overdue_flag() {
        let data = data();
        let rows = derive_clients(&data, &freelancer(), &ClientQuery::default());
        assert_eq!(rows.len(), 1);
        assert!(has_overdue(&data, 4));
        assert!(!has_overdue(&data, 1));
    }
}
