//! Projects Listing

use chrono::NaiveDate;

use super::documents::{derive_documents, DocumentQuery, DocumentRow};
use super::invoices::{derive_invoices, InvoiceQuery, InvoiceRow};
use super::tasks::{derive_tasks, TaskQuery, TaskRow};
use super::Calendar;
use crate::mock_data::MockData;
use crate::models::{Project, ProjectStatus};
use crate::pipeline::{sort_rows, Direction, DueState, Filter, SortValue};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectSort {
    Name,
    #[default]
    DueDate,
    Progress,
    Client,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectQuery {
    pub search: String,
    pub status: Option<ProjectStatus>,
    pub client_id: Option<u32>,
    pub sort: ProjectSort,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRow {
    pub id: u32,
    pub name: String,
    pub client_id: u32,
    pub client_name: String,
    pub status: ProjectStatus,
    pub due_date: Option<NaiveDate>,
    pub due: DueState,
    pub progress: u8,
    pub budget: f64,
    pub assignee_name: Option<String>,
}

impl ProjectRow {
    pub fn new(data: &MockData, project: &Project, calendar: &Calendar) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
            client_id: project.client_id,
            client_name: data.client_name(project.client_id).to_string(),
            status: project.status,
            due_date: project.due_date,
            due: calendar.due_state(project.due_date, &project.status),
            progress: project.progress.min(100),
            budget: project.budget,
            assignee_name: project.assigned_to_id.map(|id| data.user_name(id).to_string()),
        }
    }
}

pub fn derive_projects(
    data: &MockData,
    session: &Session,
    query: &ProjectQuery,
    calendar: &Calendar,
) -> Vec<ProjectRow> {
    let visible = data.visible_project_ids(session);
    let mut rows = Filter::new()
        .when(|p: &Project| visible.contains(&p.id))
        .eq(query.status, |p| p.status)
        .eq(query.client_id, |p| p.client_id)
        .text(&query.search, |p, needle| {
            needle.any([p.name.as_str(), data.client_name(p.client_id)])
        })
        .apply(&data.projects);

    sort_rows(&mut rows, query.direction, |p| match query.sort {
        ProjectSort::Name => SortValue::Text(&p.name),
        ProjectSort::DueDate => SortValue::Date(p.due_date),
        ProjectSort::Progress => SortValue::Number(f64::from(p.progress)),
        ProjectSort::Client => SortValue::Text(data.client_name(p.client_id)),
    });

    rows.into_iter().map(|p| ProjectRow::new(data, p, calendar)).collect()
}

/// One project with everything attached to it
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetail {
    pub row: ProjectRow,
    pub description: String,
    pub tasks: Vec<TaskRow>,
    pub documents: Vec<DocumentRow>,
    /// Empty for roles without invoice access
    pub invoices: Vec<InvoiceRow>,
}

pub fn project_detail(
    data: &MockData,
    session: &Session,
    project_id: u32,
    calendar: &Calendar,
) -> Option<ProjectDetail> {
    let project = data
        .project(project_id)
        .filter(|p| data.can_see_project(session, p.id))?;

    let tasks = TaskQuery { project_id: Some(project.id), ..Default::default() };
    let documents = DocumentQuery { project_id: Some(project.id), ..Default::default() };
    let invoices = InvoiceQuery { project_id: Some(project.id), ..Default::default() };

    Some(ProjectDetail {
        row: ProjectRow::new(data, project, calendar),
        description: project.description.clone(),
        tasks: derive_tasks(data, session, &tasks, calendar),
        documents: derive_documents(data, session, &documents),
        invoices: derive_invoices(data, session, &invoices, calendar),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::fixtures::*;

    #[test]
    fn test_owner_sees_all_projects_by_due_date() {
        let data = data();
        let rows = derive_projects(&data, &owner(), &ProjectQuery::default(), &calendar());
        assert_eq!(rows.len(), data.projects.len());
        // the project without a due date is last
        assert_eq!(rows.last().unwrap().due_date, None);
        assert_eq!(rows[0].name, "Menu & Signage Design");
    }

    #[test]
    fn test_status_and_search_combine() {
        let data = data();
        let query = ProjectQuery {
            search: "acme".to_string(),
            status: Some(ProjectStatus::InProgress),
            ..Default::default()
        };
        let rows = derive_projects(&data, &owner(), &query, &calendar());
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Product Catalog Illustrations", "Website Redesign"]);
    }

    #[test]
    fn test_overdue_project_is_flagged() {
        let data = data();
        let rows = derive_projects(&data, &freelancer(), &ProjectQuery::default(), &calendar());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].due, DueState::Overdue(4));
    }

    #[test]
    fn test_client_scope() {
        let data = data();
        let rows = derive_projects(&data, &client(), &ProjectQuery::default(), &calendar());
        assert!(rows.iter().all(|r| r.client_name == "Acme Corp"));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_sort_by_client_name_descending() {
        let data = data();
        let query = ProjectQuery {
            sort: ProjectSort::Client,
            direction: Direction::Descending,
            ..Default::default()
        };
        let rows = derive_projects(&data, &owner(), &query, &calendar());
        assert_eq!(rows[0].client_name, "Orbit Coffee Co.");
        assert_eq!(rows.last().unwrap().client_name, "Acme Corp");
    }

    #[test]
    fn test_project_detail_collects_related_rows() {
        let data = data();
        let detail = project_detail(&data, &owner(), 1, &calendar()).unwrap();
        assert_eq!(detail.row.name, "Website Redesign");
        assert_eq!(detail.tasks.len(), 5);
        assert_eq!(detail.tasks.last().unwrap().due_date, None);
        assert_eq!(detail.documents.len(), 3);
        let numbers: Vec<_> = detail.invoices.iter().map(|i| i.number.as_str()).collect();
        assert_eq!(numbers, vec!["INV-2026-007", "INV-2026-001"]);
    }

    #[test]
    fn test_project_detail_respects_scope() {
        let data = data();
        assert!(project_detail(&data, &client(), 2, &calendar()).is_none());
        assert!(project_detail(&data, &owner(), 404, &calendar()).is_none());
        let detail = project_detail(&data, &member(), 1, &calendar()).unwrap();
        assert!(detail.invoices.is_empty());
    }
}
