//! Dashboard Summary
//!
//! Stat cards, upcoming deadlines and recent invoices for the landing screen
//! of each role.

use chrono::NaiveDate;

use super::invoices::{derive_invoices, InvoiceQuery, InvoiceRow, InvoiceSummary};
use super::Calendar;
use crate::message_store::MessageStore;
use crate::mock_data::MockData;
use crate::models::{Lifecycle, Role};
use crate::pipeline::{sort_rows, Direction, DueState, SortValue};
use crate::session::Session;

const MAX_DEADLINES: usize = 8;
const MAX_RECENT_INVOICES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineKind {
    Project,
    Task,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Deadline {
    pub kind: DeadlineKind,
    pub id: u32,
    pub title: String,
    pub project_id: u32,
    pub project_name: String,
    pub due_date: NaiveDate,
    pub due: DueState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub active_projects: usize,
    pub open_tasks: usize,
    /// `None` for roles without invoice access
    pub invoices: Option<InvoiceSummary>,
    pub unread_messages: usize,
    pub deadlines: Vec<Deadline>,
    pub recent_invoices: Vec<InvoiceRow>,
}

/// Open tasks and projects that are overdue or due within the window
fn deadlines(data: &MockData, session: &Session, calendar: &Calendar) -> Vec<Deadline> {
    let in_scope = data.project_scope(session);
    let mut all: Vec<Deadline> = Vec::new();

    for project in data.projects.iter().filter(|p| in_scope(p.id)) {
        if let Some(due_date) = project.due_date {
            all.push(Deadline {
                kind: DeadlineKind::Project,
                id: project.id,
                title: project.name.clone(),
                project_id: project.id,
                project_name: project.name.clone(),
                due_date,
                due: calendar.due_state(Some(due_date), &project.status),
            });
        }
    }
    for task in data.tasks.iter().filter(|t| in_scope(t.project_id)) {
        if let Some(due_date) = task.due_date {
            all.push(Deadline {
                kind: DeadlineKind::Task,
                id: task.id,
                title: task.title.clone(),
                project_id: task.project_id,
                project_name: data.project_name(task.project_id).to_string(),
                due_date,
                due: calendar.due_state(Some(due_date), &task.status),
            });
        }
    }

    let mut pressing: Vec<&Deadline> = all
        .iter()
        .filter(|d| d.due.is_pressing())
        .collect();
    sort_rows(&mut pressing, Direction::Ascending, |d| SortValue::Date(Some(d.due_date)));
    pressing.into_iter().take(MAX_DEADLINES).cloned().collect()
}

pub fn derive_dashboard(
    data: &MockData,
    store: &MessageStore,
    session: &Session,
    calendar: &Calendar,
) -> DashboardSummary {
    let in_scope = data.project_scope(session);
    let active_projects = data
        .projects
        .iter()
        .filter(|p| in_scope(p.id) && !p.status.is_terminal())
        .count();
    let open_tasks = data
        .tasks
        .iter()
        .filter(|t| in_scope(t.project_id) && !t.status.is_terminal())
        .filter(|t| session.role != Role::AgencyMember || t.assignee_id == Some(session.user_id))
        .count();

    let (invoices, recent_invoices) = if session.role == Role::AgencyMember {
        (None, Vec::new())
    } else {
        let rows = derive_invoices(data, session, &InvoiceQuery::default(), calendar);
        let summary = InvoiceSummary::of(&rows);
        (Some(summary), rows.into_iter().take(MAX_RECENT_INVOICES).collect())
    };

    DashboardSummary {
        active_projects,
        open_tasks,
        invoices,
        unread_messages: store.unread_for(session.user_id),
        deadlines: deadlines(data, session, calendar),
        recent_invoices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::fixtures::*;
    use crate::models::{Priority, Task, TaskStatus};

    fn store(data: &MockData) -> MessageStore {
        MessageStore::new(data.conversations.clone(), data.messages.clone())
    }

    #[test]
    fn test_owner_summary() {
        let data = data();
        let summary = derive_dashboard(&data, &store(&data), &owner(), &calendar());
        assert_eq!(summary.active_projects, 5);
        assert_eq!(summary.open_tasks, 12);
        let invoices = summary.invoices.unwrap();
        assert_eq!(invoices.overdue_count, 2);
        assert_eq!(summary.recent_invoices.len(), 5);
        assert_eq!(summary.recent_invoices[0].number, "INV-2026-003");
    }

    #[test]
    fn test_deadlines_are_pressing_and_sorted() {
        let data = data();
        let summary = derive_dashboard(&data, &store(&data), &owner(), &calendar());
        assert!(!summary.deadlines.is_empty());
        assert!(summary.deadlines.len() <= MAX_DEADLINES);
        assert!(summary.deadlines.windows(2).all(|w| w[0].due_date <= w[1].due_date));
        assert!(summary.deadlines.iter().all(|d| d.due != DueState::Settled));
        assert_eq!(summary.deadlines[0].title, "HIPAA compliance review");
    }

    #[test]
    fn test_member_has_no_invoice_summary() {
        let data = data();
        let summary = derive_dashboard(&data, &store(&data), &member(), &calendar());
        assert!(summary.invoices.is_none());
        assert!(summary.recent_invoices.is_empty());
        assert_eq!(summary.open_tasks, 3);
    }

    #[test]
    fn test_client_unread_count() {
        let data = data();
        let summary = derive_dashboard(&data, &store(&data), &client(), &calendar());
        assert_eq!(summary.unread_messages, 1);
        assert_eq!(summary.active_projects, 2);
    }

    #[test]
    fn test_owner_counts_tasks_of_missing_projects() {
        let mut data = data();
        let due = calendar().today;
        data.tasks.push(Task {
            id: 900,
            project_id: 404,
            title: "Renew hosting".to_string(),
            status: TaskStatus::InProgress,
            priority: Priority::High,
            due_date: Some(due),
            assignee_id: None,
        });
        let summary = derive_dashboard(&data, &store(&data), &owner(), &calendar());
        assert_eq!(summary.open_tasks, 13);
        let renew = summary.deadlines.iter().find(|d| d.kind == DeadlineKind::Task && d.id == 900);
        assert_eq!(renew.map(|d| d.project_name.as_str()), Some("Unknown Project"));
        assert_eq!(renew.map(|d| d.due), Some(DueState::DueToday));
    }
}
