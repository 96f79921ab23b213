//! Tasks Listing

use chrono::NaiveDate;

use super::Calendar;
use crate::mock_data::MockData;
use crate::models::{Priority, Task, TaskStatus};
use crate::pipeline::{sort_rows, Direction, DueState, Filter, SortValue};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskSort {
    #[default]
    DueDate,
    Title,
    Priority,
    Project,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskQuery {
    pub search: String,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub project_id: Option<u32>,
    /// Only tasks assigned to the session user
    pub mine_only: bool,
    pub sort: TaskSort,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: u32,
    pub title: String,
    pub project_id: u32,
    pub project_name: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub due: DueState,
    pub assignee_name: Option<String>,
}

impl TaskRow {
    pub fn new(data: &MockData, task: &Task, calendar: &Calendar) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            project_id: task.project_id,
            project_name: data.project_name(task.project_id).to_string(),
            status: task.status,
            priority: task.priority,
            due_date: task.due_date,
            due: calendar.due_state(task.due_date, &task.status),
            assignee_name: task.assignee_id.map(|id| data.user_name(id).to_string()),
        }
    }
}

pub fn derive_tasks(
    data: &MockData,
    session: &Session,
    query: &TaskQuery,
    calendar: &Calendar,
) -> Vec<TaskRow> {
    let in_scope = data.project_scope(session);
    let me = session.user_id;
    let mut rows = Filter::new()
        .when(|t: &Task| in_scope(t.project_id))
        .when(|t| !query.mine_only || t.assignee_id == Some(me))
        .eq(query.status, |t| t.status)
        .eq(query.priority, |t| t.priority)
        .eq(query.project_id, |t| t.project_id)
        .text(&query.search, |t, needle| {
            needle.any([t.title.as_str(), data.project_name(t.project_id)])
        })
        .apply(&data.tasks);

    sort_rows(&mut rows, query.direction, |t| match query.sort {
        TaskSort::DueDate => SortValue::Date(t.due_date),
        TaskSort::Title => SortValue::Text(&t.title),
        TaskSort::Priority => SortValue::Number(f64::from(t.priority.rank())),
        TaskSort::Project => SortValue::Text(data.project_name(t.project_id)),
    });

    rows.into_iter().map(|t| TaskRow::new(data, t, calendar)).collect()
}
