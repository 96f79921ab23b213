//! Domain Models
//!
//! Records loaded from the mock fixtures. All of them are flat and immutable
//! for the lifetime of the page.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Statuses with an end state. Items in an end state are never overdue.
pub trait Lifecycle {
    fn is_terminal(&self) -> bool;
}

/// Dashboard role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    AgencyOwner,
    AgencyMember,
    Freelancer,
    Client,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::AgencyOwner,
        Role::AgencyMember,
        Role::Freelancer,
        Role::Client,
    ];

    /// Route prefix, e.g. `agency-owner`
    pub fn slug(&self) -> &'static str {
        match self {
            Role::AgencyOwner => "agency-owner",
            Role::AgencyMember => "agency-member",
            Role::Freelancer => "freelancer",
            Role::Client => "client",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.slug() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::AgencyOwner => "Agency Owner",
            Role::AgencyMember => "Agency Member",
            Role::Freelancer => "Freelancer",
            Role::Client => "Client",
        }
    }
}

/// Team member or client contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub title: String,
    /// Set for client contacts only
    #[serde(default)]
    pub client_id: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
}

impl ClientStatus {
    pub const ALL: [ClientStatus; 2] = [ClientStatus::Active, ClientStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Active => "active",
            ClientStatus::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Inactive => "Inactive",
        }
    }
}

/// Agency client (company)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub contact_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub status: ClientStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    NotStarted,
    InProgress,
    OnHold,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::NotStarted,
        ProjectStatus::InProgress,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "not-started",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::OnHold => "on-hold",
            ProjectStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "Not Started",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
        }
    }
}

impl Lifecycle for ProjectStatus {
    fn is_terminal(&self) -> bool {
        matches!(self, ProjectStatus::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub client_id: u32,
    pub status: ProjectStatus,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub assigned_to_id: Option<u32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub budget: f64,
    /// Percent complete, 0..=100
    #[serde(default)]
    pub progress: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Review => "review",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Review => "In Review",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl Lifecycle for TaskStatus {
    fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

/// Ordered from least to most pressing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }

    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub project_id: u32,
    pub title: String,
    pub status: TaskStatus,
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub assignee_id: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
    Canceled,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 5] = [
        InvoiceStatus::Draft,
        InvoiceStatus::Sent,
        InvoiceStatus::Paid,
        InvoiceStatus::Overdue,
        InvoiceStatus::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Canceled => "canceled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "Draft",
            InvoiceStatus::Sent => "Sent",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
            InvoiceStatus::Canceled => "Canceled",
        }
    }

    /// Still owed by the client
    pub fn is_outstanding(&self) -> bool {
        matches!(self, InvoiceStatus::Sent | InvoiceStatus::Overdue)
    }
}

impl Lifecycle for InvoiceStatus {
    fn is_terminal(&self) -> bool {
        matches!(self, InvoiceStatus::Paid | InvoiceStatus::Canceled)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    pub rate: f64,
}

impl LineItem {
    pub fn amount(&self) -> f64 {
        self.quantity * self.rate
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: u32,
    pub number: String,
    pub client_id: u32,
    pub project_id: u32,
    pub status: InvoiceStatus,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub total: f64,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl Invoice {
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::amount).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    Pdf,
    Doc,
    Spreadsheet,
    Image,
    Archive,
    Design,
    Other,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 7] = [
        DocumentKind::Pdf,
        DocumentKind::Doc,
        DocumentKind::Spreadsheet,
        DocumentKind::Image,
        DocumentKind::Archive,
        DocumentKind::Design,
        DocumentKind::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Doc => "doc",
            DocumentKind::Spreadsheet => "spreadsheet",
            DocumentKind::Image => "image",
            DocumentKind::Archive => "archive",
            DocumentKind::Design => "design",
            DocumentKind::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Doc => "Document",
            DocumentKind::Spreadsheet => "Spreadsheet",
            DocumentKind::Image => "Image",
            DocumentKind::Archive => "Archive",
            DocumentKind::Design => "Design",
            DocumentKind::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "📕",
            DocumentKind::Doc => "📄",
            DocumentKind::Spreadsheet => "📊",
            DocumentKind::Image => "🖼️",
            DocumentKind::Archive => "🗜️",
            DocumentKind::Design => "🎨",
            DocumentKind::Other => "📁",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: u32,
    pub name: String,
    pub project_id: u32,
    pub kind: DocumentKind,
    pub uploaded_by: u32,
    pub upload_date: NaiveDate,
    #[serde(default)]
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: u32,
    pub subject: String,
    pub participants: Vec<u32>,
    #[serde(default)]
    pub project_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    #[serde(default)]
    pub size_bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u32,
    pub conversation_id: u32,
    pub sender_id: u32,
    pub content: String,
    pub timestamp: NaiveDateTime,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_slug_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_slug(role.slug()), Some(role));
        }
        assert_eq!(Role::from_slug("admin"), None);
    }

    #[test]
    fn test_status_deserializes_kebab_case() {
        let status: ProjectStatus = serde_json::from_str("\"on-hold\"").unwrap();
        assert_eq!(status, ProjectStatus::OnHold);
        let status: InvoiceStatus = serde_json::from_str("\"canceled\"").unwrap();
        assert!(status.is_terminal());
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Urgent > Priority::High);
        assert!(Priority::Low.rank() < Priority::Medium.rank());
    }

    #[test]
    fn test_invoice_subtotal() {
        let invoice = Invoice {
            id: 1,
            number: "INV-001".to_string(),
            client_id: 1,
            project_id: 1,
            status: InvoiceStatus::Sent,
            issue_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
            total: 1500.0,
            items: vec![
                LineItem { description: "Design".to_string(), quantity: 10.0, rate: 100.0 },
                LineItem { description: "Review".to_string(), quantity: 5.0, rate: 100.0 },
            ],
        };
        assert_eq!(invoice.subtotal(), 1500.0);
    }
}
