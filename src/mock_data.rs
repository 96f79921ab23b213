//! Mock Data Store
//!
//! Static collections standing in for a persistence backend. Fixtures are
//! embedded at compile time and decoded once per page load.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};
use crate::models::{Client, Conversation, Document, Invoice, Message, Project, Role, Task, User};
use crate::session::Session;

pub const UNKNOWN_CLIENT: &str = "Unknown Client";
pub const UNKNOWN_PROJECT: &str = "Unknown Project";
pub const UNKNOWN_USER: &str = "Unknown User";

const USERS_JSON: &str = include_str!("../assets/mock/users.json");
const CLIENTS_JSON: &str = include_str!("../assets/mock/clients.json");
const PROJECTS_JSON: &str = include_str!("../assets/mock/projects.json");
const TASKS_JSON: &str = include_str!("../assets/mock/tasks.json");
const INVOICES_JSON: &str = include_str!("../assets/mock/invoices.json");
const DOCUMENTS_JSON: &str = include_str!("../assets/mock/documents.json");
const CONVERSATIONS_JSON: &str = include_str!("../assets/mock/conversations.json");
const MESSAGES_JSON: &str = include_str!("../assets/mock/messages.json");

static EMBEDDED: OnceLock<MockData> = OnceLock::new();

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockData {
    pub users: Vec<User>,
    pub clients: Vec<Client>,
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub invoices: Vec<Invoice>,
    pub documents: Vec<Document>,
    pub conversations: Vec<Conversation>,
    pub messages: Vec<Message>,
}

fn decode<T: DeserializeOwned>(collection: &'static str, json: &str) -> AppResult<Vec<T>> {
    serde_json::from_str(json).map_err(|source| AppError::MockData { collection, source })
}

impl MockData {
    pub fn from_fixtures() -> AppResult<Self> {
        let data = Self {
            users: decode("users", USERS_JSON)?,
            clients: decode("clients", CLIENTS_JSON)?,
            projects: decode("projects", PROJECTS_JSON)?,
            tasks: decode("tasks", TASKS_JSON)?,
            invoices: decode("invoices", INVOICES_JSON)?,
            documents: decode("documents", DOCUMENTS_JSON)?,
            conversations: decode("conversations", CONVERSATIONS_JSON)?,
            messages: decode("messages", MESSAGES_JSON)?,
        };
        log::debug!(
            "loaded {} projects, {} tasks, {} invoices, {} documents, {} messages",
            data.projects.len(),
            data.tasks.len(),
            data.invoices.len(),
            data.documents.len(),
            data.messages.len()
        );
        Ok(data)
    }

    /// Shared fixture set. A decode failure is logged and yields an empty store.
    pub fn embedded() -> &'static MockData {
        EMBEDDED.get_or_init(|| {
            Self::from_fixtures().unwrap_or_else(|e| {
                log::error!("{e}");
                MockData::default()
            })
        })
    }

    // ========================
    // Lookups
    // ========================

    pub fn user(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn client(&self, id: u32) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn invoice(&self, id: u32) -> Option<&Invoice> {
        self.invoices.iter().find(|i| i.id == id)
    }

    pub fn user_name(&self, id: u32) -> &str {
        self.user(id).map(|u| u.name.as_str()).unwrap_or(UNKNOWN_USER)
    }

    pub fn client_name(&self, id: u32) -> &str {
        self.client(id).map(|c| c.name.as_str()).unwrap_or(UNKNOWN_CLIENT)
    }

    pub fn project_name(&self, id: u32) -> &str {
        self.project(id).map(|p| p.name.as_str()).unwrap_or(UNKNOWN_PROJECT)
    }

    // ========================
    // Role Scoping
    // ========================

    /// Ids of projects the session may see
    pub fn visible_project_ids(&self, session: &Session) -> HashSet<u32> {
        let user = session.user_id;
        match session.role {
            Role::AgencyOwner => self.projects.iter().map(|p| p.id).collect(),
            Role::AgencyMember => {
                let mut ids: HashSet<u32> = self
                    .projects
                    .iter()
                    .filter(|p| p.assigned_to_id == Some(user))
                    .map(|p| p.id)
                    .collect();
                ids.extend(
                    self.tasks
                        .iter()
                        .filter(|t| t.assignee_id == Some(user))
                        .map(|t| t.project_id),
                );
                ids
            }
            Role::Freelancer => self
                .projects
                .iter()
                .filter(|p| p.assigned_to_id == Some(user))
                .map(|p| p.id)
                .collect(),
            Role::Client => self
                .projects
                .iter()
                .filter(|p| Some(p.client_id) == session.client_id)
                .map(|p| p.id)
                .collect(),
        }
    }

    /// Whether a record tied to `project_id` is in scope. The agency owner
    /// also sees records whose project no longer resolves.
    pub fn can_see_project(&self, session: &Session, project_id: u32) -> bool {
        self.project_scope(session)(project_id)
    }

    /// `can_see_project` with the visible set computed once, for list filters
    pub fn project_scope(&self, session: &Session) -> impl Fn(u32) -> bool {
        let everything = session.role == Role::AgencyOwner;
        let visible = self.visible_project_ids(session);
        move |project_id| everything || visible.contains(&project_id)
    }

    pub fn visible_client_ids(&self, session: &Session) -> HashSet<u32> {
        match session.role {
            Role::AgencyOwner => self.clients.iter().map(|c| c.id).collect(),
            _ => {
                let projects = self.visible_project_ids(session);
                self.projects
                    .iter()
                    .filter(|p| projects.contains(&p.id))
                    .map(|p| p.client_id)
                    .collect()
            }
        }
    }

    pub fn can_see_conversation(&self, session: &Session, conversation: &Conversation) -> bool {
        session.role == Role::AgencyOwner || conversation.participants.contains(&session.user_id)
    }
}
