//! Routes
//!
//! Role-prefixed paths such as `/client/invoices` or `/agency-owner/projects/3`.
//! The first segment selects the role, the rest selects a page from that
//! role's menu. Anything else is `Route::NotFound`.

use crate::error::{AppError, AppResult};
use crate::models::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Clients,
    Projects,
    ProjectDetail(u32),
    Tasks,
    Invoices,
    InvoiceDetail(u32),
    Documents,
    Messages,
    Thread(u32),
    Team,
}

impl Page {
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Clients => "clients",
            Page::Projects | Page::ProjectDetail(_) => "projects",
            Page::Tasks => "tasks",
            Page::Invoices | Page::InvoiceDetail(_) => "invoices",
            Page::Documents => "documents",
            Page::Messages | Page::Thread(_) => "messages",
            Page::Team => "team",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Clients => "Clients",
            Page::Projects => "Projects",
            Page::ProjectDetail(_) => "Project",
            Page::Tasks => "Tasks",
            Page::Invoices => "Invoices",
            Page::InvoiceDetail(_) => "Invoice",
            Page::Documents => "Documents",
            Page::Messages => "Messages",
            Page::Thread(_) => "Conversation",
            Page::Team => "Team",
        }
    }

    /// Menu entry a page belongs to; detail pages highlight their listing
    pub fn section(&self) -> Page {
        match self {
            Page::ProjectDetail(_) => Page::Projects,
            Page::InvoiceDetail(_) => Page::Invoices,
            Page::Thread(_) => Page::Messages,
            other => *other,
        }
    }

    fn from_segments(page: &str, id: Option<&str>) -> Option<Page> {
        let id = match id {
            Some(raw) => Some(raw.parse::<u32>().ok()?),
            None => None,
        };
        let page = match (page, id) {
            ("dashboard", None) => Page::Dashboard,
            ("clients", None) => Page::Clients,
            ("projects", None) => Page::Projects,
            ("projects", Some(id)) => Page::ProjectDetail(id),
            ("tasks", None) => Page::Tasks,
            ("invoices", None) => Page::Invoices,
            ("invoices", Some(id)) => Page::InvoiceDetail(id),
            ("documents", None) => Page::Documents,
            ("messages", None) => Page::Messages,
            ("messages", Some(id)) => Page::Thread(id),
            ("team", None) => Page::Team,
            _ => return None,
        };
        Some(page)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub page: Page,
    pub label: &'static str,
    pub icon: &'static str,
}

const fn nav(page: Page, label: &'static str, icon: &'static str) -> NavItem {
    NavItem { page, label, icon }
}

const DASHBOARD: NavItem = nav(Page::Dashboard, "Dashboard", "▦");
const CLIENTS: NavItem = nav(Page::Clients, "Clients", "◉");
const PROJECTS: NavItem = nav(Page::Projects, "Projects", "▤");
const TASKS: NavItem = nav(Page::Tasks, "Tasks", "☑");
const INVOICES: NavItem = nav(Page::Invoices, "Invoices", "＄");
const DOCUMENTS: NavItem = nav(Page::Documents, "Documents", "▢");
const MESSAGES: NavItem = nav(Page::Messages, "Messages", "✉");
const TEAM: NavItem = nav(Page::Team, "Team", "☺");

const OWNER_NAV: &[NavItem] = &[DASHBOARD, CLIENTS, PROJECTS, TASKS, INVOICES, DOCUMENTS, MESSAGES, TEAM];
const MEMBER_NAV: &[NavItem] = &[DASHBOARD, PROJECTS, TASKS, DOCUMENTS, MESSAGES];
const FREELANCER_NAV: &[NavItem] = &[DASHBOARD, CLIENTS, PROJECTS, TASKS, INVOICES, DOCUMENTS, MESSAGES];
const CLIENT_NAV: &[NavItem] = &[DASHBOARD, PROJECTS, INVOICES, DOCUMENTS, MESSAGES];

impl Role {
    pub fn nav_items(&self) -> &'static [NavItem] {
        match self {
            Role::AgencyOwner => OWNER_NAV,
            Role::AgencyMember => MEMBER_NAV,
            Role::Freelancer => FREELANCER_NAV,
            Role::Client => CLIENT_NAV,
        }
    }

    /// Whether the page (or the listing a detail page belongs to) is in the menu
    pub fn can_open(&self, page: Page) -> bool {
        let section = page.section();
        self.nav_items().iter().any(|item| item.page == section)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Dashboard { role: Role, page: Page },
    NotFound(String),
}

impl Route {
    pub fn dashboard(role: Role) -> Self {
        Route::Dashboard { role, page: Page::Dashboard }
    }

    /// Strict parse; unknown roles, pages outside the role's menu and malformed
    /// ids are errors
    pub fn try_parse(path: &str) -> AppResult<Route> {
        let unknown = || AppError::UnknownRoute(path.to_string());
        let trimmed = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        let (role, rest) = match segments.split_first() {
            None => return Ok(Route::Landing),
            Some((first, rest)) => (Role::from_slug(first).ok_or_else(unknown)?, rest),
        };

        let page = match rest {
            [] => Page::Dashboard,
            [page] => Page::from_segments(page, None).ok_or_else(unknown)?,
            [page, id] => Page::from_segments(page, Some(id)).ok_or_else(unknown)?,
            _ => return Err(unknown()),
        };

        if !role.can_open(page) {
            return Err(unknown());
        }
        Ok(Route::Dashboard { role, page })
    }

    pub fn parse(path: &str) -> Route {
        Self::try_parse(path).unwrap_or_else(|err| {
            log::warn!("{err}");
            Route::NotFound(path.to_string())
        })
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::NotFound(path) => path.clone(),
            Route::Dashboard { role, page } => match page {
                Page::ProjectDetail(id) | Page::InvoiceDetail(id) | Page::Thread(id) => {
                    format!("/{}/{}/{}", role.slug(), page.slug(), id)
                }
                _ => format!("/{}/{}", role.slug(), page.slug()),
            },
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Route::Dashboard { role, .. } => Some(*role),
            _ => None,
        }
    }

    pub fn page(&self) -> Option<Page> {
        match self {
            Route::Dashboard { page, .. } => Some(*page),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_is_landing() {
        assert_eq!(Route::parse("/"), Route::Landing);
        assert_eq!(Route::parse(""), Route::Landing);
    }

    #[test]
    fn test_role_prefix_alone_opens_dashboard() {
        assert_eq!(Route::parse("/client"), Route::dashboard(Role::Client));
        assert_eq!(Route::parse("/agency-owner/dashboard"), Route::dashboard(Role::AgencyOwner));
    }

    #[test]
    fn test_every_nav_entry_round_trips() {
        for role in Role::ALL {
            for item in role.nav_items() {
                let route = Route::Dashboard { role, page: item.page };
                assert_eq!(Route::parse(&route.path()), route, "{}", route.path());
            }
        }
    }

    #[test]
    fn test_detail_routes_round_trip() {
        for page in [Page::ProjectDetail(3), Page::InvoiceDetail(8), Page::Thread(1)] {
            let route = Route::Dashboard { role: Role::AgencyOwner, page };
            assert_eq!(Route::parse(&route.path()), route);
        }
        assert_eq!(
            Route::dashboard(Role::Client).path(),
            "/client/dashboard"
        );
        assert_eq!(
            Route::Dashboard { role: Role::Freelancer, page: Page::Thread(3) }.path(),
            "/freelancer/messages/3"
        );
    }

    #[test]
    fn test_pages_outside_menu_are_not_found() {
        assert!(matches!(Route::parse("/client/team"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/agency-member/invoices"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/agency-member/invoices/2"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/client/clients"), Route::NotFound(_)));
    }

    #[test]
    fn test_malformed_paths_are_not_found() {
        assert_eq!(Route::parse("/nobody/projects"), Route::NotFound("/nobody/projects".to_string()));
        assert!(matches!(Route::parse("/client/projects/abc"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/client/tasks/1"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/client/projects/1/extra"), Route::NotFound(_)));
        assert!(matches!(
            Route::try_parse("/client/wat"),
            Err(AppError::UnknownRoute(path)) if path == "/client/wat"
        ));
    }

    #[test]
    fn test_query_string_is_ignored() {
        assert_eq!(
            Route::parse("/client/invoices?status=paid"),
            Route::Dashboard { role: Role::Client, page: Page::Invoices }
        );
    }

    #[test]
    fn test_menus_per_role() {
        assert_eq!(Role::AgencyOwner.nav_items().len(), 8);
        assert!(Role::AgencyMember.nav_items().iter().all(|i| i.page != Page::Invoices));
        assert!(Role::Client.nav_items().iter().all(|i| i.page != Page::Tasks));
        assert!(Role::ALL.iter().all(|r| r.nav_items()[0].page == Page::Dashboard));
    }
}
