//! Screens
//!
//! One component per route. Listing screens keep their query in local
//! signals and derive rows through a `Memo`.

mod clients;
mod dashboard;
mod documents;
mod invoice_detail;
mod invoices;
mod landing;
mod messages;
mod not_found;
mod project_detail;
mod projects;
mod tasks;
mod team;
mod thread;

pub use clients::ClientsPage;
pub use dashboard::DashboardPage;
pub use documents::DocumentsPage;
pub use invoice_detail::InvoiceDetailPage;
pub use invoices::InvoicesPage;
pub use landing::LandingPage;
pub use messages::MessagesPage;
pub use not_found::NotFoundPage;
pub use project_detail::ProjectDetailPage;
pub use projects::ProjectsPage;
pub use tasks::TasksPage;
pub use team::TeamPage;
pub use thread::ThreadPage;

use crate::mock_data::MockData;
use crate::pipeline::locale_cmp;
use crate::session::Session;

/// Project filter options in the session's scope, by name
fn project_options(data: &MockData, session: &Session) -> Vec<(String, String)> {
    let visible = data.visible_project_ids(session);
    let mut options: Vec<(String, String)> = data
        .projects
        .iter()
        .filter(|p| visible.contains(&p.id))
        .map(|p| (p.id.to_string(), p.name.clone()))
        .collect();
    options.sort_by(|a, b| locale_cmp(&a.1, &b.1));
    options
}

/// Client filter options in the session's scope, by name
fn client_options(data: &MockData, session: &Session) -> Vec<(String, String)> {
    let visible = data.visible_client_ids(session);
    let mut options: Vec<(String, String)> = data
        .clients
        .iter()
        .filter(|c| visible.contains(&c.id))
        .map(|c| (c.id.to_string(), c.name.clone()))
        .collect();
    options.sort_by(|a, b| locale_cmp(&a.1, &b.1));
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::fixtures::*;

    #[test]
    fn test_project_options_are_scoped_and_sorted() {
        let data = data();
        let options = project_options(&data, &client());
        let names: Vec<_> = options.iter().map(|o| o.1.as_str()).collect();
        assert_eq!(names, vec!["Product Catalog Illustrations", "Website Redesign"]);
    }

    #[test]
    fn test_client_options_for_freelancer() {
        let data = data();
        let options = client_options(&data, &freelancer());
        assert_eq!(options, vec![("1".to_string(), "Acme Corp".to_string())]);
    }
}
