//! Invoices Listing

use chrono::NaiveDate;

use super::Calendar;
use crate::mock_data::MockData;
use crate::models::{Invoice, InvoiceStatus, LineItem, Role};
use crate::pipeline::{days_until, is_overdue, sort_rows, Direction, Filter, SortValue};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvoiceSort {
    #[default]
    IssueDate,
    DueDate,
    Amount,
    Number,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceQuery {
    pub search: String,
    pub status: Option<InvoiceStatus>,
    pub client_id: Option<u32>,
    pub project_id: Option<u32>,
    pub sort: InvoiceSort,
    pub direction: Direction,
}

impl Default for InvoiceQuery {
    /// Newest first
    fn default() -> Self {
        Self {
            search: String::new(),
            status: None,
            client_id: None,
            project_id: None,
            sort: InvoiceSort::IssueDate,
            direction: Direction::Descending,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceRow {
    pub id: u32,
    pub number: String,
    pub client_name: String,
    pub project_id: u32,
    pub project_name: String,
    pub status: InvoiceStatus,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub total: f64,
    pub days_until_due: i64,
    /// Marked overdue, or past due and still open
    pub overdue: bool,
}

impl InvoiceRow {
    pub fn new(data: &MockData, invoice: &Invoice, calendar: &Calendar) -> Self {
        let overdue = invoice.status == InvoiceStatus::Overdue
            || is_overdue(Some(invoice.due_date), &invoice.status, calendar.today);
        Self {
            id: invoice.id,
            number: invoice.number.clone(),
            client_name: data.client_name(invoice.client_id).to_string(),
            project_id: invoice.project_id,
            project_name: data.project_name(invoice.project_id).to_string(),
            status: invoice.status,
            issue_date: invoice.issue_date,
            due_date: invoice.due_date,
            total: invoice.total,
            days_until_due: days_until(invoice.due_date, calendar.today),
            overdue,
        }
    }
}

/// Totals over a set of rows
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InvoiceSummary {
    pub count: usize,
    pub billed: f64,
    pub paid: f64,
    pub outstanding: f64,
    pub overdue_count: usize,
}

impl InvoiceSummary {
    pub fn of(rows: &[InvoiceRow]) -> Self {
        rows.iter().fold(Self::default(), |mut s, row| {
            s.count += 1;
            if row.status != InvoiceStatus::Canceled {
                s.billed += row.total;
            }
            if row.status == InvoiceStatus::Paid {
                s.paid += row.total;
            }
            if row.status.is_outstanding() {
                s.outstanding += row.total;
            }
            if row.overdue {
                s.overdue_count += 1;
            }
            s
        })
    }
}

/// Invoice in the session's scope. Clients see their own invoices only.
pub fn is_visible(data: &MockData, session: &Session, invoice: &Invoice) -> bool {
    match session.role {
        Role::AgencyOwner => true,
        Role::AgencyMember => false,
        Role::Client => Some(invoice.client_id) == session.client_id,
        Role::Freelancer => data.can_see_project(session, invoice.project_id),
    }
}

pub fn derive_invoices(
    data: &MockData,
    session: &Session,
    query: &InvoiceQuery,
    calendar: &Calendar,
) -> Vec<InvoiceRow> {
    let mut rows = Filter::new()
        .when(|i: &Invoice| is_visible(data, session, i))
        .eq(query.status, |i| i.status)
        .eq(query.client_id, |i| i.client_id)
        .eq(query.project_id, |i| i.project_id)
        .text(&query.search, |i, needle| {
            needle.any([
                i.number.as_str(),
                data.client_name(i.client_id),
                data.project_name(i.project_id),
            ])
        })
        .apply(&data.invoices);

    sort_rows(&mut rows, query.direction, |i| match query.sort {
        InvoiceSort::IssueDate => SortValue::Date(Some(i.issue_date)),
        InvoiceSort::DueDate => SortValue::Date(Some(i.due_date)),
        InvoiceSort::Amount => SortValue::Number(i.total),
        InvoiceSort::Number => SortValue::Text(&i.number),
    });

    rows.into_iter().map(|i| InvoiceRow::new(data, i, calendar)).collect()
}

/// Invoice with its line items, for the detail view
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDetail {
    pub row: InvoiceRow,
    pub client_email: Option<String>,
    pub items: Vec<LineItem>,
    pub subtotal: f64,
}

pub fn invoice_detail(
    data: &MockData,
    session: &Session,
    invoice_id: u32,
    calendar: &Calendar,
) -> Option<InvoiceDetail> {
    let invoice = data.invoice(invoice_id).filter(|i| is_visible(data, session, i))?;
    Some(InvoiceDetail {
        row: InvoiceRow::new(data, invoice, calendar),
        client_email: data.client(invoice.client_id).map(|c| c.email.clone()),
        items: invoice.items.clone(),
        subtotal: invoice.subtotal(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::fixtures::*;

    fn invoice(id: u32, status: InvoiceStatus, total: f64) -> Invoice {
        Invoice {
            id,
            number: format!("INV-{id:03}"),
            client_id: 1,
            project_id: 1,
            status,
            issue_date: NaiveDate::from_ymd_opt(2026, 3, id).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2026, 4, id).unwrap(),
            total,
            items: Vec::new(),
        }
    }

    #[test]
    fn test_status_filter_example() {
        let mut data = data();
        data.invoices = vec![
            invoice(1, InvoiceStatus::Paid, 100.0),
            invoice(2, InvoiceStatus::Overdue, 50.0),
            invoice(3, InvoiceStatus::Sent, 75.0),
        ];
        let query = InvoiceQuery { status: Some(InvoiceStatus::Overdue), ..Default::default() };
        let rows = derive_invoices(&data, &owner(), &query, &calendar());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, InvoiceStatus::Overdue);
        assert_eq!(rows[0].total, 50.0);
    }

    #[test]
    fn test_default_is_newest_first() {
        let data = data();
        let rows = derive_invoices(&data, &owner(), &InvoiceQuery::default(), &calendar());
        assert_eq!(rows.len(), data.invoices.len());
        assert!(rows.windows(2).all(|w| w[0].issue_date >= w[1].issue_date));
    }

    #[test]
    fn test_past_due_sent_invoice_is_overdue() {
        let data = data();
        let rows = derive_invoices(&data, &owner(), &InvoiceQuery::default(), &calendar());
        let catalog = rows.iter().find(|r| r.number == "INV-2026-006").unwrap();
        assert_eq!(catalog.status, InvoiceStatus::Sent);
        assert_eq!(catalog.days_until_due, -10);
        assert!(catalog.overdue);
        let paid = rows.iter().find(|r| r.number == "INV-2026-001").unwrap();
        assert!(!paid.overdue);
    }

    #[test]
    fn test_client_sees_own_invoices_sorted_by_amount() {
        let data = data();
        let query = InvoiceQuery {
            sort: InvoiceSort::Amount,
            direction: Direction::Ascending,
            ..Default::default()
        };
        let rows = derive_invoices(&data, &client(), &query, &calendar());
        let totals: Vec<f64> = rows.iter().map(|r| r.total).collect();
        assert_eq!(totals, vec![3400.0, 7200.0, 8000.0]);
    }

    #[test]
    fn test_members_have_no_invoices() {
        let data = data();
        assert!(derive_invoices(&data, &member(), &InvoiceQuery::default(), &calendar()).is_empty());
    }

    #[test]
    fn test_search_by_client_name() {
        let data = data();
        let query = InvoiceQuery { search: "bloom".to_string(), ..Default::default() };
        let rows = derive_invoices(&data, &owner(), &query, &calendar());
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.client_name == "Bloom Botanics"));
    }

    #[test]
    fn test_summary() {
        let data = data();
        let rows = derive_invoices(&data, &client(), &InvoiceQuery::default(), &calendar());
        let summary = InvoiceSummary::of(&rows);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.billed, 18600.0);
        assert_eq!(summary.paid, 8000.0);
        assert_eq!(summary.outstanding, 10600.0);
        assert_eq!(summary.overdue_count, 1);
    }

    #[test]
    fn test_detail_respects_scope() {
        let data = data();
        let detail = invoice_detail(&data, &client(), 1, &calendar()).unwrap();
        assert_eq!(detail.subtotal, 8000.0);
        assert_eq!(detail.items.len(), 2);
        assert!(invoice_detail(&data, &client(), 2, &calendar()).is_none());
    }
}
