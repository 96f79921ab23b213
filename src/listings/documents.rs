//! Documents Listing
//!
//! Documents are shown grouped under their project, with the project groups in
//! alphabetical order.

use chrono::NaiveDate;

use crate::mock_data::MockData;
use crate::models::{Document, DocumentKind};
use crate::pipeline::{group_by_label, sort_rows, Direction, Filter, SortValue};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentSort {
    Name,
    #[default]
    UploadDate,
    Size,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentQuery {
    pub search: String,
    pub kind: Option<DocumentKind>,
    pub project_id: Option<u32>,
    pub sort: DocumentSort,
    pub direction: Direction,
}

impl Default for DocumentQuery {
    /// Most recent upload first
    fn default() -> Self {
        Self {
            search: String::new(),
            kind: None,
            project_id: None,
            sort: DocumentSort::UploadDate,
            direction: Direction::Descending,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRow {
    pub id: u32,
    pub name: String,
    pub kind: DocumentKind,
    pub project_id: u32,
    pub uploader_name: String,
    pub upload_date: NaiveDate,
    pub size_bytes: u64,
}

impl DocumentRow {
    fn new(data: &MockData, doc: &Document) -> Self {
        Self {
            id: doc.id,
            name: doc.name.clone(),
            kind: doc.kind,
            project_id: doc.project_id,
            uploader_name: data.user_name(doc.uploaded_by).to_string(),
            upload_date: doc.upload_date,
            size_bytes: doc.size_bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentGroup {
    pub project_id: u32,
    pub project_name: String,
    /// False when the project no longer resolves; there is no page to link to
    pub has_project_page: bool,
    pub documents: Vec<DocumentRow>,
}

fn filtered_sorted<'d>(data: &'d MockData, session: &Session, query: &DocumentQuery) -> Vec<&'d Document> {
    let mut rows = Filter::new()
        .when(|d: &Document| data.can_see_project(session, d.project_id))
        .eq(query.kind, |d| d.kind)
        .eq(query.project_id, |d| d.project_id)
        .text(&query.search, |d, needle| {
            needle.any([d.name.as_str(), data.user_name(d.uploaded_by)])
        })
        .apply(&data.documents);

    sort_rows(&mut rows, query.direction, |d| match query.sort {
        DocumentSort::Name => SortValue::Text(&d.name),
        DocumentSort::UploadDate => SortValue::Date(Some(d.upload_date)),
        DocumentSort::Size => SortValue::Number(d.size_bytes as f64),
    });
    rows
}

/// Flat list, e.g. for a project's detail page
pub fn derive_documents(data: &MockData, session: &Session, query: &DocumentQuery) -> Vec<DocumentRow> {
    filtered_sorted(data, session, query)
        .into_iter()
        .map(|d| DocumentRow::new(data, d))
        .collect()
}

/// Rows grouped by project, groups alphabetized by project name
pub fn derive_document_groups(
    data: &MockData,
    session: &Session,
    query: &DocumentQuery,
) -> Vec<DocumentGroup> {
    let rows = filtered_sorted(data, session, query);
    group_by_label(&rows, |d| d.project_id, |id| data.project_name(*id).to_string())
        .into_iter()
        .map(|group| DocumentGroup {
            project_id: group.key,
            project_name: group.label,
            has_project_page: data.project(group.key).is_some(),
            documents: group.rows.into_iter().map(|d| DocumentRow::new(data, d)).collect(),
        })
        .collect()
}
