//! Filter Stage
//!
//! A `Filter` is a conjunction of predicates built from the UI criteria.
//! Criteria that are unset (no status picked, blank search box) add no
//! predicate, so an unconfigured filter is the identity.

/// Lowercased search text for case-insensitive substring matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle(String);

impl Needle {
    /// `None` when the query is blank
    pub fn new(query: &str) -> Option<Self> {
        let query = query.trim();
        if query.is_empty() {
            None
        } else {
            Some(Self(query.to_lowercase()))
        }
    }

    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }

    /// True when any of the fields contains the needle
    pub fn any<'s>(&self, fields: impl IntoIterator<Item = &'s str>) -> bool {
        fields.into_iter().any(|field| self.matches(field))
    }
}

type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

pub struct Filter<'a, T> {
    predicates: Vec<Predicate<'a, T>>,
}

impl<'a, T> Default for Filter<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> Filter<'a, T> {
    pub fn new() -> Self {
        Self { predicates: Vec::new() }
    }

    /// Add an arbitrary predicate
    pub fn when(mut self, predicate: impl Fn(&T) -> bool + 'a) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Keep rows whose field equals `wanted`. `None` keeps everything.
    pub fn eq<V>(self, wanted: Option<V>, field: impl Fn(&T) -> V + 'a) -> Self
    where
        V: PartialEq + 'a,
    {
        match wanted {
            Some(wanted) => self.when(move |row| field(row) == wanted),
            None => self,
        }
    }

    /// Keep rows where `fields` reports a match for the search text.
    /// A blank query keeps everything.
    pub fn text(self, query: &str, fields: impl Fn(&T, &Needle) -> bool + 'a) -> Self {
        match Needle::new(query) {
            Some(needle) => self.when(move |row| fields(row, &needle)),
            None => self,
        }
    }

    pub fn matches(&self, row: &T) -> bool {
        self.predicates.iter().all(|predicate| predicate(row))
    }

    /// Matching rows in their original order
    pub fn apply<'s>(&self, rows: &'s [T]) -> Vec<&'s T> {
        let kept: Vec<&T> = rows.iter().filter(|row| self.matches(row)).collect();
        log::trace!("filter kept {}/{} rows", kept.len(), rows.len());
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        status: &'static str,
        total: u32,
        name: String,
    }

    fn row(status: &'static str, total: u32) -> Row {
        Row { status, total, name: format!("{status}-{total}") }
    }

    #[test]
    fn test_status_filter_selects_exact_match() {
        let rows = vec![row("paid", 100), row("overdue", 50), row("sent", 75)];
        let kept = Filter::new().eq(Some("overdue"), |r: &Row| r.status).apply(&rows);
        assert_eq!(kept, vec![&row("overdue", 50)]);
    }

    #[test]
    fn test_text_search_is_case_insensitive() {
        let docs = vec!["Website Wireframes.pdf", "Brand Guide.pdf", "Logo.png"];
        let kept = Filter::new()
            .text("wire", |d: &&str, n| n.matches(d))
            .apply(&docs);
        assert_eq!(kept, vec![&"Website Wireframes.pdf"]);
    }

    #[test]
    fn test_blank_query_and_unset_criteria_keep_everything() {
        let rows = vec![row("paid", 100), row("sent", 20)];
        let kept = Filter::new()
            .text("   ", |_: &Row, _| false)
            .eq(None::<&str>, |r| r.status)
            .apply(&rows);
        assert_eq!(kept, vec![&rows[0], &rows[1]]);
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let rows = vec![row("paid", 100), row("paid", 20), row("sent", 100)];
        let kept = Filter::new()
            .eq(Some("paid"), |r: &Row| r.status)
            .when(|r| r.total >= 100)
            .apply(&rows);
        assert_eq!(kept, vec![&row("paid", 100)]);
    }

    #[test]
    fn test_needle_any_field() {
        let needle = Needle::new("ACME").unwrap();
        assert!(needle.any(["INV-001", "Acme Corp"]));
        assert!(!needle.any(["INV-001", "Globex"]));
    }

    fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
        prop::collection::vec(
            (prop::sample::select(vec!["draft", "sent", "paid", "overdue"]), 0u32..500)
                .prop_map(|(status, total)| row(status, total)),
            0..40,
        )
    }

    proptest! {
        #[test]
        fn prop_filter_is_ordered_subset(
            rows in arb_rows(),
            status in prop::option::of(prop::sample::select(vec!["draft", "sent", "paid", "overdue"])),
            query in "[a-z0-9]{0,3}",
        ) {
            let kept = Filter::new()
                .eq(status, |r: &Row| r.status)
                .text(&query, |r, n| n.matches(&r.name))
                .apply(&rows);

            // every kept row is present in the source, in source order
            let mut source = rows.iter();
            for k in &kept {
                prop_assert!(source.any(|r| std::ptr::eq(r, *k)));
            }
        }

        #[test]
        fn prop_empty_filter_is_identity(rows in arb_rows()) {
            let kept = Filter::<Row>::new().apply(&rows);
            prop_assert_eq!(kept, rows.iter().collect::<Vec<_>>());
        }
    }
}
