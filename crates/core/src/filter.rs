//! Search and category filtering over a collection.
//!
//! A record passes a [`ListFilter`] when both hold:
//!
//! - the search term is empty, or occurs case-insensitively as a substring of
//!   at least one of the record's [`Searchable::search_fields`];
//! - the filter is absent or `"all"`, or equals one of the record's
//!   [`Searchable::filter_keys`] (category, type or status).

use serde::Deserialize;

/// Filter value that disables category/status filtering.
pub const FILTER_ALL: &str = "all";

/// Exposes the text a record can be searched and filtered on.
pub trait Searchable {
    /// Free-text fields matched against the search term.
    fn search_fields(&self) -> Vec<&str>;

    /// Category/type/status keys matched exactly against the filter value.
    fn filter_keys(&self) -> Vec<&str> {
        Vec::new()
    }
}

/// Query parameters for list endpoints (`?search=&filter=`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListFilter {
    pub search: Option<String>,
    pub filter: Option<String>,
}

impl ListFilter {
    pub fn new(search: impl Into<String>, filter: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            filter: Some(filter.into()),
        }
    }

    pub fn matches<T: Searchable>(&self, record: &T) -> bool {
        self.matches_search(record) && self.matches_filter(record)
    }

    /// Keep the matching records, preserving input order.
    pub fn apply<'a, T, I>(&self, records: I) -> Vec<&'a T>
    where
        T: Searchable + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        records.into_iter().filter(|r| self.matches(*r)).collect()
    }

    fn matches_search<T: Searchable>(&self, record: &T) -> bool {
        let term = match self.search.as_deref() {
            None | Some("") => return true,
            Some(term) => term.to_lowercase(),
        };
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }

    fn matches_filter<T: Searchable>(&self, record: &T) -> bool {
        match self.filter.as_deref() {
            None | Some("") | Some(FILTER_ALL) => true,
            Some(wanted) => record.filter_keys().iter().any(|key| *key == wanted),
        }
    }
}
