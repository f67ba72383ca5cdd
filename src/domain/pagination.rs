use serde::{Deserialize, Serialize};

use crate::domain::types::SortDirection;

/// Query parameters used when listing aggregates.
///
/// `page` is zero-based. Blank `terms` match every row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub page: usize,
    pub per_page: usize,
    pub terms: String,
    pub sort: String,
    pub direction: SortDirection,
}

impl SearchQuery {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page,
            per_page,
            terms: String::new(),
            sort: "name".to_string(),
            direction: SortDirection::Asc,
        }
    }

    pub fn terms(mut self, terms: impl Into<String>) -> Self {
        self.terms = terms.into();
        self
    }

    pub fn sort(mut self, sort: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = sort.into();
        self.direction = direction;
        self
    }

    /// Trimmed search terms, `None` when blank.
    pub fn search_terms(&self) -> Option<&str> {
        let terms = self.terms.trim();
        (!terms.is_empty()).then_some(terms)
    }

    /// Number of rows to skip for the requested page.
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.per_page)
    }
}

/// One page of results together with its paging metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination<T> {
    pub current_page: usize,
    pub per_page: usize,
    pub total: usize,
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(current_page: usize, per_page: usize, total: usize, items: Vec<T>) -> Self {
        Self {
            current_page,
            per_page,
            total,
            items,
        }
    }

    /// Converts every item while keeping order and metadata.
    pub fn map<U, F>(self, f: F) -> Pagination<U>
    where
        F: FnMut(T) -> U,
    {
        Pagination {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
