//! The filter state that drives transaction queries.

use serde::Serialize;

use crate::pagination::PaginationConfig;

use super::Month;

/// The filter and pagination state for the transactions view.
///
/// The four fields map one-to-one onto the query parameters of the
/// transaction query service. State changes go through the transition
/// methods so that the page-reset rule stays in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFilter {
    month: Month,
    search_text: String,
    page: u64,
    per_page: u64,
}

impl TransactionFilter {
    /// Create a filter with the initial view state: the default month, an
    /// empty search, and the first page at `config`'s page size.
    pub fn new(config: &PaginationConfig) -> Self {
        Self {
            month: Month::default(),
            search_text: String::new(),
            page: config.default_page,
            per_page: config.default_page_size,
        }
    }

    /// The currently selected month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// The current free-text search.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// The current page number, starting at 1.
    pub fn page(&self) -> u64 {
        self.page
    }

    /// The number of transactions requested per page.
    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Select a different month.
    ///
    /// The page number is left untouched: switching months keeps the user
    /// on whatever page they were viewing.
    pub fn set_month(&mut self, month: Month) {
        self.month = month;
    }

    /// Replace the search text and reset to the first page.
    ///
    /// A new search always starts from page 1, regardless of how far the
    /// user had paged through the previous results.
    pub fn set_search_text(&mut self, text: String) {
        self.search_text = text;
        self.page = 1;
    }

    /// Advance to the next page.
    ///
    /// There is no upper bound; the service decides whether the page is
    /// empty.
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Go back one page, unless already on the first.
    ///
    /// Returns whether the page changed so that callers can skip the
    /// re-fetch when it did not.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// The canonical query for the transaction query service, with all four
    /// values taken verbatim from this filter.
    pub fn as_wire_params(&self) -> WireParams<'_> {
        WireParams {
            month: self.month,
            search: &self.search_text,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

impl Default for TransactionFilter {
    fn default() -> Self {
        Self::new(&PaginationConfig::default())
    }
}

/// The query parameters sent to the transaction query service.
///
/// Field order is the order the parameters appear in the request URL.
#[derive(Debug, Serialize)]
pub struct WireParams<'a> {
    month: Month,
    search: &'a str,
    page: u64,
    #[serde(rename = "perPage")]
    per_page: u64,
}
