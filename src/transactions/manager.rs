//! The query state manager for the transactions view.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, api::TransactionQueryService, pagination::PaginationConfig};

use super::{Month, Transaction, TransactionFilter};

/// A point-in-time copy of the view state, used for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    /// The filter state at the time of the snapshot.
    pub filter: TransactionFilter,
    /// The most recently fetched page of transactions.
    pub transactions: Vec<Transaction>,
}

/// Owns the transactions view state and keeps it in sync with the
/// transaction query service.
///
/// Every operation applies a filter transition, issues a single query
/// against the service, and returns a snapshot for rendering. Each fetch is
/// numbered when it is issued, and a response is applied only while its
/// number is still the latest issued, so a slow response can never overwrite
/// the result of a newer query. A failed fetch leaves the previously
/// displayed page untouched and logs a diagnostic.
#[derive(Clone)]
pub struct TransactionsManager {
    query_service: Arc<dyn TransactionQueryService>,
    state: Arc<Mutex<ViewState>>,
}

#[derive(Debug)]
struct ViewState {
    filter: TransactionFilter,
    transactions: Vec<Transaction>,
    /// The sequence number of the most recently issued fetch.
    last_issued: u64,
}

impl ViewState {
    /// Number a new fetch for the current filter.
    fn begin_fetch(&mut self) -> (u64, TransactionFilter) {
        self.last_issued += 1;
        (self.last_issued, self.filter.clone())
    }
}

impl TransactionsManager {
    /// Create a manager with an empty transaction page and the initial
    /// filter state taken from `config`.
    pub fn new(query_service: Arc<dyn TransactionQueryService>, config: &PaginationConfig) -> Self {
        Self {
            query_service,
            state: Arc::new(Mutex::new(ViewState {
                filter: TransactionFilter::new(config),
                transactions: Vec::new(),
                last_issued: 0,
            })),
        }
    }

    /// Re-issue the query for the current filter state.
    ///
    /// This is the fetch that runs when the page is (re)loaded.
    pub async fn refresh(&self) -> Result<ViewSnapshot, Error> {
        let (sequence, filter) = self.transition(|_| {})?;
        self.run_fetch(sequence, filter).await
    }

    /// Select a different month and re-fetch.
    ///
    /// The page number is left untouched.
    pub async fn set_month(&self, month: Month) -> Result<ViewSnapshot, Error> {
        let (sequence, filter) = self.transition(|filter| filter.set_month(month))?;
        self.run_fetch(sequence, filter).await
    }

    /// Replace the search text, reset to the first page, and re-fetch.
    pub async fn set_search_text(&self, text: String) -> Result<ViewSnapshot, Error> {
        let (sequence, filter) = self.transition(move |filter| filter.set_search_text(text))?;
        self.run_fetch(sequence, filter).await
    }

    /// Advance to the next page and re-fetch.
    ///
    /// No upper bound is enforced; paging past the last page yields an
    /// empty page from the service.
    pub async fn next_page(&self) -> Result<ViewSnapshot, Error> {
        let (sequence, filter) = self.transition(|filter| filter.next_page())?;
        self.run_fetch(sequence, filter).await
    }

    /// Go back one page and re-fetch.
    ///
    /// On the first page this is a no-op: no query is issued and the
    /// current snapshot is returned as-is.
    pub async fn prev_page(&self) -> Result<ViewSnapshot, Error> {
        let begun = {
            let mut state = self.lock()?;
            if state.filter.prev_page() {
                Some(state.begin_fetch())
            } else {
                None
            }
        };

        match begun {
            Some((sequence, filter)) => self.run_fetch(sequence, filter).await,
            None => self.snapshot(),
        }
    }

    /// A copy of the current view state.
    pub fn snapshot(&self) -> Result<ViewSnapshot, Error> {
        let state = self.lock()?;

        Ok(ViewSnapshot {
            filter: state.filter.clone(),
            transactions: state.transactions.clone(),
        })
    }

    /// Apply `transition` to the filter and number a fetch for the result.
    fn transition(
        &self,
        transition: impl FnOnce(&mut TransactionFilter),
    ) -> Result<(u64, TransactionFilter), Error> {
        let mut state = self.lock()?;
        transition(&mut state.filter);

        Ok(state.begin_fetch())
    }

    /// Query the service and apply the response.
    ///
    /// The state lock is not held across the network call, so operations
    /// can overlap; the sequence check decides which response wins.
    async fn run_fetch(
        &self,
        sequence: u64,
        filter: TransactionFilter,
    ) -> Result<ViewSnapshot, Error> {
        match self.query_service.fetch_page(&filter).await {
            Ok(transactions) => {
                let mut state = self.lock()?;
                if sequence == state.last_issued {
                    state.transactions = transactions;
                } else {
                    tracing::debug!("discarding response for superseded query #{sequence}");
                }
            }
            Err(error) => {
                // The previously fetched page stays on display.
                tracing::error!("Error fetching transactions: {error}");
            }
        }

        self.snapshot()
    }

    fn lock(&self) -> Result<MutexGuard<'_, ViewState>, Error> {
        self.state
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire view state lock: {error}"))
            .map_err(|_| Error::StateLock)
    }
}
