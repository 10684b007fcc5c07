//! Implements a struct that holds the state of the app.

use std::sync::Arc;

use crate::{
    api::TransactionQueryService, pagination::PaginationConfig, transactions::TransactionsManager,
};

/// The state shared across the app's routes.
#[derive(Clone)]
pub struct AppState {
    /// The query state manager for the transactions view.
    pub transactions: TransactionsManager,
}

impl AppState {
    /// Create a new [AppState] whose transactions view queries
    /// `query_service` and pages data per `pagination_config`.
    pub fn new(
        query_service: Arc<dyn TransactionQueryService>,
        pagination_config: PaginationConfig,
    ) -> Self {
        Self {
            transactions: TransactionsManager::new(query_service, &pagination_config),
        }
    }
}
