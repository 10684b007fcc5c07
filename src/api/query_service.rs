//! Defines the transaction query service trait.

use async_trait::async_trait;

use crate::{
    Error,
    transactions::{Transaction, TransactionFilter},
};

/// Resolves a filter query into a page of transactions.
///
/// Implementers map `filter` to a single read request and return the
/// transactions for that page in the order the service produced them. All
/// failure modes (connection failure, non-success status, undecodable body)
/// are reported as [Error::QueryFailed].
#[async_trait]
pub trait TransactionQueryService: Send + Sync {
    /// Fetch the page of transactions selected by `filter`.
    async fn fetch_page(&self, filter: &TransactionFilter) -> Result<Vec<Transaction>, Error>;
}
