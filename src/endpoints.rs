//! The route URIs for the app and the paths it calls on the transaction
//! query service.

/// The root route which redirects to the transactions view.
pub const ROOT: &str = "/";
/// The page for browsing transactions.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The route for selecting the month to filter transactions by.
pub const SET_MONTH: &str = "/transactions/month";
/// The route for updating the free-text search filter.
pub const SEARCH: &str = "/transactions/search";
/// The route for advancing to the next page of transactions.
pub const NEXT_PAGE: &str = "/transactions/next";
/// The route for going back to the previous page of transactions.
pub const PREVIOUS_PAGE: &str = "/transactions/previous";

/// The path on the transaction query service that resolves a filter query
/// into a page of transactions.
pub const QUERY_SERVICE_TRANSACTIONS: &str = "/api/transactions";
