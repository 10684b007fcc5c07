//! The transactions view.
//!
//! This module contains everything for the single page the app serves:
//! - the [Transaction] wire model and the [Month] filter value
//! - [TransactionFilter], the query state, and [TransactionsManager], which
//!   keeps that state in sync with the transaction query service
//! - the maud view and the axum route handlers

mod filter;
mod manager;
mod models;
mod month;
mod page;
mod view;

pub use filter::{TransactionFilter, WireParams};
pub use manager::{TransactionsManager, ViewSnapshot};
pub use models::Transaction;
pub use month::Month;
pub use page::{
    get_transactions_page, next_page_endpoint, prev_page_endpoint, search_endpoint,
    set_month_endpoint,
};
