//! The client for the transaction query service.
//!
//! The service is an external REST API that resolves a filter query into a
//! page of transactions. The [TransactionQueryService] trait is the seam
//! between the view and the network so that the view can be tested against
//! stub services.

mod http;
mod query_service;

pub use http::HttpQueryService;
pub use query_service::TransactionQueryService;
