//! Salesview is a web app for browsing product sale transactions.
//!
//! The app serves a single server-rendered page: a table of transactions
//! that can be filtered by calendar month and free-text search, and paged
//! through with previous/next controls. Transaction data is fetched from an
//! external transaction query service over HTTP; this library owns the view
//! state, the query derivation, and the HTML rendering.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod api;
mod app_state;
mod endpoints;
mod html;
mod internal_server_error;
mod not_found;
mod pagination;
mod routing;
mod transactions;

pub use api::{HttpQueryService, TransactionQueryService};
pub use app_state::AppState;
pub use pagination::PaginationConfig;
pub use routing::build_router;
pub use transactions::{
    Month, Transaction, TransactionFilter, TransactionsManager, ViewSnapshot, WireParams,
};

use crate::internal_server_error::InternalServerError;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A query against the transaction query service failed.
    ///
    /// This covers connection failures, non-success HTTP statuses, and
    /// response bodies that could not be decoded. The error string should
    /// be logged on the server; the client keeps displaying the last
    /// successfully fetched page.
    #[error("transaction query failed: {0}")]
    QueryFailed(String),

    /// Could not acquire the lock on the view state.
    #[error("could not acquire the view state lock")]
    StateLock,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Query failures are handled inside the view manager and never reach
        // a response; anything arriving here is unexpected.
        tracing::error!("An unexpected error occurred: {self}");
        InternalServerError::default().into_response()
    }
}
