//! Defines the route handler for the 404 not found page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// Render the 404 not found page.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub(crate) fn get_404_not_found_response() -> Response {
    let page = error_view(
        "Not Found",
        "404",
        "Whoops! That page does not exist.",
        "Check the URL or head back to the transactions page.",
    );

    (StatusCode::NOT_FOUND, Html(page.into_string())).into_response()
}
