//! Defines the route handlers for the transactions view.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_htmx::HxRequest;
use serde::Deserialize;

use crate::{AppState, Error, endpoints};

use super::{
    Month, ViewSnapshot,
    view::{transactions_page, transactions_view},
};

/// Render the transactions page.
///
/// Loading the page re-issues the query for the current filter state, so a
/// fresh app renders the default query's results.
pub async fn get_transactions_page(State(state): State<AppState>) -> Result<Response, Error> {
    let snapshot = state.transactions.refresh().await?;

    Ok(transactions_page(&snapshot).into_response())
}

/// The form body for the month selector.
#[derive(Debug, Deserialize)]
pub(crate) struct MonthSelection {
    month: Month,
}

/// Select the month to filter transactions by.
pub async fn set_month_endpoint(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Form(selection): Form<MonthSelection>,
) -> Result<Response, Error> {
    let snapshot = state.transactions.set_month(selection.month).await?;

    Ok(view_response(is_htmx, &snapshot))
}

/// The form body for the search input.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchForm {
    search: String,
}

/// Update the free-text search filter.
pub async fn search_endpoint(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<SearchForm>,
) -> Result<Response, Error> {
    let snapshot = state.transactions.set_search_text(form.search).await?;

    Ok(view_response(is_htmx, &snapshot))
}

/// Advance to the next page of transactions.
pub async fn next_page_endpoint(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
) -> Result<Response, Error> {
    let snapshot = state.transactions.next_page().await?;

    Ok(view_response(is_htmx, &snapshot))
}

/// Go back to the previous page of transactions.
pub async fn prev_page_endpoint(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
) -> Result<Response, Error> {
    let snapshot = state.transactions.prev_page().await?;

    Ok(view_response(is_htmx, &snapshot))
}

/// HTMX requests get the re-rendered view fragment; anything else (a form
/// submit with scripts disabled, curl) is sent back to the full page.
fn view_response(is_htmx: bool, snapshot: &ViewSnapshot) -> Response {
    if is_htmx {
        transactions_view(snapshot).into_response()
    } else {
        Redirect::to(endpoints::TRANSACTIONS_VIEW).into_response()
    }
}
