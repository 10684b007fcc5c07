//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    not_found::get_404_not_found,
    transactions::{
        get_transactions_page, next_page_endpoint, prev_page_endpoint, search_endpoint,
        set_month_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(endpoints::SET_MONTH, post(set_month_endpoint))
        .route(endpoints::SEARCH, post(search_endpoint))
        .route(endpoints::NEXT_PAGE, post(next_page_endpoint))
        .route(endpoints::PREVIOUS_PAGE, post(prev_page_endpoint))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the transactions page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::TRANSACTIONS_VIEW)
}
