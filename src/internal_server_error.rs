//! The page shown when the app hits an unexpected error.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// The 500 page.
///
/// Query failures are absorbed by the view manager and never render this
/// page; it only appears when something outside the fetch path goes wrong.
#[derive(Default)]
pub(crate) struct InternalServerError;

impl InternalServerError {
    fn into_html(self) -> Html<String> {
        Html(
            error_view(
                "Internal Server Error",
                "500",
                "Sorry, something went wrong on our end.",
                "Reload the page, or check the server logs if the problem persists.",
            )
            .into_string(),
        )
    }
}

impl IntoResponse for InternalServerError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.into_html()).into_response()
    }
}

#[cfg(test)]
mod internal_server_error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::InternalServerError;

    #[test]
    fn returns_internal_server_error_status() {
        let response = InternalServerError::default().into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
