use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

/// Body of the 500 page. Static so it can never fail to render.
const INTERNAL_ERROR_PAGE: &str = "<!doctype html>\
<html><head><meta charset=\"utf-8\"><title>Something went wrong</title></head>\
<body><div class=\"error-container\"><h1 class=\"error-message\">An internal error occurred</h1>\
<a href=\"/\" class=\"back-button\">Back to search</a></div></body></html>";

/// Application-level error type for HTTP handlers.
///
/// Directory failures never get here; they are resolved into a page by the
/// detail handler. What remains are faults of this server.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A page template failed to render.
    #[error("Template error: {0}")]
    Render(#[from] minijinja::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Render(err) => {
                tracing::error!(error = %err, "Page render failed");
            }
        }

        (StatusCode::INTERNAL_SERVER_ERROR, Html(INTERNAL_ERROR_PAGE)).into_response()
    }
}
