//! Application-level error type for HTTP handlers.
//!
//! Handlers convert the failures they expect (store unavailable, shape
//! rejection) into rendered pages themselves; anything that propagates
//! here is unexpected, gets logged, and becomes a generic error page with
//! no internal detail exposed.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use ovation_core::error::CoreError;
use ovation_db::store::StoreError;

/// Last-resort error page, served when rendering through the view engine
/// is not possible or not warranted.
pub const FALLBACK_ERROR_HTML: &str = "<!DOCTYPE html>\
<html lang=\"en\"><head><meta charset=\"utf-8\"><title>Error</title></head>\
<body><h1>Something went wrong</h1>\
<p>Please try again later.</p></body></html>";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `ovation-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A record store error that no handler branch claimed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request body could not be understood.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(msg) => {
                tracing::debug!(error = %msg, "Rejected malformed request body");
                StatusCode::BAD_REQUEST
            }
            other => {
                tracing::error!(error = %other, "Unhandled error reached the response boundary");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Html(FALLBACK_ERROR_HTML)).into_response()
    }
}
