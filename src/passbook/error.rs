//! Error types for the web handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors a page handler can surface.
///
/// Protocol-level failures (bad tokens, bad credentials) are handled inline
/// by the handlers and never reach this type; only rendering problems do,
/// as a plain 500.
#[derive(Debug, Error)]
pub enum PageError {
    /// Template rendering error.
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let PageError::Template(err) = &self;
        tracing::error!("Failed to render page: {err}");

        (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
    }
}
