// SPDX-License-Identifier: MIT

//! Application error types.
//!
//! Fetch failures are not server errors: a failed backend fetch still
//! renders a 200 page with an inline alert. `AppError` only covers faults
//! in the dashboard itself (template rendering and the like).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Failure of a single list-resource fetch against the backend.
///
/// The taxonomy is deliberately flat: every failure reduces to one message
/// shown verbatim in the page alert, with no retry and no distinction in
/// treatment between an HTTP status and a transport fault.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error! status: {0}")]
    Http(u16),

    #[error("{0}")]
    Network(String),
}

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Render(err) => {
                tracing::error!(error = %err, "Template rendering failed");
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
            }
        }

        (StatusCode::INTERNAL_SERVER_ERROR, "internal_error").into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
