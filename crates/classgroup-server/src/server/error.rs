//! Request-level errors and their HTTP mapping.
//!
//! Every variant renders as a plain-text body prefixed with `Error: `. Client
//! mistakes map to `400 Bad Request`; anything else is a `500` and is logged.
//!
//! ## Error Cases
//! - `NoNames`: The submitted roster had no non-blank lines.
//! - `TooManyNames`: The roster exceeded the configured `MAX_NAMES`.
//! - `Document`: The PDF writer failed.
//! - `Template`: An HTML view failed to render.

use crate::server::telemetry::increment_rejected_requests;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No names provided")]
    NoNames,

    #[error("Too many names (limit {limit})")]
    TooManyNames { limit: usize },

    #[error("Could not render the document: {0}")]
    Document(classgroup::Error),

    #[error("Could not render the page: {0}")]
    Template(#[from] askama::Error),
}

impl From<classgroup::Error> for AppError {
    fn from(err: classgroup::Error) -> Self {
        match err {
            classgroup::Error::NoNames => AppError::NoNames,
            other => AppError::Document(other),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NoNames | AppError::TooManyNames { .. } => StatusCode::BAD_REQUEST,
            AppError::Document(_) | AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {self}");
        } else {
            increment_rejected_requests();
            tracing::debug!("Request rejected: {self}");
        }
        (status, format!("Error: {self}")).into_response()
    }
}
