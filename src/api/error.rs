//! Mapping from domain failures to HTTP responses
//!
//! This is the only place a `DomainError` becomes a status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{CatalogKind, DomainError};

/// Error body returned by every catalog endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    /// Machine-readable status: not_found, already_exists, invalid_argument, internal
    pub code: String,
}

pub fn status_for(err: &DomainError) -> (StatusCode, &'static str) {
    match err {
        DomainError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        DomainError::Conflict(_) => (StatusCode::CONFLICT, "already_exists"),
        DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "invalid_argument"),
        DomainError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
    }
}

/// Log the failure and build the response.
///
/// `failure` is the short text returned for storage failures, e.g.
/// "failed to get acmes". The underlying cause only goes to the log.
pub fn error_response(kind: CatalogKind, op: &str, failure: &str, err: DomainError) -> Response {
    let (status, code) = status_for(&err);

    let message = match err {
        DomainError::NotFound(id) => {
            tracing::warn!(op, kind = %kind, id = %id, "Not found");
            format!("{} not found: {}", kind.singular, id)
        }
        DomainError::Conflict(id) => {
            tracing::warn!(op, kind = %kind, id = %id, "Already exists");
            format!("{} already exists: {}", kind.singular, id)
        }
        DomainError::Validation(msg) => {
            tracing::warn!(op, kind = %kind, error = %msg, "Invalid request");
            msg
        }
        DomainError::Storage(cause) => {
            tracing::error!(op, kind = %kind, error = %cause, "Storage failure");
            failure.to_string()
        }
    };

    (
        status,
        Json(ErrorBody {
            error: message,
            code: code.to_string(),
        }),
    )
        .into_response()
}
