//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! The set is closed on purpose: the API layer maps every variant to a status
//! without a fallback arm.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No row for the given id
    NotFound(String),
    /// Duplicate id on create
    Conflict(String),
    /// Connectivity, malformed row or backend error
    Storage(String),
    /// Malformed request shape, raised before the store is reached
    Validation(String),
}

impl DomainError {
    pub fn storage(context: &str, err: impl fmt::Display) -> Self {
        DomainError::Storage(format!("{}: {}", context, err))
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound(id) => write!(f, "Resource not found: {}", id),
            DomainError::Conflict(id) => write!(f, "Resource already exists: {}", id),
            DomainError::Storage(msg) => write!(f, "Database error: {}", msg),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Storage(e.to_string())
    }
}
