//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM queries, no Axum).
//! Only trait definitions, catalog kinds and domain error types.

pub mod errors;
pub mod kind;
pub mod repositories;

pub use errors::DomainError;
pub use kind::CatalogKind;
pub use repositories::*;
