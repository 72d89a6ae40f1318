//! Services Layer
//!
//! Domain-facing operations, independent of the wire protocol and of the
//! storage technology.

pub mod catalog_service;

// Re-export for convenience
pub use catalog_service::CatalogService;
