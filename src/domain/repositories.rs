//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::{CatalogKind, DomainError};
use crate::models::Item;

/// Repository trait for one catalog table
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// The catalog this repository stores
    fn kind(&self) -> CatalogKind;

    /// Create the table and its indexes if they are missing
    async fn ensure_schema(&self) -> Result<(), DomainError>;

    /// Insert `items` one by one, only when the table is empty.
    /// Returns how many rows were inserted (0 when the table already had data).
    async fn seed_if_empty(&self, items: Vec<Item>) -> Result<usize, DomainError>;

    /// All items, most recently updated first
    async fn find_all(&self) -> Result<Vec<Item>, DomainError>;

    /// A single item, or `DomainError::NotFound`
    async fn find_by_id(&self, id: &str) -> Result<Item, DomainError>;

    /// Insert a new item; `DomainError::Conflict` when the id is taken
    async fn create(&self, item: Item) -> Result<Item, DomainError>;

    /// Replace every field but the id; `DomainError::NotFound` when no row matched
    async fn update(&self, item: Item) -> Result<Item, DomainError>;

    /// Delete an item; `DomainError::NotFound` when no row matched
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}
