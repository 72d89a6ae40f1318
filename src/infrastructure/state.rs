//! Application state containing the catalog services and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{CatalogKind, ItemRepository};
use crate::infrastructure::SeaOrmItemRepository;
use crate::services::CatalogService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection (health checks, shutdown)
    db: DatabaseConnection,
    /// One service per catalog kind, in `CatalogKind::ALL` order
    catalogs: Vec<CatalogService>,
}

impl AppState {
    /// Create a new AppState with a SeaORM repository per catalog kind
    pub fn new(db: DatabaseConnection) -> Self {
        let catalogs = CatalogKind::ALL
            .into_iter()
            .map(|kind| {
                let repo: Arc<dyn ItemRepository> =
                    Arc::new(SeaOrmItemRepository::new(db.clone(), kind));
                CatalogService::new(repo)
            })
            .collect();

        Self { db, catalogs }
    }

    /// Build state from already constructed services (tests, alternative stores)
    pub fn with_catalogs(db: DatabaseConnection, catalogs: Vec<CatalogService>) -> Self {
        Self { db, catalogs }
    }

    /// Get the database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn catalogs(&self) -> &[CatalogService] {
        &self.catalogs
    }
}

// Implement FromRef to allow extracting DatabaseConnection from AppState
impl axum::extract::FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
