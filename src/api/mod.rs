pub mod error;
pub mod health;
pub mod items;

use axum::{Router, routing::get};

use crate::infrastructure::AppState;

pub use items::catalog_router;

/// API routes: health plus one nested router per catalog (`/acmes`, `/goldens`)
pub fn api_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .with_state(state.clone());

    for catalog in state.catalogs() {
        let path = format!("/{}", catalog.kind().table);
        router = router.nest(&path, catalog_router(catalog.clone()));
    }

    router
}
