use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_service::config::Config;
use catalog_service::domain::{CatalogKind, ItemRepository};
use catalog_service::infrastructure::{AppState, SeaOrmItemRepository};
use catalog_service::services::CatalogService;
use catalog_service::{db, seed, server};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        tracing::error!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("🚀 Starting catalog service");

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    // Initialize database
    tracing::info!("🚀 Loading database");
    let db = db::connect(&config.database_url(), Some(config.max_connections))
        .await
        .map_err(|e| format!("Failed to connect to database: {}", e))?;
    tracing::info!("✅ Connected to database");

    let now = chrono::Utc::now();
    let mut catalogs = Vec::with_capacity(CatalogKind::ALL.len());
    for kind in CatalogKind::ALL {
        let repo: Arc<dyn ItemRepository> = Arc::new(SeaOrmItemRepository::new(db.clone(), kind));

        repo.ensure_schema()
            .await
            .map_err(|e| format!("Failed to initialize schema for {}: {}", kind, e))?;

        if config.seed_data {
            if let Err(e) = seed::seed_demo_data(repo.as_ref(), now).await {
                tracing::warn!(kind = %kind, "⚠️  Failed to seed data: {}", e);
            }
        }

        catalogs.push(CatalogService::new(repo));
    }

    let app = server::build_router(AppState::with_catalogs(db.clone(), catalogs));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.rpc_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to listen on {}: {}", addr, e))?;

    let served = server::serve(listener, app, server::shutdown_signal()).await;

    // In-flight requests are done; the pool goes regardless of how serving ended
    if let Err(e) = db.close().await {
        tracing::warn!("Failed to close database pool: {}", e);
    }
    served?;

    tracing::info!("👋 Service stopped");
    Ok(())
}
