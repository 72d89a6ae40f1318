use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::domain::{CatalogKind, DomainError, ItemRepository};
use crate::infrastructure::SeaOrmItemRepository;

/// Open the connection pool and make sure the backend answers.
///
/// `max_connections` of `None` keeps the driver default, which for SQLite is a
/// single connection so `sqlite::memory:` stays one database.
pub async fn connect(
    database_url: &str,
    max_connections: Option<u32>,
) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);
    if let Some(max) = max_connections {
        options.max_connections(max);
    }

    let db = Database::connect(options).await?;
    db.ping().await?;

    Ok(db)
}

/// Connect and ensure every catalog table exists.
pub async fn init_db(
    database_url: &str,
    max_connections: Option<u32>,
) -> Result<DatabaseConnection, DomainError> {
    let db = connect(database_url, max_connections).await?;
    run_migrations(&db).await?;
    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DomainError> {
    for kind in CatalogKind::ALL {
        SeaOrmItemRepository::new(db.clone(), kind)
            .ensure_schema()
            .await?;
        tracing::info!(kind = %kind, "Schema ready");
    }
    Ok(())
}
