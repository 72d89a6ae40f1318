//! SeaORM implementation of ItemRepository
//!
//! A single implementation backs every catalog. The table comes from the
//! `CatalogKind`, and statements are built with sea-query so placeholders and
//! quoting follow whichever backend the connection points at (SQLite or
//! PostgreSQL). Tags use the backend's native array type when it has one.

use async_trait::async_trait;
use chrono::SubsecRound;
use sea_orm::sea_query::{Alias, Expr, Order, Query, SelectStatement, SimpleExpr, Value};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult, QueryResult, SqlErr, Statement,
};

use crate::domain::{CatalogKind, DomainError, ItemRepository};
use crate::models::item::{ItemColumn, ItemRow};
use crate::models::Item;

use super::tags::TagStorage;

/// SeaORM-based implementation of ItemRepository
pub struct SeaOrmItemRepository {
    db: DatabaseConnection,
    kind: CatalogKind,
    tags: TagStorage,
}

impl SeaOrmItemRepository {
    pub fn new(db: DatabaseConnection, kind: CatalogKind) -> Self {
        let tags = TagStorage::for_backend(db.get_database_backend());
        Self { db, kind, tags }
    }

    fn table(&self) -> Alias {
        Alias::new(self.kind.table)
    }

    fn select_all_columns(&self) -> SelectStatement {
        Query::select()
            .columns(ItemColumn::ALL)
            .from(self.table())
            .to_owned()
    }

    async fn count(&self) -> Result<i64, DomainError> {
        let query = Query::select()
            .expr_as(Expr::cust("COUNT(*)"), Alias::new("count"))
            .from(self.table())
            .to_owned();
        let stmt = self.db.get_database_backend().build(&query);

        let row = self
            .db
            .query_one(stmt)
            .await
            .map_err(|e| DomainError::storage("failed to check existing data", e))?;

        match row {
            Some(row) => Ok(row.try_get::<i64>("", "count")?),
            None => Ok(0),
        }
    }

    fn to_item(&self, res: &QueryResult) -> Result<Item, DomainError> {
        let row = ItemRow::from_query_result(res, "")?;
        let tags = self.tags.decode(res, &row.id)?;
        Ok(row.into_item(tags))
    }

    /// Values for every column but the id, in `ItemColumn::ALL` order
    fn mutable_values(&self, item: &Item) -> Result<Vec<(ItemColumn, SimpleExpr)>, DomainError> {
        Ok(vec![
            (ItemColumn::Title, val(item.title.clone())),
            (ItemColumn::Description, val(item.description.clone())),
            (ItemColumn::Category, val(item.category.clone())),
            (ItemColumn::Tags, SimpleExpr::Value(self.tags.encode(&item.tags)?)),
            (ItemColumn::UpdatedAt, val(item.updated_at)),
            (ItemColumn::ContentB64, val(item.content_b64.clone())),
            (ItemColumn::CoverImage, val(item.cover_image.clone())),
        ])
    }
}

fn val(v: impl Into<Value>) -> SimpleExpr {
    SimpleExpr::Value(v.into())
}

/// Timestamps are kept at microsecond precision, the finest every backend
/// stores, so what a write returns is what a later read sees.
fn normalize(mut item: Item) -> Item {
    item.updated_at = item.updated_at.trunc_subsecs(6);
    item
}

/// Duplicate primary key on insert. Driver codes first, then the message text
/// SQLite ("UNIQUE constraint failed") and PostgreSQL ("duplicate key") report.
fn is_unique_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }
    let msg = err.to_string();
    msg.contains("UNIQUE constraint failed") || msg.contains("duplicate key")
}

/// DDL for one catalog table. Only the tags column differs per backend.
fn schema_statements(table: &str, tags: TagStorage) -> [String; 3] {
    let tags_column = tags.column_ddl();
    [
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table} (
                id VARCHAR(255) PRIMARY KEY,
                title VARCHAR(500) NOT NULL,
                description TEXT,
                category VARCHAR(100),
                {tags_column},
                updated_at TIMESTAMPTZ NOT NULL,
                content_b64 TEXT NOT NULL,
                cover_image VARCHAR(1000) NOT NULL
            )
            "#
        ),
        format!("CREATE INDEX IF NOT EXISTS idx_{table}_category ON {table} (category)"),
        format!("CREATE INDEX IF NOT EXISTS idx_{table}_updated_at ON {table} (updated_at DESC)"),
    ]
}

#[async_trait]
impl ItemRepository for SeaOrmItemRepository {
    fn kind(&self) -> CatalogKind {
        self.kind
    }

    async fn ensure_schema(&self) -> Result<(), DomainError> {
        let backend = self.db.get_database_backend();

        for sql in schema_statements(self.kind.table, self.tags) {
            self.db
                .execute(Statement::from_string(backend, sql))
                .await
                .map_err(|e| DomainError::storage("failed to initialize schema", e))?;
        }

        tracing::debug!(kind = %self.kind, "Schema ensured");
        Ok(())
    }

    async fn seed_if_empty(&self, items: Vec<Item>) -> Result<usize, DomainError> {
        let existing = self.count().await?;
        if existing > 0 {
            tracing::debug!(kind = %self.kind, existing, "Table not empty, skipping seed");
            return Ok(0);
        }

        let total = items.len();
        for item in items {
            let id = item.id.clone();
            self.create(item).await.map_err(|e| {
                DomainError::Storage(format!(
                    "failed to seed {} {}: {}",
                    self.kind.singular, id, e
                ))
            })?;
        }

        Ok(total)
    }

    async fn find_all(&self) -> Result<Vec<Item>, DomainError> {
        let query = self
            .select_all_columns()
            .order_by(ItemColumn::UpdatedAt, Order::Desc)
            .order_by(ItemColumn::Id, Order::Asc)
            .to_owned();
        let stmt = self.db.get_database_backend().build(&query);

        let rows = self
            .db
            .query_all(stmt)
            .await
            .map_err(|e| DomainError::storage(&format!("failed to query {}", self.kind), e))?;

        rows.iter().map(|res| self.to_item(res)).collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Item, DomainError> {
        let query = self
            .select_all_columns()
            .and_where(Expr::col(ItemColumn::Id).eq(id))
            .to_owned();
        let stmt = self.db.get_database_backend().build(&query);

        let row = self
            .db
            .query_one(stmt)
            .await
            .map_err(|e| {
                DomainError::storage(&format!("failed to query {}", self.kind.singular), e)
            })?;

        match row {
            Some(res) => self.to_item(&res),
            None => Err(DomainError::NotFound(id.to_string())),
        }
    }

    async fn create(&self, item: Item) -> Result<Item, DomainError> {
        let item = normalize(item);
        let mut values = vec![val(item.id.clone())];
        values.extend(self.mutable_values(&item)?.into_iter().map(|(_, v)| v));

        let mut query = Query::insert();
        query.into_table(self.table()).columns(ItemColumn::ALL);
        query
            .values(values)
            .map_err(|e| DomainError::storage("failed to build insert", e))?;
        let stmt = self.db.get_database_backend().build(&query);

        match self.db.execute(stmt).await {
            Ok(_) => Ok(item),
            Err(e) if is_unique_violation(&e) => {
                Err(DomainError::Conflict(item.id))
            }
            Err(e) => Err(DomainError::storage(
                &format!("failed to create {}", self.kind.singular),
                e,
            )),
        }
    }

    async fn update(&self, item: Item) -> Result<Item, DomainError> {
        let item = normalize(item);
        let mut query = Query::update();
        query
            .table(self.table())
            .values(self.mutable_values(&item)?)
            .and_where(Expr::col(ItemColumn::Id).eq(item.id.as_str()));
        let stmt = self.db.get_database_backend().build(&query);

        let result = self.db.execute(stmt).await.map_err(|e| {
            DomainError::storage(&format!("failed to update {}", self.kind.singular), e)
        })?;

        // A missing row is not a driver error; only the affected count tells.
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(item.id));
        }

        Ok(item)
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let query = Query::delete()
            .from_table(self.table())
            .and_where(Expr::col(ItemColumn::Id).eq(id))
            .to_owned();
        let stmt = self.db.get_database_backend().build(&query);

        let result = self.db.execute(stmt).await.map_err(|e| {
            DomainError::storage(&format!("failed to delete {}", self.kind.singular), e)
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
