//! Catalog Service - domain-facing operations without any HTTP layer
//!
//! Each call delegates to the repository unchanged: no extra validation, no
//! extra side effects. Handlers depend on this type, never on the store.

use std::sync::Arc;

use crate::domain::{CatalogKind, DomainError, ItemRepository};
use crate::models::Item;

#[derive(Clone)]
pub struct CatalogService {
    repo: Arc<dyn ItemRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        Self { repo }
    }

    pub fn kind(&self) -> CatalogKind {
        self.repo.kind()
    }

    pub async fn list_all(&self) -> Result<Vec<Item>, DomainError> {
        self.repo.find_all().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Item, DomainError> {
        self.repo.find_by_id(id).await
    }

    pub async fn create(&self, item: Item) -> Result<Item, DomainError> {
        self.repo.create(item).await
    }

    pub async fn update(&self, item: Item) -> Result<Item, DomainError> {
        self.repo.update(item).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::sync::Mutex;

    /// Records every call and answers from a fixed script
    struct ScriptedRepository {
        calls: Mutex<Vec<String>>,
        error: Option<DomainError>,
    }

    impl ScriptedRepository {
        fn ok() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                error: None,
            }
        }

        fn failing(error: DomainError) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                error: Some(error),
            }
        }

        fn record(&self, call: String) -> Result<(), DomainError> {
            self.calls.lock().unwrap().push(call);
            match &self.error {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl ItemRepository for ScriptedRepository {
        fn kind(&self) -> CatalogKind {
            CatalogKind::GOLDEN
        }

        async fn ensure_schema(&self) -> Result<(), DomainError> {
            self.record("ensure_schema".to_string())
        }

        async fn seed_if_empty(&self, items: Vec<Item>) -> Result<usize, DomainError> {
            self.record("seed_if_empty".to_string())?;
            Ok(items.len())
        }

        async fn find_all(&self) -> Result<Vec<Item>, DomainError> {
            self.record("find_all".to_string())?;
            Ok(vec![sample("a")])
        }

        async fn find_by_id(&self, id: &str) -> Result<Item, DomainError> {
            self.record(format!("find_by_id:{id}"))?;
            Ok(sample(id))
        }

        async fn create(&self, item: Item) -> Result<Item, DomainError> {
            self.record(format!("create:{}", item.id))?;
            Ok(item)
        }

        async fn update(&self, item: Item) -> Result<Item, DomainError> {
            self.record(format!("update:{}", item.id))?;
            Ok(item)
        }

        async fn delete(&self, id: &str) -> Result<(), DomainError> {
            self.record(format!("delete:{id}"))
        }
    }

    fn sample(id: &str) -> Item {
        Item {
            id: id.to_string(),
            title: "Golden".to_string(),
            description: None,
            category: None,
            tags: Vec::new(),
            updated_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
            content_b64: String::new(),
            cover_image: String::new(),
        }
    }

    #[tokio::test]
    async fn delegates_each_operation_once() {
        let repo = Arc::new(ScriptedRepository::ok());
        let service = CatalogService::new(repo.clone());

        assert_eq!(service.kind(), CatalogKind::GOLDEN);
        assert_eq!(service.list_all().await.unwrap().len(), 1);
        assert_eq!(service.get_by_id("x").await.unwrap().id, "x");
        assert_eq!(service.create(sample("y")).await.unwrap(), sample("y"));
        assert_eq!(service.update(sample("y")).await.unwrap(), sample("y"));
        service.delete("y").await.unwrap();

        assert_eq!(
            *repo.calls.lock().unwrap(),
            vec!["find_all", "find_by_id:x", "create:y", "update:y", "delete:y"]
        );
    }

    #[tokio::test]
    async fn passes_errors_through_unchanged() {
        for error in [
            DomainError::NotFound("x".to_string()),
            DomainError::Conflict("x".to_string()),
            DomainError::Storage("down".to_string()),
        ] {
            let service = CatalogService::new(Arc::new(ScriptedRepository::failing(error.clone())));
            assert_eq!(service.get_by_id("x").await.unwrap_err(), error);
            assert_eq!(service.delete("x").await.unwrap_err(), error);
        }
    }
}
