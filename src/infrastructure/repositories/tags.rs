//! Tag column encoding
//!
//! PostgreSQL stores tags in a native `TEXT[]` column. Backends without an
//! array type (SQLite) store a JSON array in a `TEXT` column, so values
//! containing commas or quotes still round-trip unchanged.

use sea_orm::sea_query::Value;
use sea_orm::{DbBackend, QueryResult};

use crate::domain::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStorage {
    /// `TEXT[]`, bound and read as `Vec<String>`
    NativeArray,
    /// `TEXT` holding a JSON array, `[]` when empty
    JsonText,
}

impl TagStorage {
    pub fn for_backend(backend: DbBackend) -> Self {
        match backend {
            DbBackend::Postgres => TagStorage::NativeArray,
            _ => TagStorage::JsonText,
        }
    }

    /// Column definition used in `CREATE TABLE`
    pub fn column_ddl(self) -> &'static str {
        match self {
            TagStorage::NativeArray => "tags TEXT[] NOT NULL DEFAULT '{}'",
            TagStorage::JsonText => "tags TEXT NOT NULL DEFAULT '[]'",
        }
    }

    pub fn encode(self, tags: &[String]) -> Result<Value, DomainError> {
        match self {
            TagStorage::NativeArray => Ok(Value::from(tags.to_vec())),
            TagStorage::JsonText => Ok(Value::from(encode_json(tags)?)),
        }
    }

    /// Read the `tags` column of `res`. NULL (rows written by other tools)
    /// reads back as an empty list.
    pub fn decode(self, res: &QueryResult, id: &str) -> Result<Vec<String>, DomainError> {
        let context = format!("malformed tags for {}", id);
        match self {
            TagStorage::NativeArray => {
                let tags: Option<Vec<String>> = res
                    .try_get("", "tags")
                    .map_err(|e| DomainError::storage(&context, e))?;
                Ok(tags.unwrap_or_default())
            }
            TagStorage::JsonText => {
                let raw: Option<String> = res
                    .try_get("", "tags")
                    .map_err(|e| DomainError::storage(&context, e))?;
                decode_json(raw.as_deref()).map_err(|e| DomainError::storage(&context, e))
            }
        }
    }
}

pub fn encode_json(tags: &[String]) -> Result<String, DomainError> {
    serde_json::to_string(tags).map_err(|e| DomainError::storage("failed to encode tags", e))
}

pub fn decode_json(raw: Option<&str>) -> Result<Vec<String>, serde_json::Error> {
    match raw {
        None => Ok(Vec::new()),
        Some(s) => serde_json::from_str(s),
    }
}
