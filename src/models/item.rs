use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use sea_orm::sea_query::Iden;
use serde::{Deserialize, Serialize};

/// One catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub updated_at: DateTime<Utc>,
    /// Base64 payload, stored and served as-is
    pub content_b64: String,
    pub cover_image: String,
}

/// Raw row as read from any catalog table. Tags are decoded separately since
/// their column type depends on the backend.
#[derive(Debug, Clone, FromQueryResult)]
pub struct ItemRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub content_b64: String,
    pub cover_image: String,
}

impl ItemRow {
    pub fn into_item(self, tags: Vec<String>) -> Item {
        Item {
            id: self.id,
            title: self.title,
            description: self.description,
            category: self.category,
            tags,
            updated_at: self.updated_at,
            content_b64: self.content_b64,
            cover_image: self.cover_image,
        }
    }
}

/// Column identifiers shared by every catalog table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemColumn {
    Id,
    Title,
    Description,
    Category,
    Tags,
    UpdatedAt,
    ContentB64,
    CoverImage,
}

impl ItemColumn {
    /// Column order used for every SELECT and INSERT
    pub const ALL: [ItemColumn; 8] = [
        ItemColumn::Id,
        ItemColumn::Title,
        ItemColumn::Description,
        ItemColumn::Category,
        ItemColumn::Tags,
        ItemColumn::UpdatedAt,
        ItemColumn::ContentB64,
        ItemColumn::CoverImage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemColumn::Id => "id",
            ItemColumn::Title => "title",
            ItemColumn::Description => "description",
            ItemColumn::Category => "category",
            ItemColumn::Tags => "tags",
            ItemColumn::UpdatedAt => "updated_at",
            ItemColumn::ContentB64 => "content_b64",
            ItemColumn::CoverImage => "cover_image",
        }
    }
}

impl Iden for ItemColumn {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        let _ = s.write_str(self.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn row() -> ItemRow {
        ItemRow {
            id: "acme-001".to_string(),
            title: "Servicio de Documentos".to_string(),
            description: Some("Plantilla base".to_string()),
            category: Some("backend".to_string()),
            updated_at: Utc.with_ymd_and_hms(2026, 2, 22, 10, 30, 0).unwrap(),
            content_b64: "Y29udGVudA==".to_string(),
            cover_image: "https://example.com/cover.png".to_string(),
        }
    }

    #[test]
    fn row_maps_every_field() {
        let tags = vec!["go".to_string(), "grpc".to_string(), "postgres".to_string()];
        let item = row().into_item(tags);
        assert_eq!(item.id, "acme-001");
        assert_eq!(item.title, "Servicio de Documentos");
        assert_eq!(item.description.as_deref(), Some("Plantilla base"));
        assert_eq!(item.category.as_deref(), Some("backend"));
        assert_eq!(item.tags, vec!["go", "grpc", "postgres"]);
        assert_eq!(
            item.updated_at,
            Utc.with_ymd_and_hms(2026, 2, 22, 10, 30, 0).unwrap()
        );
        assert_eq!(item.content_b64, "Y29udGVudA==");
        assert_eq!(item.cover_image, "https://example.com/cover.png");
    }

    #[test]
    fn column_names_match_schema() {
        let names: Vec<_> = ItemColumn::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "id",
                "title",
                "description",
                "category",
                "tags",
                "updated_at",
                "content_b64",
                "cover_image"
            ]
        );
    }
}
