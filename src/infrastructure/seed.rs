use chrono::{DateTime, Utc};

use crate::domain::{DomainError, ItemRepository};
use crate::models::Item;

/// Bootstrap items inserted into an empty catalog
pub fn bootstrap_items(now: DateTime<Utc>) -> Vec<Item> {
    vec![
        Item {
            id: "getting-started-keptn".to_owned(),
            title: "Getting Started with Keptn".to_owned(),
            description: Some(
                "A comprehensive guide to get started with Keptn for automated deployment and operations"
                    .to_owned(),
            ),
            category: Some("DevOps".to_owned()),
            tags: vec![
                "keptn".to_owned(),
                "ci-cd".to_owned(),
                "automation".to_owned(),
                "kubernetes".to_owned(),
            ],
            updated_at: now,
            content_b64: "IyBHZXR0aW5nIFN0YXJ0ZWQgd2l0aCBLZXB0bg==".to_owned(),
            cover_image: "https://images.unsplash.com/photo-1667372393119-3d4c48d07fc9".to_owned(),
        },
        Item {
            id: "youtube-api-integration".to_owned(),
            title: "YouTube Data API v3 Integration".to_owned(),
            description: Some(
                "Complete guide to integrate YouTube Data API with practical examples".to_owned(),
            ),
            category: Some("APIs".to_owned()),
            tags: vec![
                "youtube".to_owned(),
                "api".to_owned(),
                "rest".to_owned(),
                "video".to_owned(),
            ],
            updated_at: now,
            content_b64: "IyBZb3VUdWJlIERhdGEgQVBJIHYzIEludGVncmF0aW9u".to_owned(),
            cover_image: "https://images.unsplash.com/photo-1611162616475-46b635cb6868".to_owned(),
        },
    ]
}

/// Seed one catalog. Failures are reported to the caller, who decides whether
/// they are fatal.
pub async fn seed_demo_data(
    repo: &dyn ItemRepository,
    now: DateTime<Utc>,
) -> Result<usize, DomainError> {
    let inserted = repo.seed_if_empty(bootstrap_items(now)).await?;
    if inserted > 0 {
        tracing::info!(kind = %repo.kind(), inserted, "Seeded bootstrap data");
    } else {
        tracing::info!(kind = %repo.kind(), "Existing data found, seed skipped");
    }
    Ok(inserted)
}
