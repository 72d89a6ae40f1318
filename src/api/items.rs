//! Catalog item handlers
//!
//! Every catalog kind is served by the same handlers; the kind comes from the
//! `CatalogService` the router was built with.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::error_response;
use crate::domain::DomainError;
use crate::models::Item;
use crate::services::CatalogService;

pub const MAX_ID_LEN: usize = 255;
pub const MAX_TITLE_LEN: usize = 500;
pub const MAX_CATEGORY_LEN: usize = 100;
pub const MAX_COVER_IMAGE_LEN: usize = 1000;

/// Item as it travels on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemMessage {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    /// RFC 3339, UTC
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
    pub content_b64: String,
    pub cover_image: String,
}

impl From<Item> for ItemMessage {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            category: item.category,
            tags: item.tags,
            updated_at: item.updated_at,
            content_b64: item.content_b64,
            cover_image: item.cover_image,
        }
    }
}

/// Request body for create and update.
/// On update the id comes from the path; a body id, if sent, must match it.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ItemPayload {
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Defaults to the time the request is handled
    #[schema(value_type = Option<String>, format = DateTime)]
    pub updated_at: Option<DateTime<Utc>>,
    pub content_b64: String,
    pub cover_image: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListItemsResponse {
    pub items: Vec<ItemMessage>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub item: ItemMessage,
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.chars().count() > max {
        return Err(DomainError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

pub fn validate_id(id: &str) -> Result<(), DomainError> {
    if id.trim().is_empty() {
        return Err(DomainError::Validation("id is required".to_string()));
    }
    check_len("id", id, MAX_ID_LEN)
}

impl ItemPayload {
    /// Validate the shape and build the record to store under `id`.
    /// `now` stamps records whose payload carries no `updated_at`.
    pub fn into_item(self, id: String, now: DateTime<Utc>) -> Result<Item, DomainError> {
        validate_id(&id)?;
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation("title is required".to_string()));
        }
        check_len("title", &self.title, MAX_TITLE_LEN)?;
        if let Some(category) = &self.category {
            check_len("category", category, MAX_CATEGORY_LEN)?;
        }
        check_len("cover_image", &self.cover_image, MAX_COVER_IMAGE_LEN)?;

        let updated_at = self.updated_at.unwrap_or(now);

        Ok(Item {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            tags: self.tags,
            updated_at,
            content_b64: self.content_b64,
            cover_image: self.cover_image,
        })
    }
}

fn json_error(rejection: JsonRejection) -> DomainError {
    DomainError::Validation(rejection.body_text())
}

/// Routes for one catalog, mounted under `/{kind}`
pub fn catalog_router(service: CatalogService) -> Router {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route(
            "/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(service)
}

#[utoipa::path(
    get,
    path = "/api/{kind}",
    params(("kind" = String, Path, description = "Catalog kind: acmes or goldens")),
    responses(
        (status = 200, description = "All items, most recently updated first", body = ListItemsResponse),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_items(State(service): State<CatalogService>) -> Response {
    let kind = service.kind();
    let op = kind.op_name("GetAll", "s");
    tracing::info!(op = %op, "{} called", op);

    match service.list_all().await {
        Ok(items) => {
            let items = items.into_iter().map(ItemMessage::from).collect();
            (StatusCode::OK, Json(ListItemsResponse { items })).into_response()
        }
        Err(e) => error_response(kind, &op, &format!("failed to get {}", kind.table), e),
    }
}

#[utoipa::path(
    get,
    path = "/api/{kind}/{id}",
    params(
        ("kind" = String, Path, description = "Catalog kind: acmes or goldens"),
        ("id" = String, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "The item", body = ItemResponse),
        (status = 404, description = "No item with that id", body = ErrorBody)
    )
)]
pub async fn get_item(State(service): State<CatalogService>, Path(id): Path<String>) -> Response {
    let kind = service.kind();
    let op = kind.op_name("Get", "ById");
    tracing::info!(op = %op, id = %id, "{} called with id: {}", op, id);
    let failure = format!("failed to get {}", kind.singular);

    if let Err(e) = validate_id(&id) {
        return error_response(kind, &op, &failure, e);
    }

    match service.get_by_id(&id).await {
        Ok(item) => (StatusCode::OK, Json(ItemResponse { item: item.into() })).into_response(),
        Err(e) => error_response(kind, &op, &failure, e),
    }
}

#[utoipa::path(
    post,
    path = "/api/{kind}",
    params(("kind" = String, Path, description = "Catalog kind: acmes or goldens")),
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 400, description = "Malformed request", body = ErrorBody),
        (status = 409, description = "Id already taken", body = ErrorBody)
    )
)]
pub async fn create_item(
    State(service): State<CatalogService>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Response {
    let kind = service.kind();
    let op = kind.op_name("Create", "");
    let failure = format!("failed to create {}", kind.singular);

    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return error_response(kind, &op, &failure, json_error(rejection)),
    };

    let id = payload.id.clone().unwrap_or_default();
    tracing::info!(op = %op, id = %id, "{} called with id: {}", op, id);

    let item = match payload.into_item(id, Utc::now()) {
        Ok(item) => item,
        Err(e) => return error_response(kind, &op, &failure, e),
    };

    match service.create(item).await {
        Ok(item) => (StatusCode::CREATED, Json(ItemResponse { item: item.into() })).into_response(),
        Err(e) => error_response(kind, &op, &failure, e),
    }
}

#[utoipa::path(
    put,
    path = "/api/{kind}/{id}",
    params(
        ("kind" = String, Path, description = "Catalog kind: acmes or goldens"),
        ("id" = String, Path, description = "Item id")
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item replaced", body = ItemResponse),
        (status = 400, description = "Malformed request", body = ErrorBody),
        (status = 404, description = "No item with that id", body = ErrorBody)
    )
)]
pub async fn update_item(
    State(service): State<CatalogService>,
    Path(id): Path<String>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Response {
    let kind = service.kind();
    let op = kind.op_name("Update", "");
    tracing::info!(op = %op, id = %id, "{} called with id: {}", op, id);
    let failure = format!("failed to update {}", kind.singular);

    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return error_response(kind, &op, &failure, json_error(rejection)),
    };

    if let Some(body_id) = &payload.id
        && body_id != &id
    {
        let e = DomainError::Validation(format!(
            "body id '{}' does not match path id '{}'",
            body_id, id
        ));
        return error_response(kind, &op, &failure, e);
    }

    let item = match payload.into_item(id, Utc::now()) {
        Ok(item) => item,
        Err(e) => return error_response(kind, &op, &failure, e),
    };

    match service.update(item).await {
        Ok(item) => (StatusCode::OK, Json(ItemResponse { item: item.into() })).into_response(),
        Err(e) => error_response(kind, &op, &failure, e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/{kind}/{id}",
    params(
        ("kind" = String, Path, description = "Catalog kind: acmes or goldens"),
        ("id" = String, Path, description = "Item id")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "No item with that id", body = ErrorBody)
    )
)]
pub async fn delete_item(State(service): State<CatalogService>, Path(id): Path<String>) -> Response {
    let kind = service.kind();
    let op = kind.op_name("Delete", "");
    tracing::info!(op = %op, id = %id, "{} called with id: {}", op, id);
    let failure = format!("failed to delete {}", kind.singular);

    if let Err(e) = validate_id(&id) {
        return error_response(kind, &op, &failure, e);
    }

    match service.delete(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(kind, &op, &failure, e),
    }
}
