use axum::Json;
use utoipa::OpenApi;

use crate::api;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::items::list_items,
        api::items::get_item,
        api::items::create_item,
        api::items::update_item,
        api::items::delete_item,
    ),
    components(schemas(
        api::items::ItemMessage,
        api::items::ItemPayload,
        api::items::ListItemsResponse,
        api::items::ItemResponse,
        api::error::ErrorBody,
    )),
    tags(
        (name = "catalog", description = "Catalog item API")
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI document for tooling
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
