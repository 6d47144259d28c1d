// ABOUTME: HTTP request handlers for item operations
// ABOUTME: Handles item CRUD with optional list filtering

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use listkeep_core::{DeleteConfirmation, Item, ItemCreateInput, ItemUpdateInput};
use listkeep_lists::ListService;
use serde::{Deserialize, Deserializer};
use tracing::info;

use crate::error::ApiResult;

#[derive(Debug, Default, Deserialize)]
pub struct ListItemsQuery {
    #[serde(rename = "listId", default, deserialize_with = "empty_as_none")]
    pub list_id: Option<i64>,
}

/// `?listId=` with no value filters nothing, same as leaving it out
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// List items, newest first, optionally for one list
pub async fn list_items(
    State(service): State<ListService>,
    params: Result<Query<ListItemsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Item>>> {
    let Query(params) = params?;
    info!("Listing items (list_id: {:?})", params.list_id);

    Ok(Json(service.list_items(params.list_id).await?))
}

/// Get a single item by ID
pub async fn get_item(
    State(service): State<ListService>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Item>> {
    let Path(id) = id?;
    info!("Getting item: {}", id);

    Ok(Json(service.get_item(id).await?))
}

/// Create a new item
pub async fn create_item(
    State(service): State<ListService>,
    payload: Result<Json<ItemCreateInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Item>)> {
    let Json(input) = payload?;
    info!("Creating item (list_id: {:?})", input.list_id);

    let item = service.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Update an item and return the stored row
pub async fn update_item(
    State(service): State<ListService>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ItemUpdateInput>, JsonRejection>,
) -> ApiResult<Json<Item>> {
    let Path(id) = id?;
    let Json(input) = payload?;
    info!("Updating item: {}", id);

    Ok(Json(service.update_item(id, input).await?))
}

/// Delete an item
pub async fn delete_item(
    State(service): State<ListService>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DeleteConfirmation>> {
    let Path(id) = id?;
    info!("Deleting item: {}", id);

    Ok(Json(service.delete_item(id).await?))
}
