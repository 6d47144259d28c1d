// ABOUTME: HTTP request handlers for list operations
// ABOUTME: Handles list CRUD, including the guarded delete that reassigns items

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use listkeep_core::{DeleteConfirmation, List, ListCreateInput, ListUpdateInput};
use listkeep_lists::ListService;
use tracing::info;

use crate::error::ApiResult;

/// List all lists
pub async fn list_lists(State(service): State<ListService>) -> ApiResult<Json<Vec<List>>> {
    info!("Listing lists");

    Ok(Json(service.list_lists().await?))
}

/// Get a single list by ID
pub async fn get_list(
    State(service): State<ListService>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<List>> {
    let Path(id) = id?;
    info!("Getting list: {}", id);

    Ok(Json(service.get_list(id).await?))
}

/// Create a new list
pub async fn create_list(
    State(service): State<ListService>,
    payload: Result<Json<ListCreateInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<List>)> {
    let Json(input) = payload?;
    info!("Creating list: {}", input.name);

    let list = service.create_list(input).await?;
    Ok((StatusCode::CREATED, Json(list)))
}

/// Rename a list
pub async fn update_list(
    State(service): State<ListService>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ListUpdateInput>, JsonRejection>,
) -> ApiResult<Json<List>> {
    let Path(id) = id?;
    let Json(input) = payload?;
    info!("Updating list: {}", id);

    Ok(Json(service.update_list(id, input).await?))
}

/// Delete a list, moving its items to the default list
pub async fn delete_list(
    State(service): State<ListService>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DeleteConfirmation>> {
    let Path(id) = id?;
    info!("Deleting list: {}", id);

    Ok(Json(service.delete_list(id).await?))
}
