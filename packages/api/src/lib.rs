// ABOUTME: HTTP API layer for Listkeep providing REST endpoints and routing
// ABOUTME: Maps /api/lists and /api/items onto the list service and encodes JSON responses

use axum::{routing::get, Router};
use listkeep_lists::ListService;

pub mod error;
pub mod health;
pub mod items_handlers;
pub mod lists_handlers;

pub use error::{ApiResult, AppError};

/// Creates the lists API router
pub fn create_lists_router() -> Router<ListService> {
    Router::new()
        .route(
            "/api/lists",
            get(lists_handlers::list_lists).post(lists_handlers::create_list),
        )
        .route(
            "/api/lists/{id}",
            get(lists_handlers::get_list)
                .put(lists_handlers::update_list)
                .delete(lists_handlers::delete_list),
        )
}

/// Creates the items API router
pub fn create_items_router() -> Router<ListService> {
    Router::new()
        .route(
            "/api/items",
            get(items_handlers::list_items).post(items_handlers::create_item),
        )
        .route(
            "/api/items/{id}",
            get(items_handlers::get_item)
                .put(items_handlers::update_item)
                .delete(items_handlers::delete_item),
        )
}

/// Full API surface with the service as shared state
pub fn create_router(service: ListService) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .merge(create_lists_router())
        .merge(create_items_router())
        .with_state(service)
}
