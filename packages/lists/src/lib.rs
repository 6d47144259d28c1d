// ABOUTME: List/item domain service for Listkeep
// ABOUTME: Validates input and guards the default list and delete-list cascade on top of a ListStore

pub mod error;
pub mod service;

// Re-export main types
pub use error::{ServiceError, ServiceResult};
pub use service::ListService;
