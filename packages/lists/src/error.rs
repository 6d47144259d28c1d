// ABOUTME: Error taxonomy of the list service
// ABOUTME: Validation, not-found, forbidden, and pass-through storage failures

use listkeep_core::ValidationError;
use listkeep_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required text field was blank or a referenced list does not exist
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// The operation would break a protected record (the default list)
    #[error("{0}")]
    Forbidden(String),

    #[error(transparent)]
    Store(#[from] StorageError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl ServiceError {
    pub fn list_not_found() -> Self {
        Self::NotFound("List not found".to_string())
    }

    pub fn item_not_found() -> Self {
        Self::NotFound("Item not found".to_string())
    }

    pub fn unknown_list(list_id: i64) -> Self {
        Self::Validation(format!("List {} does not exist", list_id))
    }
}
