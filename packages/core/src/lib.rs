// ABOUTME: Core types, defaults, and validation for Listkeep
// ABOUTME: Foundational package shared by the storage, service, API, and client crates

pub mod constants;
pub mod types;
pub mod validation;

// Re-export main types
pub use types::{
    DeleteConfirmation, Item, ItemCreateInput, ItemDefaults, ItemUpdateInput, List,
    ListCreateInput, ListUpdateInput,
};

// Re-export constants
pub use constants::{DEFAULT_LIST_ID, DEFAULT_LIST_NAME};

// Re-export validation
pub use validation::{require_text, ValidationError};
