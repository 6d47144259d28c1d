// ABOUTME: Relational store for lists and items
// ABOUTME: SQLite pool setup, schema bootstrap, and the ListStore trait with its SQLite implementation

use async_trait::async_trait;
use listkeep_core::{Item, ItemUpdateInput, List};
use thiserror::Error;

pub mod db;
pub mod sqlite;

pub use db::Database;
pub use sqlite::SqliteStore;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Database(String),
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl StorageError {
    /// True when a write referenced a list row that does not exist
    pub fn is_foreign_key_violation(&self) -> bool {
        match self {
            StorageError::Sqlx(sqlx::Error::Database(db_err)) => db_err.is_foreign_key_violation(),
            _ => false,
        }
    }
}

/// Persistence operations the list service needs.
///
/// Lookups and mutations that target a single row report a missing row as
/// `None`/`false` rather than an error; callers decide what absence means.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// All lists, ascending by id
    async fn list_lists(&self) -> StorageResult<Vec<List>>;
    async fn get_list(&self, id: i64) -> StorageResult<Option<List>>;
    async fn create_list(&self, name: &str) -> StorageResult<List>;
    async fn update_list(&self, id: i64, name: &str) -> StorageResult<Option<List>>;

    /// Move every item of list `id` to `fallback_list_id`, then delete list `id`,
    /// as one atomic unit. Returns the number of moved items, or `None` if the
    /// list did not exist (nothing is written in that case).
    async fn delete_list_reassigning(
        &self,
        id: i64,
        fallback_list_id: i64,
    ) -> StorageResult<Option<u64>>;

    /// Items, newest id first, optionally restricted to one list
    async fn list_items(&self, list_id: Option<i64>) -> StorageResult<Vec<Item>>;
    async fn get_item(&self, id: i64) -> StorageResult<Option<Item>>;
    async fn create_item(&self, text: &str, list_id: i64, is_hidden: bool) -> StorageResult<Item>;

    /// Always writes `text`; writes `list_id`/`is_hidden` only when set.
    async fn update_item(&self, id: i64, changes: &ItemUpdateInput)
        -> StorageResult<Option<Item>>;
    async fn delete_item(&self, id: i64) -> StorageResult<bool>;
}
