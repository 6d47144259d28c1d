// ABOUTME: List and item storage layer using SQLite
// ABOUTME: Parameterized CRUD statements plus the transactional delete-list cascade

use async_trait::async_trait;
use chrono::Utc;
use listkeep_core::{Item, ItemUpdateInput, List};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::{ListStore, StorageError, StorageResult};

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a List
    fn row_to_list(&self, row: &SqliteRow) -> StorageResult<List> {
        Ok(List {
            id: row.try_get("id").map_err(StorageError::Sqlx)?,
            name: row.try_get("name").map_err(StorageError::Sqlx)?,
            created_at: row.try_get("createdAt").map_err(StorageError::Sqlx)?,
            updated_at: row.try_get("updatedAt").map_err(StorageError::Sqlx)?,
        })
    }

    /// Convert a database row to an Item
    fn row_to_item(&self, row: &SqliteRow) -> StorageResult<Item> {
        let is_hidden: i64 = row.try_get("isHidden").map_err(StorageError::Sqlx)?;

        Ok(Item {
            id: row.try_get("id").map_err(StorageError::Sqlx)?,
            text: row.try_get("text").map_err(StorageError::Sqlx)?,
            list_id: row.try_get("listId").map_err(StorageError::Sqlx)?,
            is_hidden: is_hidden != 0,
            created_at: row.try_get("createdAt").map_err(StorageError::Sqlx)?,
            updated_at: row.try_get("updatedAt").map_err(StorageError::Sqlx)?,
        })
    }
}

#[async_trait]
impl ListStore for SqliteStore {
    async fn list_lists(&self) -> StorageResult<Vec<List>> {
        debug!("Fetching lists");

        let rows = sqlx::query("SELECT * FROM lists ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        rows.iter().map(|row| self.row_to_list(row)).collect()
    }

    async fn get_list(&self, id: i64) -> StorageResult<Option<List>> {
        debug!("Fetching list: {}", id);

        let row = sqlx::query("SELECT * FROM lists WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        match row {
            Some(r) => Ok(Some(self.row_to_list(&r)?)),
            None => Ok(None),
        }
    }

    async fn create_list(&self, name: &str) -> StorageResult<List> {
        let now = Utc::now();

        debug!("Creating list: {}", name);

        let id = sqlx::query("INSERT INTO lists (name, createdAt, updatedAt) VALUES (?, ?, ?)")
            .bind(name)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?
            .last_insert_rowid();

        self.get_list(id).await?.ok_or_else(|| {
            StorageError::Database(format!("List {} vanished after insert", id))
        })
    }

    async fn update_list(&self, id: i64, name: &str) -> StorageResult<Option<List>> {
        debug!("Updating list: {}", id);

        let changed = sqlx::query("UPDATE lists SET name = ?, updatedAt = ? WHERE id = ?")
            .bind(name)
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?
            .rows_affected();

        if changed == 0 {
            return Ok(None);
        }

        self.get_list(id).await
    }

    async fn delete_list_reassigning(
        &self,
        id: i64,
        fallback_list_id: i64,
    ) -> StorageResult<Option<u64>> {
        debug!("Deleting list {} (items move to {})", id, fallback_list_id);

        let mut tx = self.pool.begin().await.map_err(StorageError::Sqlx)?;

        // Write first: the transaction takes the write lock up front.
        // Reassignment lands before the delete so no item ever points at a missing list.
        let reassigned = sqlx::query("UPDATE items SET listId = ?, updatedAt = ? WHERE listId = ?")
            .bind(fallback_list_id)
            .bind(Utc::now())
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM lists WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?
            .rows_affected();

        if deleted == 0 {
            tx.rollback().await.map_err(StorageError::Sqlx)?;
            return Ok(None);
        }

        tx.commit().await.map_err(StorageError::Sqlx)?;

        debug!("Deleted list {} and reassigned {} items", id, reassigned);
        Ok(Some(reassigned))
    }

    async fn list_items(&self, list_id: Option<i64>) -> StorageResult<Vec<Item>> {
        debug!("Fetching items (list_id: {:?})", list_id);

        let rows = match list_id {
            Some(list_id) => {
                sqlx::query("SELECT * FROM items WHERE listId = ? ORDER BY id DESC")
                    .bind(list_id)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                sqlx::query("SELECT * FROM items ORDER BY id DESC")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(StorageError::Sqlx)?;

        rows.iter().map(|row| self.row_to_item(row)).collect()
    }

    async fn get_item(&self, id: i64) -> StorageResult<Option<Item>> {
        debug!("Fetching item: {}", id);

        let row = sqlx::query("SELECT * FROM items WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        match row {
            Some(r) => Ok(Some(self.row_to_item(&r)?)),
            None => Ok(None),
        }
    }

    async fn create_item(&self, text: &str, list_id: i64, is_hidden: bool) -> StorageResult<Item> {
        let now = Utc::now();

        debug!("Creating item in list {}", list_id);

        let id = sqlx::query(
            r#"
            INSERT INTO items (text, listId, isHidden, createdAt, updatedAt)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(text)
        .bind(list_id)
        .bind(i64::from(is_hidden))
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?
        .last_insert_rowid();

        self.get_item(id).await?.ok_or_else(|| {
            StorageError::Database(format!("Item {} vanished after insert", id))
        })
    }

    async fn update_item(
        &self,
        id: i64,
        changes: &ItemUpdateInput,
    ) -> StorageResult<Option<Item>> {
        debug!("Updating item: {}", id);

        // Build update query dynamically based on provided fields
        let mut query_parts = vec!["text = ?", "updatedAt = ?"];

        if changes.list_id.is_some() {
            query_parts.push("listId = ?");
        }
        if changes.is_hidden.is_some() {
            query_parts.push("isHidden = ?");
        }

        let query_str = format!("UPDATE items SET {} WHERE id = ?", query_parts.join(", "));
        let mut query = sqlx::query(&query_str)
            .bind(&changes.text)
            .bind(Utc::now());

        // Bind parameters in the same order
        if let Some(list_id) = changes.list_id {
            query = query.bind(list_id);
        }
        if let Some(is_hidden) = changes.is_hidden {
            query = query.bind(i64::from(is_hidden));
        }

        let changed = query
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?
            .rows_affected();

        if changed == 0 {
            return Ok(None);
        }

        self.get_item(id).await
    }

    async fn delete_item(&self, id: i64) -> StorageResult<bool> {
        debug!("Deleting item: {}", id);

        let deleted = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?
            .rows_affected();

        Ok(deleted > 0)
    }
}
