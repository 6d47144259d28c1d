// ABOUTME: List service enforcing list/item referential rules
// ABOUTME: Default list protection, item list defaulting, and cascade reassignment on list delete

use std::sync::Arc;

use listkeep_core::{
    require_text, DeleteConfirmation, Item, ItemCreateInput, ItemDefaults, ItemUpdateInput,
    List, ListCreateInput, ListUpdateInput, DEFAULT_LIST_ID,
};
use listkeep_storage::{ListStore, StorageError};
use tracing::{debug, info, warn};

use crate::error::{ServiceError, ServiceResult};

/// Entry point for every list and item operation.
///
/// Holds an injected store handle, so the same rules apply whatever backs it.
#[derive(Clone)]
pub struct ListService {
    store: Arc<dyn ListStore>,
    defaults: ItemDefaults,
}

impl ListService {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self::with_defaults(store, ItemDefaults::default())
    }

    pub fn with_defaults(store: Arc<dyn ListStore>, defaults: ItemDefaults) -> Self {
        Self { store, defaults }
    }

    pub fn defaults(&self) -> ItemDefaults {
        self.defaults
    }

    pub async fn list_lists(&self) -> ServiceResult<Vec<List>> {
        Ok(self.store.list_lists().await?)
    }

    pub async fn get_list(&self, id: i64) -> ServiceResult<List> {
        self.store
            .get_list(id)
            .await?
            .ok_or_else(ServiceError::list_not_found)
    }

    pub async fn create_list(&self, input: ListCreateInput) -> ServiceResult<List> {
        let name = require_text("Name", &input.name)?;
        Ok(self.store.create_list(&name).await?)
    }

    pub async fn update_list(&self, id: i64, input: ListUpdateInput) -> ServiceResult<List> {
        let name = require_text("Name", &input.name)?;
        self.store
            .update_list(id, &name)
            .await?
            .ok_or_else(ServiceError::list_not_found)
    }

    /// Delete a list, moving its items to the default list first.
    ///
    /// The default list itself is refused before the store is touched.
    pub async fn delete_list(&self, id: i64) -> ServiceResult<DeleteConfirmation> {
        if id == DEFAULT_LIST_ID {
            warn!("Refused to delete the default list");
            return Err(ServiceError::Forbidden(
                "Cannot delete the default list".to_string(),
            ));
        }

        let reassigned = self
            .store
            .delete_list_reassigning(id, DEFAULT_LIST_ID)
            .await?
            .ok_or_else(ServiceError::list_not_found)?;

        info!(
            "Deleted list {} and moved {} item(s) to the default list",
            id, reassigned
        );
        Ok(DeleteConfirmation::list_deleted(reassigned))
    }

    pub async fn list_items(&self, list_id: Option<i64>) -> ServiceResult<Vec<Item>> {
        Ok(self.store.list_items(list_id).await?)
    }

    pub async fn get_item(&self, id: i64) -> ServiceResult<Item> {
        self.store
            .get_item(id)
            .await?
            .ok_or_else(ServiceError::item_not_found)
    }

    pub async fn create_item(&self, input: ItemCreateInput) -> ServiceResult<Item> {
        let text = require_text("Text", &input.text)?;
        let list_id = input.list_id.unwrap_or(self.defaults.list_id);
        let is_hidden = input.is_hidden.unwrap_or(self.defaults.is_hidden);

        self.ensure_list_exists(list_id).await?;

        self.store
            .create_item(&text, list_id, is_hidden)
            .await
            .map_err(|err| Self::unknown_list_or_store(err, list_id))
    }

    /// Update an item; `text` is always rewritten, `list_id`/`is_hidden` only when given.
    /// The returned record is re-read from the store.
    ///
    /// A missing item is reported before an unknown target list: the list
    /// reference is checked by the store's foreign key on the row it updates.
    pub async fn update_item(&self, id: i64, input: ItemUpdateInput) -> ServiceResult<Item> {
        let text = require_text("Text", &input.text)?;

        let changes = ItemUpdateInput { text, ..input };
        self.store
            .update_item(id, &changes)
            .await
            .map_err(|err| match changes.list_id {
                Some(list_id) => Self::unknown_list_or_store(err, list_id),
                None => err.into(),
            })?
            .ok_or_else(ServiceError::item_not_found)
    }

    pub async fn delete_item(&self, id: i64) -> ServiceResult<DeleteConfirmation> {
        if !self.store.delete_item(id).await? {
            return Err(ServiceError::item_not_found());
        }

        debug!("Deleted item {}", id);
        Ok(DeleteConfirmation::item_deleted())
    }

    async fn ensure_list_exists(&self, list_id: i64) -> ServiceResult<()> {
        match self.store.get_list(list_id).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::unknown_list(list_id)),
        }
    }

    /// A list removed after the existence check surfaces as a foreign key violation
    fn unknown_list_or_store(err: StorageError, list_id: i64) -> ServiceError {
        if err.is_foreign_key_violation() {
            warn!("List {} vanished before the item write", list_id);
            ServiceError::unknown_list(list_id)
        } else {
            err.into()
        }
    }
}
