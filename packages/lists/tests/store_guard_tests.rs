// ABOUTME: Service tests against a mocked ListStore
// ABOUTME: Verifies which store calls each guard allows and how store failures surface

use std::sync::Arc;

use async_trait::async_trait;
use listkeep_core::{Item, ItemCreateInput, ItemUpdateInput, List, ListCreateInput};
use listkeep_lists::{ListService, ServiceError};
use listkeep_storage::{ListStore, StorageError, StorageResult};
use mockall::mock;
use mockall::predicate::eq;

mock! {
    pub Store {}

    #[async_trait]
    impl ListStore for Store {
        async fn list_lists(&self) -> StorageResult<Vec<List>>;
        async fn get_list(&self, id: i64) -> StorageResult<Option<List>>;
        async fn create_list(&self, name: &str) -> StorageResult<List>;
        async fn update_list(&self, id: i64, name: &str) -> StorageResult<Option<List>>;
        async fn delete_list_reassigning(
            &self,
            id: i64,
            fallback_list_id: i64,
        ) -> StorageResult<Option<u64>>;
        async fn list_items(&self, list_id: Option<i64>) -> StorageResult<Vec<Item>>;
        async fn get_item(&self, id: i64) -> StorageResult<Option<Item>>;
        async fn create_item(&self, text: &str, list_id: i64, is_hidden: bool) -> StorageResult<Item>;
        async fn update_item(&self, id: i64, changes: &ItemUpdateInput)
            -> StorageResult<Option<Item>>;
        async fn delete_item(&self, id: i64) -> StorageResult<bool>;
    }
}

#[tokio::test]
async fn test_delete_default_list_never_reaches_store() {
    // No expectations: any store call would panic
    let store = MockStore::new();
    let service = ListService::new(Arc::new(store));

    let err = service.delete_list(1).await.unwrap_err();
    assert!(matches!(err, ServiceError::Forbidden(_)));
    assert_eq!(err.to_string(), "Cannot delete the default list");
}

#[tokio::test]
async fn test_blank_list_name_never_reaches_store() {
    let store = MockStore::new();
    let service = ListService::new(Arc::new(store));

    let err = service
        .create_list(ListCreateInput {
            name: "\t ".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn test_delete_list_reassigns_to_default_list() {
    let mut store = MockStore::new();
    store
        .expect_delete_list_reassigning()
        .with(eq(7), eq(1))
        .times(1)
        .returning(|_, _| Ok(Some(3)));
    let service = ListService::new(Arc::new(store));

    let confirmation = service.delete_list(7).await.unwrap();
    assert_eq!(confirmation.reassigned_items, Some(3));
    assert_eq!(confirmation.message, "List deleted successfully");
}

#[tokio::test]
async fn test_create_item_stops_when_list_missing() {
    let mut store = MockStore::new();
    store
        .expect_get_list()
        .with(eq(9))
        .times(1)
        .returning(|_| Ok(None));
    store.expect_create_item().never();
    let service = ListService::new(Arc::new(store));

    let err = service
        .create_item(ItemCreateInput {
            text: "x".to_string(),
            list_id: Some(9),
            is_hidden: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn test_update_item_without_list_skips_list_lookup() {
    let mut store = MockStore::new();
    store.expect_get_list().never();
    store
        .expect_update_item()
        .times(1)
        .returning(|_, changes| {
            assert_eq!(changes.text, "trimmed");
            assert_eq!(changes.list_id, None);
            Ok(None)
        });
    let service = ListService::new(Arc::new(store));

    let err = service
        .update_item(
            3,
            ItemUpdateInput {
                text: "  trimmed  ".to_string(),
                list_id: None,
                is_hidden: Some(false),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn test_store_errors_pass_through_verbatim() {
    let mut store = MockStore::new();
    store
        .expect_list_lists()
        .returning(|| Err(StorageError::Database("disk I/O error".to_string())));
    let service = ListService::new(Arc::new(store));

    let err = service.list_lists().await.unwrap_err();
    assert!(matches!(err, ServiceError::Store(_)));
    assert_eq!(err.to_string(), "Database error: disk I/O error");
}

#[tokio::test]
async fn test_update_item_with_list_lets_store_decide_missing_item() {
    let mut store = MockStore::new();
    store.expect_get_list().never();
    store
        .expect_update_item()
        .with(eq(3), mockall::predicate::always())
        .times(1)
        .returning(|_, _| Ok(None));
    let service = ListService::new(Arc::new(store));

    let err = service
        .update_item(
            3,
            ItemUpdateInput {
                text: "moved".to_string(),
                list_id: Some(42),
                is_hidden: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}
