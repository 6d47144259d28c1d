// ABOUTME: Integration tests for the SQLite list/item store
// ABOUTME: Tests schema bootstrap, CRUD statements, ordering, and the delete-list cascade

use listkeep_core::{ItemUpdateInput, DEFAULT_LIST_ID, DEFAULT_LIST_NAME};
use listkeep_storage::{Database, ListStore, SqliteStore, StorageError};
use pretty_assertions::assert_eq;

/// Helper to create an in-memory database for testing
async fn create_test_store() -> (Database, SqliteStore) {
    let db = Database::init_in_memory().await.unwrap();
    let store = db.store();
    (db, store)
}

#[tokio::test]
async fn test_bootstrap_seeds_default_list() {
    let (_db, store) = create_test_store().await;

    let lists = store.list_lists().await.unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].id, DEFAULT_LIST_ID);
    assert_eq!(lists[0].name, DEFAULT_LIST_NAME);
}

#[tokio::test]
async fn test_bootstrap_is_idempotent_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("listkeep.db");

    let db = Database::init_with_path(&path).await.unwrap();
    db.store().create_list("Work").await.unwrap();
    db.close().await;

    let reopened = Database::init_with_path(&path).await.unwrap();
    let lists = reopened.store().list_lists().await.unwrap();
    let names: Vec<_> = lists.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec![DEFAULT_LIST_NAME, "Work"]);
    reopened.close().await;
}

#[tokio::test]
async fn test_create_list_assigns_next_id() {
    let (_db, store) = create_test_store().await;

    let list = store.create_list("Work").await.unwrap();
    assert_eq!(list.id, 2);
    assert_eq!(list.name, "Work");
    assert_eq!(list.created_at, list.updated_at);
}

#[tokio::test]
async fn test_list_lists_orders_by_id() {
    let (_db, store) = create_test_store().await;

    for name in ["Zeta", "Alpha", "Mid"] {
        store.create_list(name).await.unwrap();
    }

    let ids: Vec<_> = store
        .list_lists()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_update_list_missing_returns_none() {
    let (_db, store) = create_test_store().await;

    assert!(store.update_list(99, "Nope").await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_list_touches_updated_at() {
    let (_db, store) = create_test_store().await;

    let list = store.create_list("Work").await.unwrap();
    let updated = store.update_list(list.id, "Office").await.unwrap().unwrap();

    assert_eq!(updated.name, "Office");
    assert_eq!(updated.created_at, list.created_at);
    assert!(updated.updated_at >= list.updated_at);
}

#[tokio::test]
async fn test_create_item_round_trips_columns() {
    let (_db, store) = create_test_store().await;

    let list = store.create_list("Work").await.unwrap();
    let item = store.create_item("buy milk", list.id, true).await.unwrap();

    assert_eq!(item.text, "buy milk");
    assert_eq!(item.list_id, Some(list.id));
    assert!(item.is_hidden);

    let fetched = store.get_item(item.id).await.unwrap().unwrap();
    assert_eq!(fetched, item);
}

#[tokio::test]
async fn test_list_items_filters_and_orders_newest_first() {
    let (_db, store) = create_test_store().await;

    let work = store.create_list("Work").await.unwrap();
    let a = store.create_item("a", work.id, false).await.unwrap();
    let _b = store.create_item("b", DEFAULT_LIST_ID, false).await.unwrap();
    let c = store.create_item("c", work.id, false).await.unwrap();

    let filtered: Vec<_> = store
        .list_items(Some(work.id))
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(filtered, vec![c.id, a.id]);

    let all = store.list_items(None).await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|w| w[0].id > w[1].id));
}

#[tokio::test]
async fn test_update_item_only_writes_supplied_fields() {
    let (_db, store) = create_test_store().await;

    let work = store.create_list("Work").await.unwrap();
    let item = store.create_item("draft", DEFAULT_LIST_ID, true).await.unwrap();

    let changes = ItemUpdateInput {
        text: "final".to_string(),
        list_id: Some(work.id),
        is_hidden: None,
    };
    let updated = store.update_item(item.id, &changes).await.unwrap().unwrap();

    assert_eq!(updated.text, "final");
    assert_eq!(updated.list_id, Some(work.id));
    assert!(updated.is_hidden);
    assert_eq!(updated.created_at, item.created_at);
}

#[tokio::test]
async fn test_update_item_missing_returns_none() {
    let (_db, store) = create_test_store().await;

    let changes = ItemUpdateInput {
        text: "ghost".to_string(),
        ..Default::default()
    };
    assert!(store.update_item(42, &changes).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_item_reports_whether_row_existed() {
    let (_db, store) = create_test_store().await;

    let item = store.create_item("temp", DEFAULT_LIST_ID, false).await.unwrap();

    assert!(store.delete_item(item.id).await.unwrap());
    assert!(!store.delete_item(item.id).await.unwrap());
    assert!(store.get_item(item.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_list_reassigns_items_before_removing_list() {
    let (_db, store) = create_test_store().await;

    let work = store.create_list("Work").await.unwrap();
    let first = store.create_item("one", work.id, false).await.unwrap();
    let second = store.create_item("two", work.id, true).await.unwrap();
    let other = store.create_item("elsewhere", DEFAULT_LIST_ID, false).await.unwrap();

    let moved = store
        .delete_list_reassigning(work.id, DEFAULT_LIST_ID)
        .await
        .unwrap();
    assert_eq!(moved, Some(2));

    assert!(store.get_list(work.id).await.unwrap().is_none());
    for id in [first.id, second.id, other.id] {
        let item = store.get_item(id).await.unwrap().unwrap();
        assert_eq!(item.list_id, Some(DEFAULT_LIST_ID));
    }

    let second_after = store.get_item(second.id).await.unwrap().unwrap();
    assert!(second_after.is_hidden);
}

#[tokio::test]
async fn test_delete_list_missing_writes_nothing() {
    let (_db, store) = create_test_store().await;

    let moved = store.delete_list_reassigning(77, DEFAULT_LIST_ID).await.unwrap();
    assert_eq!(moved, None);
    assert_eq!(store.list_lists().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_list_failure_after_reassign_rolls_back() {
    let (db, store) = create_test_store().await;

    let work = store.create_list("Work").await.unwrap();
    let item = store.create_item("report", work.id, false).await.unwrap();

    sqlx::query(
        r#"
        CREATE TRIGGER block_list_delete BEFORE DELETE ON lists
        BEGIN
            SELECT RAISE(ABORT, 'list delete blocked');
        END
        "#,
    )
    .execute(db.pool())
    .await
    .unwrap();

    let result = store.delete_list_reassigning(work.id, DEFAULT_LIST_ID).await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("list delete blocked"));

    // Neither the reassignment nor the delete survived
    let reread = store.get_item(item.id).await.unwrap().unwrap();
    assert_eq!(reread.list_id, Some(work.id));
    assert_eq!(reread.updated_at, item.updated_at);
    assert!(store.get_list(work.id).await.unwrap().is_some());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_delete_list_alongside_concurrent_inserts_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::init_with_path(&dir.path().join("concurrent.db"))
        .await
        .unwrap();
    let store = db.store();

    let mut list_ids = Vec::new();
    for n in 0..40 {
        let list = store.create_list(&format!("List {}", n)).await.unwrap();
        for text in ["a", "b", "c"] {
            store.create_item(text, list.id, false).await.unwrap();
        }
        list_ids.push(list.id);
    }

    let mut handles = Vec::new();
    for list_id in list_ids.iter().copied() {
        let deleter = store.clone();
        handles.push(tokio::spawn(async move {
            deleter
                .delete_list_reassigning(list_id, DEFAULT_LIST_ID)
                .await
                .map(|moved| moved.is_some())
        }));
        let inserter = store.clone();
        handles.push(tokio::spawn(async move {
            inserter
                .create_item("fresh", DEFAULT_LIST_ID, false)
                .await
                .map(|_| true)
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().unwrap());
    }

    assert_eq!(store.list_lists().await.unwrap().len(), 1);
    let items = store.list_items(None).await.unwrap();
    assert_eq!(items.len(), 40 * 3 + 40);
    assert!(items
        .iter()
        .all(|item| item.list_id == Some(DEFAULT_LIST_ID)));

    db.close().await;
}

#[tokio::test]
async fn test_foreign_key_rejects_unknown_list() {
    let (_db, store) = create_test_store().await;

    let err = store.create_item("orphan", 999, false).await.unwrap_err();
    assert!(err.is_foreign_key_violation());

    let item = store.create_item("kept", DEFAULT_LIST_ID, false).await.unwrap();
    let err = store
        .update_item(
            item.id,
            &ItemUpdateInput {
                text: "kept".to_string(),
                list_id: Some(999),
                is_hidden: None,
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_foreign_key_violation());
}

#[test]
fn test_non_database_errors_are_not_foreign_key_violations() {
    let err = StorageError::Database("database is locked".to_string());
    assert!(!err.is_foreign_key_violation());
}
