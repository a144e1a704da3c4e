#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `SqliteStore`, covering the `TaskStore` trait
//! implementation against a real database file.

use std::path::Path;

use tasklist_app::adapters::SqliteStore;
use tasklist_core::error::CoreError;
use tasklist_core::traits::TaskStore;
use tasklist_core::PLACEHOLDER_TEXT;

// ===== Helpers =====

async fn create_test_store() -> (SqliteStore, tempfile::TempDir) {
    let tmp = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = tmp.path().join("tasks.db");
    let store = SqliteStore::new(&db_path)
        .await
        .expect("failed to create SqliteStore");
    (store, tmp)
}

async fn reopen(dir: &Path) -> SqliteStore {
    SqliteStore::new(&dir.join("tasks.db"))
        .await
        .expect("failed to reopen SqliteStore")
}

// ===== initialize =====

#[tokio::test]
async fn fresh_database_seeds_placeholder() {
    let (store, _tmp) = create_test_store().await;
    let rows = store.load_all().await.unwrap();
    assert_eq!(rows, vec![PLACEHOLDER_TEXT]);
}

#[tokio::test]
async fn initialize_is_idempotent() {
    let (store, _tmp) = create_test_store().await;
    store.initialize().await.unwrap();
    store.initialize().await.unwrap();
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn reopening_does_not_reseed() {
    let (store, tmp) = create_test_store().await;
    store.append("Buy milk").await.unwrap();
    drop(store);

    let store = reopen(tmp.path()).await;
    assert_eq!(
        store.load_all().await.unwrap(),
        vec![PLACEHOLDER_TEXT, "Buy milk"]
    );
}

#[tokio::test]
async fn deleted_placeholder_stays_deleted_after_reopen() {
    let (store, tmp) = create_test_store().await;
    store.delete_by_text(PLACEHOLDER_TEXT).await.unwrap();
    drop(store);

    let store = reopen(tmp.path()).await;
    assert!(store.load_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn connect_without_initialize_has_no_schema_yet() {
    let tmp = tempfile::tempdir().unwrap();
    let store = SqliteStore::connect(&tmp.path().join("tasks.db"))
        .await
        .unwrap();

    assert!(store.load_all().await.is_err());

    store.initialize().await.unwrap();
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn unusable_path_is_storage_unavailable() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    std::fs::write(&blocker, b"file").unwrap();

    let result = SqliteStore::new(&blocker.join("nested").join("tasks.db")).await;

    assert!(matches!(result, Err(CoreError::StorageUnavailable(_))));
}

#[tokio::test]
async fn creates_missing_parent_directories() {
    let tmp = tempfile::tempdir().unwrap();
    let db_path = tmp.path().join("a").join("b").join("tasks.db");

    let store = SqliteStore::new(&db_path).await.unwrap();

    assert!(db_path.exists());
    assert_eq!(store.count().await.unwrap(), 1);
}

// ===== append / load_all =====

#[tokio::test]
async fn load_all_returns_insertion_order() {
    let (store, _tmp) = create_test_store().await;
    for text in ["one", "two", "three"] {
        store.append(text).await.unwrap();
    }

    assert_eq!(
        store.load_all().await.unwrap(),
        vec![PLACEHOLDER_TEXT, "one", "two", "three"]
    );
}

#[tokio::test]
async fn append_allows_duplicates() {
    let (store, _tmp) = create_test_store().await;
    store.append("same").await.unwrap();
    store.append("same").await.unwrap();
    assert_eq!(store.count().await.unwrap(), 3);
}

#[tokio::test]
async fn append_is_committed_immediately() {
    let (store, tmp) = create_test_store().await;
    store.append("durable").await.unwrap();

    let other = reopen(tmp.path()).await;
    assert!(other
        .load_all()
        .await
        .unwrap()
        .contains(&"durable".to_string()));
}

// ===== delete_by_text =====

#[tokio::test]
async fn delete_by_text_removes_first_match() {
    let (store, _tmp) = create_test_store().await;
    store.delete_by_text(PLACEHOLDER_TEXT).await.unwrap();
    for text in ["a", "b", "a", "c"] {
        store.append(text).await.unwrap();
    }

    store.delete_by_text("a").await.unwrap();

    assert_eq!(store.load_all().await.unwrap(), vec!["b", "a", "c"]);
}

#[tokio::test]
async fn delete_by_text_without_match_is_noop() {
    let (store, _tmp) = create_test_store().await;
    store.delete_by_text("missing").await.unwrap();
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn delete_by_text_is_exact_match() {
    let (store, _tmp) = create_test_store().await;
    store.append("Buy milk").await.unwrap();

    store.delete_by_text("buy milk").await.unwrap();
    store.delete_by_text("Buy").await.unwrap();

    assert_eq!(store.count().await.unwrap(), 2);
}

// ===== row ids =====

#[tokio::test]
async fn load_rows_returns_ids_from_append() {
    let (store, _tmp) = create_test_store().await;
    let a = store.append_row("a").await.unwrap();
    let b = store.append_row("b").await.unwrap();

    let rows = store.load_rows().await.unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].text, PLACEHOLDER_TEXT);
    assert_eq!((rows[1].id, rows[1].text.as_str()), (a, "a"));
    assert_eq!((rows[2].id, rows[2].text.as_str()), (b, "b"));
    assert!(a < b);
}

#[tokio::test]
async fn delete_row_removes_only_that_duplicate() {
    let (store, tmp) = create_test_store().await;
    store.append_row("dup").await.unwrap();
    store.append_row("other").await.unwrap();
    let last = store.append_row("dup").await.unwrap();

    store.delete_row(last).await.unwrap();

    let store = reopen(tmp.path()).await;
    assert_eq!(
        store.load_all().await.unwrap(),
        vec![PLACEHOLDER_TEXT, "dup", "other"]
    );
}

#[tokio::test]
async fn delete_row_of_missing_id_is_noop() {
    let (store, _tmp) = create_test_store().await;
    let id = store.append_row("once").await.unwrap();
    store.delete_row(id).await.unwrap();
    store.delete_row(id).await.unwrap();
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn unicode_text_round_trips() {
    let (store, tmp) = create_test_store().await;
    store.append("买牛奶 🥛").await.unwrap();
    drop(store);

    let store = reopen(tmp.path()).await;
    assert_eq!(store.load_all().await.unwrap()[1], "买牛奶 🥛");
}
