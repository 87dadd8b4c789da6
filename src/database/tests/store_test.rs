use super::*;
use crate::database::{file_repo, localization_repo, schema_repo};
use tempfile::TempDir;

#[tokio::test]
async fn test_fresh_store_has_default_language_only() {
    let mut store = Store::open_in_memory().await.unwrap();
    let columns = schema_repo::language_columns(store.conn()).await.unwrap();
    assert_eq!(columns, vec!["en".to_string()]);
    assert_eq!(localization_repo::count_records(store.conn()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_open_creates_file_and_persists() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("ios.sqlite");

    let mut store = Store::open(&db_path).await.unwrap();
    assert!(db_path.exists());
    let id = file_repo::register_file(store.conn(), "App", "A/B.strings")
        .await
        .unwrap();
    schema_repo::ensure_language(store.conn(), &"fr".parse().unwrap())
        .await
        .unwrap();
    store.close().await.unwrap();

    // Reopening re-runs the migrator without touching existing data or columns
    let mut store = Store::open(&db_path).await.unwrap();
    let file = file_repo::get_file_by_path(store.conn(), "A/B.strings")
        .await
        .unwrap()
        .expect("file survives reopen");
    assert_eq!(file.id, id);
    let columns = schema_repo::language_columns(store.conn()).await.unwrap();
    assert_eq!(columns, vec!["en".to_string(), "fr".to_string()]);
}

#[tokio::test]
async fn test_foreign_key_enforced() {
    let mut store = Store::open_in_memory().await.unwrap();
    let result = sqlx::query("INSERT INTO Localizations (file_id, position, en) VALUES (99, '0', 'x')")
        .execute(store.conn())
        .await;
    assert!(result.is_err(), "record must reference an existing file");
}
