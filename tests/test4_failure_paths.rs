use orders_store::prelude::*;
use tempfile::TempDir;

const SCHEMA: &str = include_str!("sql/schema.sql");

fn mapper(dir: &TempDir) -> DataMapper<SqliteProvider> {
    let db = dir.path().join("orders.db");
    DataMapper::new(SqliteProvider::new(StoreConfig::new(db)))
}

#[tokio::test]
async fn missing_tables_mask_to_empty_results() {
    let dir = TempDir::new().unwrap();
    // No schema: every statement fails inside the driver, and the mapper
    // masks it. Callers cannot distinguish "not found" from "failed".
    let m = mapper(&dir);
    let clients = ClientRepository::new(m.clone());

    assert!(clients.find_all().await.unwrap().is_empty());
    assert!(clients.find_by_id(1).await.unwrap().is_none());
    assert!(clients.find_by_name("Ana").await.unwrap().is_none());
    assert_eq!(clients.count().await.unwrap(), 0);
    assert_eq!(clients.delete(1).await.unwrap(), 0);

    let mut ana = Client::new("Ana", "0711", "ana@example.com");
    clients.insert(&mut ana).await.unwrap();
    assert_eq!(ana.id, 0, "no id back-fill on a masked insert");
}

#[tokio::test]
async fn connection_is_released_after_a_failed_operation() {
    let dir = TempDir::new().unwrap();
    let m = mapper(&dir);
    let clients = ClientRepository::new(m.clone());

    // Fails (no table yet) and is masked.
    assert!(clients.find_all().await.unwrap().is_empty());

    // The same mapper can still set up the schema and operate normally,
    // so the failed operation cannot have leaked its connection.
    m.execute_batch(SCHEMA).await.unwrap();
    let mut ana = Client::new("Ana", "0711", "ana@example.com");
    clients.insert(&mut ana).await.unwrap();
    assert!(ana.id > 0);
    assert_eq!(clients.count().await.unwrap(), 1);
}

#[tokio::test]
async fn decode_mismatch_propagates_materialization_error() {
    let dir = TempDir::new().unwrap();
    let m = mapper(&dir);
    m.execute_batch(
        "CREATE TABLE Client (id TEXT NOT NULL, name TEXT NOT NULL, \
         phone TEXT NOT NULL, email TEXT NOT NULL); \
         INSERT INTO Client VALUES ('abc', 'Ana', '0711', 'ana@example.com');",
    )
    .await
    .unwrap();

    let err = ClientRepository::new(m).find_all().await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::Materialization {
            entity: "Client",
            column: "id",
            ..
        }
    ));
}

#[tokio::test]
async fn null_column_is_a_materialization_error() {
    let dir = TempDir::new().unwrap();
    let m = mapper(&dir);
    m.execute_batch(
        "CREATE TABLE Client (id INTEGER PRIMARY KEY AUTOINCREMENT, \
         name TEXT NOT NULL, phone TEXT, email TEXT NOT NULL); \
         INSERT INTO Client (name, phone, email) \
         VALUES ('Ana', NULL, 'ana@example.com');",
    )
    .await
    .unwrap();

    let err = ClientRepository::new(m).find_all().await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::Materialization {
            entity: "Client",
            column: "phone",
            ..
        }
    ));
}

#[tokio::test]
async fn execute_batch_propagates_statement_errors() {
    let dir = TempDir::new().unwrap();
    let err = mapper(&dir)
        .execute_batch("CREATE TABLE (this is not sql;")
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Statement(_)));
}
