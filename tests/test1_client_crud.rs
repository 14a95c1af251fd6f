use orders_store::prelude::*;
use tempfile::TempDir;

const SCHEMA: &str = include_str!("sql/schema.sql");

async fn mapper(dir: &TempDir) -> DataMapper<SqliteProvider> {
    let db = dir.path().join("orders.db");
    let mapper = DataMapper::new(SqliteProvider::new(StoreConfig::new(db)));
    mapper.execute_batch(SCHEMA).await.expect("schema setup");
    mapper
}

#[tokio::test]
async fn insert_then_find_by_id_returns_equal_client() {
    let dir = TempDir::new().unwrap();
    let clients = ClientRepository::new(mapper(&dir).await);

    let mut ana = Client::new("Ana", "0711", "ana@example.com");
    clients.insert(&mut ana).await.unwrap();
    assert!(ana.id > 0, "generated id should be back-filled");

    let found = clients.find_by_id(ana.id).await.unwrap().expect("row");
    assert_eq!(found, ana);
}

#[tokio::test]
async fn update_writes_every_persisted_field() {
    let dir = TempDir::new().unwrap();
    let clients = ClientRepository::new(mapper(&dir).await);

    let mut ana = Client::new("Ana", "0711", "ana@example.com");
    clients.insert(&mut ana).await.unwrap();

    let mut changed = ana.clone();
    changed.name = "Ana Pop".into();
    changed.phone = "0722".into();
    changed.email = "ana.pop@example.com".into();
    let affected = clients.update(&changed, ana.id).await.unwrap();
    assert_eq!(affected, 1);

    let found = clients.find_by_id(ana.id).await.unwrap().expect("row");
    assert_eq!(found, changed);
}

#[tokio::test]
async fn delete_removes_the_row() {
    let dir = TempDir::new().unwrap();
    let clients = ClientRepository::new(mapper(&dir).await);

    let mut ana = Client::new("Ana", "0711", "ana@example.com");
    clients.insert(&mut ana).await.unwrap();
    assert_eq!(clients.delete(ana.id).await.unwrap(), 1);
    assert!(clients.find_by_id(ana.id).await.unwrap().is_none());
}

#[tokio::test]
async fn count_tracks_inserts_and_deletes() {
    let dir = TempDir::new().unwrap();
    let clients = ClientRepository::new(mapper(&dir).await);

    let before = clients.count().await.unwrap();

    let mut first_id = 0;
    for i in 0..3 {
        let mut c = Client::new(format!("Client{i}"), "07", "c@example.com");
        clients.insert(&mut c).await.unwrap();
        if i == 0 {
            first_id = c.id;
        }
    }
    clients.delete(first_id).await.unwrap();

    assert_eq!(clients.count().await.unwrap(), before + 3 - 1);
}

#[tokio::test]
async fn find_all_returns_rows_in_storage_order() {
    let dir = TempDir::new().unwrap();
    let clients = ClientRepository::new(mapper(&dir).await);

    for name in ["Ana", "Bogdan", "Carmen"] {
        let mut c = Client::new(name, "07", "c@example.com");
        clients.insert(&mut c).await.unwrap();
    }

    let all = clients.find_all().await.unwrap();
    let names: Vec<&str> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Ana", "Bogdan", "Carmen"]);
}
