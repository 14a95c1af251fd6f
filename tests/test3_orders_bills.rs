use orders_store::prelude::*;
use tempfile::TempDir;

const SCHEMA: &str = include_str!("sql/schema.sql");

async fn service(dir: &TempDir) -> OrderService<SqliteProvider> {
    let db = dir.path().join("orders.db");
    let mapper = DataMapper::new(SqliteProvider::new(StoreConfig::new(db)));
    mapper.execute_batch(SCHEMA).await.expect("schema setup");
    OrderService::new(mapper)
}

async fn seed(service: &OrderService<SqliteProvider>) -> (Client, Product) {
    let mut ana = Client::new("Ana", "0711", "ana@example.com");
    service.clients().insert(&mut ana).await.unwrap();
    let mut widget = Product::new("Widget", 9.99, 10);
    service.products().insert(&mut widget).await.unwrap();
    (ana, widget)
}

#[tokio::test]
async fn placing_an_order_backfills_id_decrements_stock_and_writes_bill() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir).await;
    let (_ana, widget) = seed(&service).await;

    let bills_before = service.bills().count().await.unwrap();

    let bill = service.place_order("Ana", "Widget", 3).await.unwrap();

    assert!(bill.order_id > 0, "generated order id should be back-filled");
    assert_eq!(bill.client_name, "Ana");
    assert_eq!(bill.product_name, "Widget");
    assert_eq!(bill.quantity, 3);
    assert!((bill.total_price - 29.97).abs() < 1e-9);

    let order = service
        .orders()
        .find_by_id(bill.order_id)
        .await
        .unwrap()
        .expect("order row");
    assert_eq!(order.product_id, widget.id);
    assert_eq!(order.quantity, 3);

    let after = service
        .products()
        .find_by_id(widget.id)
        .await
        .unwrap()
        .expect("product row");
    assert_eq!(after.stock, 7);

    assert_eq!(service.bills().count().await.unwrap(), bills_before + 1);
    let stored = service
        .bills()
        .find_by_order_id(bill.order_id)
        .await
        .unwrap()
        .expect("bill row");
    assert_eq!(stored, bill);
}

#[tokio::test]
async fn bill_projection_materializes_five_named_columns() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir).await;

    let bill = Bill::new(7, "Ana", "Widget", 3, 29.97);
    service.bills().insert(&bill).await.unwrap();

    let stored = service
        .bills()
        .find_by_order_id(7)
        .await
        .unwrap()
        .expect("bill row");
    assert_eq!(stored.order_id, 7);
    assert_eq!(stored.client_name, "Ana");
    assert_eq!(stored.product_name, "Widget");
    assert_eq!(stored.quantity, 3);
    assert!((stored.total_price - 29.97).abs() < 1e-9);
}

#[tokio::test]
async fn under_stock_is_rejected_without_side_effects() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir).await;
    let (_ana, widget) = seed(&service).await;

    let err = service.place_order("Ana", "Widget", 100).await.unwrap_err();
    assert!(matches!(err, OrderError::OutOfStock { requested: 100, .. }));

    let untouched = service
        .products()
        .find_by_id(widget.id)
        .await
        .unwrap()
        .expect("product row");
    assert_eq!(untouched.stock, 10);
    assert_eq!(service.orders().count().await.unwrap(), 0);
    assert_eq!(service.bills().count().await.unwrap(), 0);
}

#[tokio::test]
async fn unknown_names_and_bad_quantities_are_business_errors() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir).await;
    seed(&service).await;

    assert!(matches!(
        service.place_order("Nobody", "Widget", 1).await.unwrap_err(),
        OrderError::UnknownClient(_)
    ));
    assert!(matches!(
        service.place_order("Ana", "Nonesuch", 1).await.unwrap_err(),
        OrderError::UnknownProduct(_)
    ));
    assert!(matches!(
        service.place_order("Ana", "Widget", 0).await.unwrap_err(),
        OrderError::InvalidQuantity(0)
    ));
}

#[tokio::test]
async fn order_table_quoting_survives_full_crud() {
    let dir = TempDir::new().unwrap();
    let service = service(&dir).await;

    let mut order = Order::new(1, 2, 4);
    service.orders().insert(&mut order).await.unwrap();
    assert!(order.id > 0);

    let mut changed = order.clone();
    changed.quantity = 6;
    assert_eq!(
        service.orders().update(&changed, order.id).await.unwrap(),
        1
    );
    let found = service
        .orders()
        .find_by_id(order.id)
        .await
        .unwrap()
        .expect("order row");
    assert_eq!(found.quantity, 6);

    assert_eq!(service.orders().count().await.unwrap(), 1);
    assert_eq!(service.orders().delete(order.id).await.unwrap(), 1);
    assert_eq!(service.orders().count().await.unwrap(), 0);
}
