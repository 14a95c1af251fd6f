//! Order-placement orchestration on top of the repositories.

use thiserror::Error;

use crate::connection::ConnectionProvider;
use crate::error::StoreError;
use crate::mapper::DataMapper;
use crate::model::{Bill, Order};
use crate::repository::{BillRepository, ClientRepository, OrderRepository, ProductRepository};

/// Business failures when placing an order.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("quantity must be positive, got {0}")]
    InvalidQuantity(i64),

    #[error("no client named {0:?}")]
    UnknownClient(String),

    #[error("no product named {0:?}")]
    UnknownProduct(String),

    #[error("under-stock for {product}: {requested} requested, {available} available")]
    OutOfStock {
        product: String,
        requested: i64,
        available: i64,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Places orders: resolves the client and product by name, checks stock,
/// records the order, decrements stock, and writes the bill ledger line.
pub struct OrderService<P: ConnectionProvider> {
    clients: ClientRepository<P>,
    products: ProductRepository<P>,
    orders: OrderRepository<P>,
    bills: BillRepository<P>,
}

impl<P: ConnectionProvider> OrderService<P> {
    #[must_use]
    pub fn new(mapper: DataMapper<P>) -> Self {
        Self {
            clients: ClientRepository::new(mapper.clone()),
            products: ProductRepository::new(mapper.clone()),
            orders: OrderRepository::new(mapper.clone()),
            bills: BillRepository::new(mapper),
        }
    }

    /// Place an order of `quantity` units of `product_name` for
    /// `client_name` and return the resulting ledger line.
    ///
    /// The stock decrement is a read-modify-write over two statements;
    /// racing callers can lose updates (the store's isolation level is
    /// the only protection).
    ///
    /// # Errors
    ///
    /// Returns a business error for an unknown client or product, a
    /// non-positive quantity, or insufficient stock; store errors pass
    /// through wrapped in [`OrderError::Store`].
    pub async fn place_order(
        &self,
        client_name: &str,
        product_name: &str,
        quantity: i64,
    ) -> Result<Bill, OrderError> {
        if quantity <= 0 {
            return Err(OrderError::InvalidQuantity(quantity));
        }

        let client = self
            .clients
            .find_by_name(client_name)
            .await?
            .ok_or_else(|| OrderError::UnknownClient(client_name.to_owned()))?;
        let mut product = self
            .products
            .find_by_name(product_name)
            .await?
            .ok_or_else(|| OrderError::UnknownProduct(product_name.to_owned()))?;

        if product.stock < quantity {
            return Err(OrderError::OutOfStock {
                product: product.name,
                requested: quantity,
                available: product.stock,
            });
        }

        let mut order = Order::new(client.id, product.id, quantity);
        self.orders.insert(&mut order).await?;

        product.stock -= quantity;
        let total_price = product.price * quantity as f64;
        self.products.update(&product, product.id).await?;

        let bill = Bill::new(order.id, client.name, product.name, quantity, total_price);
        self.bills.insert(&bill).await?;
        Ok(bill)
    }

    #[must_use]
    pub fn clients(&self) -> &ClientRepository<P> {
        &self.clients
    }

    #[must_use]
    pub fn products(&self) -> &ProductRepository<P> {
        &self.products
    }

    #[must_use]
    pub fn orders(&self) -> &OrderRepository<P> {
        &self.orders
    }

    #[must_use]
    pub fn bills(&self) -> &BillRepository<P> {
        &self.bills
    }
}
