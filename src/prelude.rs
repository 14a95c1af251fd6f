//! Convenient imports for common functionality.

pub use crate::config::StoreConfig;
pub use crate::connection::{ConnectionProvider, SqliteProvider};
pub use crate::error::StoreError;
pub use crate::mapper::DataMapper;
pub use crate::model::{Bill, Client, Order, Product};
pub use crate::repository::{
    BillRepository, ClientRepository, OrderRepository, ProductRepository,
};
pub use crate::schema::Entity;
pub use crate::service::{OrderError, OrderService};
pub use crate::value::SqlValue;
