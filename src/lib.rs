//! Typed CRUD mapping layer over `SQLite` for an orders-management store.
//!
//! One generic engine ([`DataMapper`]) serves four entity façades; entity
//! shape is declared once as compile-time metadata ([`Entity`]) and drives
//! both SQL synthesis and parameter binding.

pub mod config;
pub mod connection;
pub mod error;
pub mod mapper;
pub mod model;
pub mod params;
pub mod prelude;
pub mod repository;
pub mod results;
pub mod schema;
pub mod service;
pub mod sql;
pub mod value;

pub use config::StoreConfig;
pub use connection::{ConnectionProvider, SqliteProvider};
pub use error::StoreError;
pub use mapper::DataMapper;
pub use model::{Bill, Client, Order, Product};
pub use repository::{BillRepository, ClientRepository, OrderRepository, ProductRepository};
pub use schema::{Entity, EntityKind, FieldDef, FieldKind, Identity, Table};
pub use service::{OrderError, OrderService};
pub use value::SqlValue;
