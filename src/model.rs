//! The domain records the store persists.

mod bill;
mod client;
mod order;
mod product;

pub use bill::Bill;
pub use client::Client;
pub use order::Order;
pub use product::Product;
