//! Typed repository façades.
//!
//! Pure pass-throughs to the shared [`DataMapper`]; they exist to give
//! callers a concrete, type-safe surface instead of a generic one.

mod bill;
mod client;
mod order;
mod product;

pub use bill::BillRepository;
pub use client::ClientRepository;
pub use order::OrderRepository;
pub use product::ProductRepository;
