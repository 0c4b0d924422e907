//! Repository implementations for database access.
//!
//! Each repository wraps a SQLx connection (or a transaction dereferenced to
//! one), provides strongly-typed operations for one table, and returns
//! records from [`crate::db::models`]. Handlers acquire a connection from
//! the pool and hand it to the repository for the duration of the request;
//! the importer hands over its transaction instead so all seed writes share
//! one atomic unit.

pub mod categories;
pub mod sales;

pub use categories::Categories;
pub use sales::{SaleFilter, Sales};
