//! HTTP request handlers for all API endpoints.
//!
//! Each handler validates presence of its required inputs, executes the
//! operation through a repository from [`crate::db::handlers`], and
//! serializes a typed response. Errors convert to HTTP status codes through
//! [`crate::errors::Error`]'s `IntoResponse`.
//!
//! - [`categories`]: category lookup listing
//! - [`sales`]: sales CRUD and date filtering
//! - [`static_assets`]: browser form serving

pub mod categories;
pub mod sales;
pub mod static_assets;
