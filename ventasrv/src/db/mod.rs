//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx over an embedded
//! SQLite file. It follows the repository pattern to keep query construction
//! out of the HTTP handlers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  (API request handlers)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - queries)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - database records)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   SQLite    │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`handlers`]: Repository implementations for the two tables
//! - [`models`]: Database record structures matching table schemas
//! - [`errors`]: Database-specific error types
//! - [`schema`]: Idempotent table creation, run once at startup
//!
//! The store is the sole owner of both entities; nothing here caches rows
//! beyond the lifetime of a single request or the seed import pass.

pub mod errors;
pub mod handlers;
pub mod models;
pub mod schema;
