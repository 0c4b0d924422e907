//! API layer for HTTP request handling and data models.
//!
//! - **[`handlers`]**: Axum route handlers for all API endpoints
//! - **[`models`]**: Request/response data structures for API communication
//!
//! The API speaks the Spanish wire contract the browser form consumes:
//! `/api/alimentos` for the category lookup and `/api/ventas` (plus its
//! date, range, and id routes) for sales CRUD, all with JSON bodies.
//! OpenAPI documentation is served at `/docs`.

pub mod handlers;
pub mod models;
