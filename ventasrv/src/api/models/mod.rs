//! Request/response data structures for API communication.
//!
//! The wire contract is Spanish (`id_alimento`, `fecha`, `cantidad`,
//! `mensaje`, the `data` envelope); translation from the English-named
//! database records happens here and nowhere else.

pub mod categories;
pub mod sales;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The `{ "data": [...] }` envelope every list endpoint returns.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DataResponse<T: ToSchema> {
    pub data: Vec<T>,
}

impl<T: ToSchema> DataResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}
