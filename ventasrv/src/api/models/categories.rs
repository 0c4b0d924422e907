//! API response models for product categories.

use crate::db::models::categories::Category;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product category as exposed on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    /// Unique identifier of the category
    #[schema(example = 1)]
    pub id_alimento: i64,
    /// Category name, unique across the table
    #[schema(example = "Carnes")]
    pub nombre: String,
    /// Optional description
    #[schema(example = "Categoría: Carnes")]
    pub descripcion: Option<String>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id_alimento: category.id,
            nombre: category.name,
            descripcion: category.description,
        }
    }
}
