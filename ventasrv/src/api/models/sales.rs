//! API request/response models for sales.

use crate::db::models::sales::{Sale, SaleWithProduct};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A sale joined with its product name, as every read endpoint returns it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaleResponse {
    /// Unique identifier of the sale
    #[schema(example = 42)]
    pub id_venta: i64,
    /// Calendar date of the sale
    #[schema(example = "2025-07-15")]
    pub fecha: String,
    /// Name of the product category sold
    #[schema(example = "Carnes")]
    pub producto: String,
    /// Quantity sold
    #[schema(example = 150)]
    pub cantidad: i64,
}

impl From<SaleWithProduct> for SaleResponse {
    fn from(sale: SaleWithProduct) -> Self {
        Self {
            id_venta: sale.id,
            fecha: sale.date,
            producto: sale.product,
            cantidad: sale.quantity,
        }
    }
}

/// Query parameters for the date-range listing. Both bounds are required;
/// they are `Option` here so the handler can reject a missing bound with the
/// contract's 400 instead of an extractor rejection.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct RangeQuery {
    /// Inclusive lower bound
    pub desde: Option<String>,
    /// Inclusive upper bound
    pub hasta: Option<String>,
}

/// Request body for creating a sale. All fields are required; presence is
/// the only validation the contract asks for.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaleCreate {
    /// Calendar date of the sale
    #[schema(example = "2025-07-15")]
    pub fecha: Option<String>,
    /// Identifier of an existing category
    #[schema(example = 1)]
    pub id_alimento: Option<i64>,
    /// Quantity sold
    #[schema(example = 150)]
    pub cantidad: Option<i64>,
}

/// Request body for updating a sale's quantity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaleQuantityUpdate {
    /// New quantity
    #[schema(example = 99)]
    pub cantidad: Option<i64>,
}

/// Response for a created sale: a message, the fresh id, and the echoed
/// input.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaleCreatedResponse {
    #[schema(example = "Venta agregada")]
    pub mensaje: String,
    #[schema(example = 42)]
    pub id_venta: i64,
    pub fecha: String,
    pub id_alimento: i64,
    pub cantidad: i64,
}

impl SaleCreatedResponse {
    pub fn new(sale: Sale) -> Self {
        Self {
            mensaje: "Venta agregada".to_string(),
            id_venta: sale.id,
            fecha: sale.date,
            id_alimento: sale.category_id,
            cantidad: sale.quantity,
        }
    }
}

/// Response for update and delete: a message plus the count of rows changed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChangesResponse {
    #[schema(example = "Venta actualizada")]
    pub mensaje: String,
    #[schema(example = 1)]
    pub cambios: u64,
}
