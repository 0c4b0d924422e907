//! Database models for sale events.

use serde::{Deserialize, Serialize};

/// Database representation of a single sale row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Sale {
    pub id: i64,
    /// Calendar date as stored, no timezone semantics.
    pub date: String,
    pub category_id: i64,
    pub quantity: i64,
}

/// A sale joined with its category name, the shape every read endpoint
/// returns.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SaleWithProduct {
    pub id: i64,
    pub date: String,
    pub product: String,
    pub quantity: i64,
}

/// Request to insert a new sale row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleCreateDBRequest {
    pub date: String,
    pub category_id: i64,
    pub quantity: i64,
}
