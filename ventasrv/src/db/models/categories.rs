//! Database models for product categories.

use serde::{Deserialize, Serialize};

/// Database representation of a product category.
///
/// Categories are created during seeding only and are immutable afterwards;
/// there is no update or delete path.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}
