//! Database repository for product categories.
//!
//! Categories are written only by the seed importer; the API surface reads
//! them. There is deliberately no update or delete here.

use crate::db::{errors::Result, models::categories::Category};
use sqlx::SqliteConnection;
use tracing::instrument;

pub struct Categories<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> Categories<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    /// Insert a category, ignoring the row if the name already exists.
    ///
    /// The table may pre-exist from a prior partial run, so seeding uses
    /// ignore-on-conflict semantics rather than plain INSERT.
    #[instrument(skip(self), fields(name = %name), err)]
    pub async fn insert_or_ignore(&mut self, name: &str, description: &str) -> Result<()> {
        sqlx::query("INSERT OR IGNORE INTO categories (name, description) VALUES (?, ?)")
            .bind(name)
            .bind(description)
            .execute(&mut *self.db)
            .await?;

        Ok(())
    }

    /// List all categories ordered by name.
    #[instrument(skip(self), err)]
    pub async fn list(&mut self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, description FROM categories ORDER BY name",
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(categories)
    }
}
