//! Database repository for sale events.

use crate::db::{
    errors::Result,
    models::sales::{Sale, SaleCreateDBRequest, SaleWithProduct},
};
use sqlx::SqliteConnection;
use tracing::instrument;

/// Filter for listing sales.
///
/// Every read returns rows joined with the category name; the filter only
/// narrows which dates qualify. Bounds of [`SaleFilter::DateRange`] are
/// inclusive on both ends.
#[derive(Debug, Clone)]
pub enum SaleFilter {
    /// All sales, ordered by date then product name.
    All,
    /// Sales on one exact date, ordered by product name.
    ExactDate(String),
    /// Sales with dates between the bounds inclusive, ordered by date then
    /// product name.
    DateRange { from: String, to: String },
}

pub struct Sales<'c> {
    db: &'c mut SqliteConnection,
}

impl<'c> Sales<'c> {
    pub fn new(db: &'c mut SqliteConnection) -> Self {
        Self { db }
    }

    /// Insert a new sale and return the stored row.
    #[instrument(skip(self, request), fields(date = %request.date, category_id = request.category_id), err)]
    pub async fn create(&mut self, request: &SaleCreateDBRequest) -> Result<Sale> {
        let result = sqlx::query("INSERT INTO sales (date, category_id, quantity) VALUES (?, ?, ?)")
            .bind(&request.date)
            .bind(request.category_id)
            .bind(request.quantity)
            .execute(&mut *self.db)
            .await?;

        Ok(Sale {
            id: result.last_insert_rowid(),
            date: request.date.clone(),
            category_id: request.category_id,
            quantity: request.quantity,
        })
    }

    /// Get a sale by ID
    #[instrument(skip(self), err)]
    pub async fn get_by_id(&mut self, id: i64) -> Result<Option<Sale>> {
        let sale = sqlx::query_as::<_, Sale>(
            "SELECT id, date, category_id, quantity FROM sales WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(sale)
    }

    /// List sales joined with their category name.
    ///
    /// Ordering is a stable presentation contract (date ascending, then
    /// product name ascending), not an index-enforced guarantee.
    #[instrument(skip(self), err)]
    pub async fn list(&mut self, filter: &SaleFilter) -> Result<Vec<SaleWithProduct>> {
        let rows = match filter {
            SaleFilter::All => {
                sqlx::query_as::<_, SaleWithProduct>(
                    r#"
                    SELECT s.id, s.date, c.name AS product, s.quantity
                    FROM sales s
                    JOIN categories c ON s.category_id = c.id
                    ORDER BY s.date, c.name
                    "#,
                )
                .fetch_all(&mut *self.db)
                .await?
            }
            SaleFilter::ExactDate(date) => {
                sqlx::query_as::<_, SaleWithProduct>(
                    r#"
                    SELECT s.id, s.date, c.name AS product, s.quantity
                    FROM sales s
                    JOIN categories c ON s.category_id = c.id
                    WHERE s.date = ?
                    ORDER BY c.name
                    "#,
                )
                .bind(date)
                .fetch_all(&mut *self.db)
                .await?
            }
            SaleFilter::DateRange { from, to } => {
                sqlx::query_as::<_, SaleWithProduct>(
                    r#"
                    SELECT s.id, s.date, c.name AS product, s.quantity
                    FROM sales s
                    JOIN categories c ON s.category_id = c.id
                    WHERE s.date BETWEEN ? AND ?
                    ORDER BY s.date, c.name
                    "#,
                )
                .bind(from)
                .bind(to)
                .fetch_all(&mut *self.db)
                .await?
            }
        };

        Ok(rows)
    }

    /// Update a sale's quantity, returning the number of rows changed
    /// (0 when the id is unknown, 1 otherwise).
    #[instrument(skip(self), err)]
    pub async fn update_quantity(&mut self, id: i64, quantity: i64) -> Result<u64> {
        let result = sqlx::query("UPDATE sales SET quantity = ? WHERE id = ?")
            .bind(quantity)
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete a sale, returning the number of rows changed.
    #[instrument(skip(self), err)]
    pub async fn delete(&mut self, id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM sales WHERE id = ?")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::errors::DbError;
    use crate::test_utils::{insert_category, test_pool};

    async fn sample_request(pool: &sqlx::SqlitePool, date: &str, quantity: i64) -> SaleCreateDBRequest {
        let category_id = insert_category(pool, "Carnes").await;
        SaleCreateDBRequest {
            date: date.to_string(),
            category_id,
            quantity,
        }
    }

    #[tokio::test]
    async fn create_and_get_round_trip() {
        let pool = test_pool().await;
        let request = sample_request(&pool, "2025-07-15", 150).await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Sales::new(&mut conn);

        let created = repo.create(&request).await.unwrap();
        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(fetched.date, "2025-07-15");
        assert_eq!(fetched.quantity, 150);
        assert_eq!(fetched.category_id, request.category_id);
    }

    #[tokio::test]
    async fn create_rejects_unknown_category() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Sales::new(&mut conn);

        let err = repo
            .create(&SaleCreateDBRequest {
                date: "2025-07-15".to_string(),
                category_id: 9999,
                quantity: 1,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn list_orders_by_date_then_product() {
        let pool = test_pool().await;
        let carnes = insert_category(&pool, "Carnes").await;
        let bebidas = insert_category(&pool, "Bebidas").await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Sales::new(&mut conn);
        for (date, category_id, quantity) in [
            ("2025-02-01", carnes, 5),
            ("2025-01-01", carnes, 3),
            ("2025-01-01", bebidas, 7),
        ] {
            repo.create(&SaleCreateDBRequest {
                date: date.to_string(),
                category_id,
                quantity,
            })
            .await
            .unwrap();
        }

        let rows = repo.list(&SaleFilter::All).await.unwrap();
        let keys: Vec<(String, String)> =
            rows.into_iter().map(|r| (r.date, r.product)).collect();
        assert_eq!(
            keys,
            vec![
                ("2025-01-01".to_string(), "Bebidas".to_string()),
                ("2025-01-01".to_string(), "Carnes".to_string()),
                ("2025-02-01".to_string(), "Carnes".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn range_bounds_are_inclusive() {
        let pool = test_pool().await;
        let category_id = insert_category(&pool, "Frutas").await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Sales::new(&mut conn);
        for date in ["2024-12-31", "2025-01-01", "2025-06-30", "2025-12-31", "2026-01-01"] {
            repo.create(&SaleCreateDBRequest {
                date: date.to_string(),
                category_id,
                quantity: 1,
            })
            .await
            .unwrap();
        }

        let rows = repo
            .list(&SaleFilter::DateRange {
                from: "2025-01-01".to_string(),
                to: "2025-12-31".to_string(),
            })
            .await
            .unwrap();

        let dates: Vec<String> = rows.into_iter().map(|r| r.date).collect();
        assert_eq!(dates, vec!["2025-01-01", "2025-06-30", "2025-12-31"]);
    }

    #[tokio::test]
    async fn update_quantity_touches_only_quantity() {
        let pool = test_pool().await;
        let request = sample_request(&pool, "2025-03-10", 20).await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Sales::new(&mut conn);
        let created = repo.create(&request).await.unwrap();

        let changed = repo.update_quantity(created.id, 99).await.unwrap();
        assert_eq!(changed, 1);

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.quantity, 99);
        assert_eq!(fetched.date, "2025-03-10");
        assert_eq!(fetched.category_id, request.category_id);

        assert_eq!(repo.update_quantity(123456, 1).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn delete_reports_rows_changed() {
        let pool = test_pool().await;
        let request = sample_request(&pool, "2025-03-10", 20).await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Sales::new(&mut conn);
        let created = repo.create(&request).await.unwrap();

        assert_eq!(repo.delete(created.id).await.unwrap(), 1);
        assert_eq!(repo.delete(created.id).await.unwrap(), 0);
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }
}
