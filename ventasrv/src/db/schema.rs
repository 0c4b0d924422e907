//! Schema initialization for the sales store.
//!
//! Two tables: a lookup table of product categories and a transactional
//! table of sale events referencing it by foreign key. Both are created
//! idempotently at startup; a failure here is fatal, the service cannot run
//! without its schema. There is no migration machinery beyond this.

use sqlx::SqlitePool;
use tracing::debug;

/// Idempotently create the `categories` and `sales` tables.
pub async fn init(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    debug!("Initializing schema");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL UNIQUE,
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sales (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            category_id INTEGER NOT NULL,
            quantity    INTEGER NOT NULL,
            FOREIGN KEY (category_id) REFERENCES categories (id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::test_utils::test_pool;
    use sqlx::Row;

    #[tokio::test]
    async fn init_is_idempotent() {
        // test_pool already ran init once; a second run must be harmless.
        let pool = test_pool().await;
        super::init(&pool).await.unwrap();

        let tables = sqlx::query(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('categories', 'sales') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        let names: Vec<String> = tables.iter().map(|r| r.get::<String, _>("name")).collect();
        assert_eq!(names, vec!["categories", "sales"]);
    }
}
