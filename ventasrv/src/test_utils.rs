//! Shared helpers for the in-crate test modules.

use std::io::Write;
use std::str::FromStr;

use axum_test::TestServer;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::{AppState, Config, build_router, db};

/// Open an in-memory SQLite pool with the schema applied.
///
/// A single connection is mandatory: every in-memory connection gets its own
/// private database.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("failed to parse in-memory connection string")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("failed to open in-memory database");

    db::schema::init(&pool).await.expect("failed to initialize schema");
    pool
}

/// Build a `TestServer` over the full router with a fresh in-memory store.
pub async fn create_test_app() -> (TestServer, SqlitePool) {
    let pool = test_pool().await;
    let state = AppState {
        db: pool.clone(),
        config: Config::default(),
    };
    let server = TestServer::new(build_router(state)).expect("failed to create test server");
    (server, pool)
}

/// Insert a category fixture, returning its id.
pub async fn insert_category(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query("INSERT INTO categories (name, description) VALUES (?, ?)")
        .bind(name)
        .bind(format!("Categoría: {name}"))
        .execute(pool)
        .await
        .expect("failed to insert category fixture")
        .last_insert_rowid()
}

/// Insert a sale fixture, returning its id.
pub async fn insert_sale(pool: &SqlitePool, date: &str, category_id: i64, quantity: i64) -> i64 {
    sqlx::query("INSERT INTO sales (date, category_id, quantity) VALUES (?, ?, ?)")
        .bind(date)
        .bind(category_id)
        .bind(quantity)
        .execute(pool)
        .await
        .expect("failed to insert sale fixture")
        .last_insert_rowid()
}

/// Write CSV content to a temp file the importer can read.
pub fn write_seed_csv(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create temp CSV");
    file.write_all(content.as_bytes()).expect("failed to write temp CSV");
    file.flush().expect("failed to flush temp CSV");
    file
}
