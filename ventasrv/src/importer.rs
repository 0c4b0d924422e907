//! One-shot CSV seed import.
//!
//! On startup, once the schema exists and before the listener binds, the
//! importer checks whether the sales table is empty and, if so, transforms
//! the tabular source file into category and sale rows inside a single
//! transaction. The source file has one `indice_tiempo` column and one
//! column per category name; every non-empty cell under a recognized
//! category becomes one sale row.
//!
//! The transaction is the recovery unit: any failure after `begin` drops the
//! transaction and rolls back everything, including the category inserts.
//! Seeding has no caller awaiting its result, so the application logs
//! failures and starts anyway.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use crate::db::handlers::Categories;

/// Header naming the time-index column of the source file.
const TIME_INDEX_COLUMN: &str = "indice_tiempo";

/// The fixed category set expected in the source file's header row.
pub const SEED_CATEGORIES: [&str; 11] = [
    "Carnes",
    "Verduras",
    "Frutas",
    "Bebidas",
    "Lacteos",
    "Panificados",
    "Limpieza",
    "Perfumeria",
    "Alimentos Secos",
    "Congelados",
    "Fiambres",
];

/// What a completed import wrote.
#[derive(Debug, Clone, Copy)]
pub struct ImportSummary {
    /// Categories known after the read-back (inserted or pre-existing).
    pub categories: usize,
    /// Sale rows inserted from the source file.
    pub sales_inserted: u64,
}

/// Run the seed import if the sales table is empty.
///
/// Returns `Ok(None)` when the import was skipped (data already present, or
/// the emptiness probe itself failed - seeding is a startup side effect, not
/// a request anyone is waiting on).
pub async fn run(pool: &SqlitePool, csv_path: &Path) -> Result<Option<ImportSummary>> {
    let count: i64 = match sqlx::query_scalar("SELECT COUNT(*) FROM sales").fetch_one(pool).await {
        Ok(count) => count,
        Err(err) => {
            warn!("Skipping seed import, could not probe the sales table: {err}");
            return Ok(None);
        }
    };
    if count > 0 {
        debug!(rows = count, "Sales table already populated, skipping seed import");
        return Ok(None);
    }

    info!(csv = %csv_path.display(), "Loading and transforming seed data from CSV");

    let mut tx = pool.begin().await.context("failed to open seed transaction")?;

    // Ignore-on-conflict: the categories may pre-exist from a prior partial
    // run whose sale inserts rolled back.
    let categories_by_name: BTreeMap<String, i64>;
    {
        let mut repo = Categories::new(&mut tx);
        for name in SEED_CATEGORIES {
            repo.insert_or_ignore(name, &format!("Categoría: {name}"))
                .await
                .with_context(|| format!("failed to insert category {name}"))?;
        }
        categories_by_name = repo
            .list()
            .await
            .context("failed to read back categories")?
            .into_iter()
            .map(|c| (c.name, c.id))
            .collect();
    }

    let file = File::open(csv_path)
        .with_context(|| format!("failed to open seed CSV at {}", csv_path.display()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers().context("failed to read CSV headers")?.clone();
    let time_idx = headers
        .iter()
        .position(|h| h == TIME_INDEX_COLUMN)
        .with_context(|| format!("seed CSV has no {TIME_INDEX_COLUMN} column"))?;
    let category_columns: Vec<(usize, i64)> = headers
        .iter()
        .enumerate()
        .filter_map(|(idx, name)| categories_by_name.get(name).map(|id| (idx, *id)))
        .collect();

    let mut inserted = 0u64;
    for record in reader.records() {
        let record = record.context("failed to read CSV record")?;
        let date = match record.get(time_idx) {
            Some(date) if !date.is_empty() => date,
            _ => {
                warn!("Skipping CSV record without a time-index value");
                continue;
            }
        };

        for &(idx, category_id) in &category_columns {
            let Some(cell) = record.get(idx) else { continue };
            if cell.is_empty() {
                continue;
            }
            match parse_quantity(cell) {
                Some(quantity) => {
                    sqlx::query("INSERT INTO sales (date, category_id, quantity) VALUES (?, ?, ?)")
                        .bind(date)
                        .bind(category_id)
                        .bind(quantity)
                        .execute(&mut *tx)
                        .await
                        .context("failed to insert sale row")?;
                    inserted += 1;
                }
                None => {
                    warn!(cell = %cell, date = %date, "Skipping unparseable quantity cell");
                }
            }
        }
    }

    tx.commit().await.context("failed to commit seed transaction")?;

    let summary = ImportSummary {
        categories: categories_by_name.len(),
        sales_inserted: inserted,
    };
    info!(
        categories = summary.categories,
        sales = summary.sales_inserted,
        "Seed import completed"
    );
    Ok(Some(summary))
}

/// Parse a quantity cell.
///
/// The source data carries plain integers, but some exports write decimal
/// strings; those truncate toward zero. Anything else is unparseable and the
/// cell is skipped.
fn parse_quantity(cell: &str) -> Option<i64> {
    let cell = cell.trim();
    if let Ok(quantity) = cell.parse::<i64>() {
        return Some(quantity);
    }
    match cell.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value.trunc() as i64),
        _ => None,
    }
}
