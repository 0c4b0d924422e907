//! # ventasrv: Supermarket Sales Records Service
//!
//! `ventasrv` is a small HTTP service that stores sales observations
//! (date, product category, quantity) in an embedded SQLite store, seeds the
//! store once from a CSV source, and exposes CRUD endpoints consumed by a
//! minimal browser form served from the same binary.
//!
//! ## Request Flow
//!
//! Requests to `/api/*` go through the Axum router to a handler, which
//! validates presence of its inputs, acquires a pool connection, and runs
//! the operation through a repository from [`db::handlers`]. Everything else
//! falls through to the embedded static assets (the browser form).
//!
//! ## Startup Sequence
//!
//! [`Application::new`] opens the SQLite pool (creating the database file
//! and its parent directory when missing, with foreign keys enforced), runs
//! the idempotent schema initialization, and then runs the one-shot seed
//! import ([`importer`]) to completion. Only afterwards does
//! [`Application::serve`] bind the listener, so the first incoming request
//! can never observe a half-seeded store. A schema failure aborts startup;
//! a seed failure is logged and the service starts unseeded.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use ventasrv::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = ventasrv::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     ventasrv::telemetry::init_telemetry()?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
pub mod importer;
mod openapi;
mod static_assets;
pub mod telemetry;

#[cfg(test)]
pub mod test_utils;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, put},
};
pub use config::Config;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{Level, debug, info, warn};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Config,
}

/// Open the SQLite pool and ensure the schema exists.
///
/// The database file and its parent directory are created when missing;
/// foreign-key enforcement is switched on for every connection (SQLite
/// leaves the pragma off otherwise, and the sales table's category
/// reference depends on it).
pub async fn setup_database(config: &Config) -> anyhow::Result<SqlitePool> {
    if let Some(parent) = config.database.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(&config.database.path)
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .connect_with(options)
        .await
        .with_context(|| format!("failed to open database at {}", config.database.path.display()))?;

    db::schema::init(&pool).await.context("failed to initialize database schema")?;

    Ok(pool)
}

/// Build the service router: the JSON API, the OpenAPI docs, and the
/// embedded browser form as the fallback.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/alimentos", get(api::handlers::categories::list_categories))
        .route(
            "/api/ventas",
            get(api::handlers::sales::list_sales).post(api::handlers::sales::create_sale),
        )
        .route("/api/ventas/fecha/{fecha}", get(api::handlers::sales::sales_by_date))
        .route("/api/ventas/rango_fecha", get(api::handlers::sales::sales_by_range))
        .route(
            "/api/ventas/{id}",
            put(api::handlers::sales::update_sale).delete(api::handlers::sales::delete_sale),
        )
        .with_state(state)
        .merge(Scalar::with_url("/docs", openapi::ApiDoc::openapi()))
        .fallback(api::handlers::static_assets::serve_embedded_asset)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        )
}

pub struct Application {
    router: Router,
    config: Config,
    pool: SqlitePool,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting sales service with configuration: {:#?}", config);

        let pool = setup_database(&config).await?;

        // Seeding is a startup side effect with no caller awaiting its
        // result: failures are logged, not surfaced.
        if let Err(err) = importer::run(&pool, &config.seed.csv_path).await {
            warn!("Seed import failed, starting with an unseeded store: {err:#}");
        }

        let state = AppState { db: pool.clone(), config: config.clone() };
        let router = build_router(state);

        Ok(Self { router, config, pool })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "Sales service listening on http://{}, available at http://localhost:{}",
            bind_addr, self.config.port
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}
