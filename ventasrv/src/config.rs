//! Configuration loading and validation.
//!
//! Configuration is layered: a YAML file (default `config.yaml`, overridable
//! with `-f/--config`) merged with `VENTASRV_`-prefixed environment
//! variables, nested keys split on `__`:
//!
//! ```bash
//! VENTASRV_PORT=8080
//! VENTASRV_DATABASE__PATH=/var/lib/ventasrv/ventas
//! VENTASRV_SEED__CSV_PATH=/srv/seed/VentasProductosSupermercados.csv
//! ```

use clap::Parser;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::Error;

/// Simple CLI args - just for specifying config file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file
    #[arg(short = 'f', long, env = "VENTASRV_CONFIG", default_value = "config.yaml")]
    pub config: String,

    /// Validate configuration and exit without starting the server.
    /// Useful for CI/CD pipelines to catch config errors before deployment.
    #[arg(long)]
    pub validate: bool,
}

/// Main application configuration.
///
/// Loaded from YAML and environment variables; every field has a default,
/// so the service runs with no config file at all (port 7050, `data/`
/// relative paths).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// HTTP server host to bind to (e.g., "0.0.0.0" for all interfaces)
    pub host: String,
    /// HTTP server port to bind to
    pub port: u16,
    /// SQLite store configuration
    pub database: DatabaseConfig,
    /// Seed import configuration
    pub seed: SeedConfig,
}

/// Settings for the embedded SQLite store.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Path of the database file; created (with its parent directory) when
    /// missing.
    pub path: PathBuf,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Maximum time to wait for a connection (seconds)
    pub acquire_timeout_secs: u64,
}

/// Settings for the one-time CSV seed import.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    /// Path of the tabular source file read when the sales table is empty.
    pub csv_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 7050,
            database: DatabaseConfig::default(),
            seed: SeedConfig::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/ventas"),
            max_connections: 5,
            acquire_timeout_secs: 30,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("data/VentasProductosSupermercados.csv"),
        }
    }
}

impl Config {
    #[allow(clippy::result_large_err)]
    pub fn load(args: &Args) -> Result<Self, figment::Error> {
        let config: Self = Self::figment(args).extract()?;
        config.validate().map_err(|e| figment::Error::from(e.to_string()))?;
        Ok(config)
    }

    /// Validate the configuration for consistency and required fields
    pub fn validate(&self) -> Result<(), Error> {
        if self.database.max_connections == 0 {
            return Err(Error::Internal {
                operation: "Config validation: database.max_connections must be at least 1".to_string(),
            });
        }
        if self.database.path.as_os_str().is_empty() {
            return Err(Error::Internal {
                operation: "Config validation: database.path must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn figment(args: &Args) -> Figment {
        Figment::new()
            // Load base config file
            .merge(Yaml::file(&args.config))
            // Environment variables can still override specific values
            .merge(Env::prefixed("VENTASRV_").split("__"))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn test_args(path: &str) -> Args {
        Args {
            config: path.to_string(),
            validate: false,
        }
    }

    #[test]
    fn defaults_stand_alone_without_a_config_file() {
        Jail::expect_with(|_jail| {
            let config = Config::load(&test_args("missing.yaml"))?;

            assert_eq!(config.port, 7050);
            assert_eq!(config.host, "0.0.0.0");
            assert_eq!(config.database.path, PathBuf::from("data/ventas"));
            assert_eq!(
                config.seed.csv_path,
                PathBuf::from("data/VentasProductosSupermercados.csv")
            );
            assert_eq!(config.bind_address(), "0.0.0.0:7050");
            Ok(())
        });
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "test.yaml",
                r#"
port: 9000
database:
  path: /tmp/store.db
  max_connections: 2
seed:
  csv_path: /tmp/seed.csv
"#,
            )?;

            let config = Config::load(&test_args("test.yaml"))?;
            assert_eq!(config.port, 9000);
            assert_eq!(config.database.path, PathBuf::from("/tmp/store.db"));
            assert_eq!(config.database.max_connections, 2);
            assert_eq!(config.seed.csv_path, PathBuf::from("/tmp/seed.csv"));
            Ok(())
        });
    }

    #[test]
    fn env_overrides_yaml() {
        Jail::expect_with(|jail| {
            jail.create_file("test.yaml", "port: 9000\n")?;
            jail.set_env("VENTASRV_PORT", "9100");
            jail.set_env("VENTASRV_DATABASE__MAX_CONNECTIONS", "7");

            let config = Config::load(&test_args("test.yaml"))?;
            assert_eq!(config.port, 9100);
            assert_eq!(config.database.max_connections, 7);
            Ok(())
        });
    }

    #[test]
    fn zero_connections_fails_validation() {
        Jail::expect_with(|jail| {
            jail.create_file("test.yaml", "database:\n  max_connections: 0\n")?;

            assert!(Config::load(&test_args("test.yaml")).is_err());
            Ok(())
        });
    }
}
