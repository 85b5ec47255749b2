//! Application configuration loaded from `config.toml`.
//!
//! The configuration carries the storage layout (where the CSV tables
//! live), the valuation constants, and the ranch identity used by the
//! migrator's owner-role repair. Ambient state is deliberately avoided:
//! the parsed [`AppConfig`] is threaded explicitly into the record store
//! and the valuation engine.

/// Valuation constants (weight-to-price-unit conversion)
pub mod pricing;
/// Data directory and per-entity file layout
pub mod storage;

pub use pricing::PricingConfig;
pub use storage::StorageConfig;

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Ranch identity section of the configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RanchConfig {
    /// Name of the ranch owner; the staff row matching this name exactly
    /// is always re-asserted as `Owner` by the migrator.
    pub owner_name: String,
}

/// The entire parsed `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Ranch identity
    pub ranch: RanchConfig,
    /// Storage layout
    #[serde(default)]
    pub storage: StorageConfig,
    /// Valuation constants
    #[serde(default)]
    pub pricing: PricingConfig,
}

/// Loads the application configuration from a TOML file.
///
/// After parsing, the `HERDBOOK_DATA_DIR` environment variable (if set)
/// overrides the configured data directory, mirroring how deployments
/// relocate the data set without editing the config file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    let mut config: AppConfig = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;

    if let Ok(dir) = std::env::var("HERDBOOK_DATA_DIR") {
        config.storage.data_dir = dir.into();
    }

    Ok(config)
}

/// Loads the configuration from the default location (`./config.toml`).
pub fn load_default_config() -> Result<AppConfig> {
    load_config("config.toml")
}
