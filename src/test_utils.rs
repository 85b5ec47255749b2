//! Shared test utilities for `Herdbook`.
//!
//! Helpers for building a record store over a throwaway data directory
//! and creating test entities with sensible defaults.

#![allow(clippy::unwrap_used)]
#![allow(clippy::missing_panics_doc)]

use crate::config::{AppConfig, PricingConfig, RanchConfig, StorageConfig};
use crate::core::livestock;
use crate::entities::{Animal, Category};
use crate::store::{RecordStore, migrate};
use tempfile::TempDir;

/// Builds a configuration rooted at a fresh temp directory.
///
/// # Defaults
/// * `owner_name`: "Higor Azevedo"
/// * `weight_unit_kg`: 30.0
pub fn scratch_config() -> (TempDir, AppConfig) {
    let dir = TempDir::new().unwrap();
    let config = AppConfig {
        ranch: RanchConfig {
            owner_name: "Higor Azevedo".to_string(),
        },
        storage: StorageConfig::new(dir.path()),
        pricing: PricingConfig::default(),
    };
    (dir, config)
}

/// A store over a fresh data directory with seeding and migration already
/// run. This is the standard setup for ledger tests.
pub fn seeded_store() -> (TempDir, AppConfig, RecordStore) {
    let (dir, config) = scratch_config();
    let store = RecordStore::new(config.storage.clone());
    migrate::run_startup(&store, &config).unwrap();
    (dir, config, store)
}

/// Registers a test animal with sensible defaults.
///
/// # Defaults
/// * `category`: Feeder-Steer
/// * `weight_kg`: 300.0
/// * `purchase_cost`: 2000.0
/// * `pasture`: "Pasture 01" (the seeded one)
/// * actor: "test-operator"
pub fn intake_test_animal(store: &RecordStore, tag: &str) -> Animal {
    livestock::intake(
        store,
        "test-operator",
        tag,
        Category::FeederSteer,
        300.0,
        2000.0,
        "Pasture 01",
    )
    .unwrap()
}
