//! Storage layout configuration.
//!
//! Maps each entity to its CSV file inside a single data directory. The
//! mapping is an explicit value handed to the record store constructor,
//! not a module-level table, so tests can point a store at a throwaway
//! directory.

use crate::store::Entity;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Where the CSV tables live.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory containing one CSV file per entity.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    /// Creates a layout rooted at the given directory.
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Full path of the CSV file backing an entity.
    #[must_use]
    pub fn path_for(&self, entity: Entity) -> PathBuf {
        self.data_dir.join(entity.file_name())
    }
}
