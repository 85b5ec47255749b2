//! Pasture entity - a named grazing area.
//!
//! `name` is the unique key and the target of the weak reference carried
//! by animals. Deleting a pasture that animals still reference leaves
//! their reference dangling; the ledger does not validate it.

use super::Record;
use serde::{Deserialize, Serialize};

/// One row of the pasture register.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pasture {
    /// Unique pasture name, referenced by animals
    pub name: String,
    /// Area in hectares, non-negative
    pub area_ha: f64,
    /// Forage species planted, free text
    pub forage_type: String,
}

impl Record for Pasture {
    fn key(&self) -> String {
        self.name.clone()
    }
}
