//! Pasture register - named grazing areas referenced by animals.
//!
//! `name` is the key: saving an existing name replaces that row. Deleting
//! a pasture that animals still reference leaves their reference dangling
//! on purpose; referential integrity between entities is not enforced.

use crate::entities::Pasture;
use crate::errors::{Error, Result};
use crate::store::{Entity, RecordStore};
use tracing::info;

/// Creates a pasture or replaces the one with the same name.
///
/// Negative area is rejected with [`Error::Validation`].
pub fn upsert_pasture(
    store: &RecordStore,
    actor: &str,
    name: &str,
    area_ha: f64,
    forage_type: &str,
) -> Result<Pasture> {
    if area_ha < 0.0 {
        return Err(Error::Validation {
            message: format!("area_ha must be non-negative, got {area_ha}"),
        });
    }

    let pasture = Pasture {
        name: name.to_string(),
        area_ha,
        forage_type: forage_type.to_string(),
    };

    store.update(Entity::Pastures, |pastures: &mut Vec<Pasture>| {
        pastures.retain(|p| p.name != name);
        pastures.push(pasture.clone());
    })?;

    info!(actor, name, area_ha, "pasture saved");
    Ok(pasture)
}

/// Deletes a pasture by name. Unknown names are a no-op; returns whether
/// a row was removed.
pub fn remove_pasture(store: &RecordStore, actor: &str, name: &str) -> Result<bool> {
    let removed = store.update(Entity::Pastures, |pastures: &mut Vec<Pasture>| {
        let before = pastures.len();
        pastures.retain(|p| p.name != name);
        pastures.len() < before
    })?;

    if removed {
        info!(actor, name, "pasture removed");
    }
    Ok(removed)
}

/// Every registered pasture.
pub fn list_pastures(store: &RecordStore) -> Result<Vec<Pasture>> {
    store.load(Entity::Pastures)
}
