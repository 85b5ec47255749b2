//! Livestock ledger - CRUD over the animal inventory.
//!
//! Animals are created on intake and mutated only on exit; weight, cost,
//! and pasture are frozen at intake. Exits are batch operations over an
//! operator selection, and a selection may be stale: ids that no longer
//! match any row are skipped silently rather than failing the batch.

use crate::entities::{Animal, Category, ExitReason, Status};
use crate::errors::{Error, Result};
use crate::store::{Entity, RecordStore};
use chrono::{Local, NaiveDate};
use tracing::info;

/// Registers a new animal: fresh id, Active status, entry date of today,
/// empty exit fields.
///
/// Negative weight or cost is rejected with [`Error::Validation`].
pub fn intake(
    store: &RecordStore,
    actor: &str,
    tag: &str,
    category: Category,
    weight_kg: f64,
    purchase_cost: f64,
    pasture: &str,
) -> Result<Animal> {
    if weight_kg < 0.0 {
        return Err(Error::Validation {
            message: format!("weight_kg must be non-negative, got {weight_kg}"),
        });
    }
    if purchase_cost < 0.0 {
        return Err(Error::Validation {
            message: format!("purchase_cost must be non-negative, got {purchase_cost}"),
        });
    }

    let animal = store.update(Entity::Livestock, |animals: &mut Vec<Animal>| {
        let id = animals.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let animal = Animal {
            id,
            tag: tag.to_string(),
            category,
            weight_kg,
            purchase_cost,
            entry_date: Local::now().date_naive(),
            pasture: pasture.to_string(),
            status: Status::Active,
            exit_date: None,
            exit_reason: None,
            sale_value: None,
        };
        animals.push(animal.clone());
        animal
    })?;

    info!(actor, id = animal.id, tag, "animal intake recorded");
    Ok(animal)
}

/// Marks every animal in `ids` as exited: status flips to Inactive and the
/// exit date and reason are set together, preserving the invariant that
/// the three always change as one.
///
/// Ids that match no row are skipped silently - batch selections are
/// allowed to be stale. When `sale_value` is given, the total is split
/// evenly across the animals that actually matched. Returns how many
/// animals transitioned.
pub fn exit_batch(
    store: &RecordStore,
    actor: &str,
    ids: &[u64],
    reason: ExitReason,
    exit_date: NaiveDate,
    sale_value: Option<f64>,
) -> Result<usize> {
    let exited = store.update(Entity::Livestock, |animals: &mut Vec<Animal>| {
        let matched = animals.iter().filter(|a| ids.contains(&a.id)).count();
        if matched == 0 {
            return 0;
        }
        #[allow(clippy::cast_precision_loss)]
        let share = sale_value.map(|total| total / matched as f64);

        for animal in animals.iter_mut().filter(|a| ids.contains(&a.id)) {
            animal.status = Status::Inactive;
            animal.exit_date = Some(exit_date);
            animal.exit_reason = Some(reason);
            // A re-exit without proceeds must not erase proceeds already
            // on record.
            if share.is_some() {
                animal.sale_value = share;
            }
        }
        matched
    })?;

    info!(actor, exited, ?reason, "batch exit recorded");
    Ok(exited)
}

/// Hard-deletes an animal row. This is the data-entry correction path:
/// irreversible, no tombstone. Unknown ids are a no-op; returns whether a
/// row was removed.
pub fn remove(store: &RecordStore, actor: &str, id: u64) -> Result<bool> {
    let removed = store.update(Entity::Livestock, |animals: &mut Vec<Animal>| {
        let before = animals.len();
        animals.retain(|a| a.id != id);
        animals.len() < before
    })?;

    if removed {
        info!(actor, id, "animal row removed");
    }
    Ok(removed)
}

/// Animals presently on the property.
pub fn list_active(store: &RecordStore) -> Result<Vec<Animal>> {
    Ok(list_all(store)?
        .into_iter()
        .filter(Animal::is_active)
        .collect())
}

/// Every animal ever recorded, departed ones included.
pub fn list_all(store: &RecordStore) -> Result<Vec<Animal>> {
    store.load(Entity::Livestock)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{intake_test_animal, seeded_store};

    fn exit_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_intake_assigns_fresh_ids_and_active_status() {
        let (_dir, _config, store) = seeded_store();
        let first = intake_test_animal(&store, "BR-01");
        let second = intake_test_animal(&store, "BR-02");

        assert_eq!(first.status, Status::Active);
        assert_eq!(first.exit_date, None);
        assert_eq!(first.exit_reason, None);
        assert!(second.id > first.id);
        assert_eq!(list_active(&store).unwrap().len(), 2);
    }

    #[test]
    fn test_intake_rejects_negative_weight_and_cost() {
        let (_dir, _config, store) = seeded_store();
        let weight = intake(
            &store,
            "test-operator",
            "BR-01",
            Category::Cow,
            -1.0,
            100.0,
            "Pasture 01",
        );
        assert!(matches!(weight, Err(Error::Validation { .. })));

        let cost = intake(
            &store,
            "test-operator",
            "BR-01",
            Category::Cow,
            100.0,
            -1.0,
            "Pasture 01",
        );
        assert!(matches!(cost, Err(Error::Validation { .. })));
        assert!(list_all(&store).unwrap().is_empty());
    }

    #[test]
    fn test_exit_flips_status_and_exit_fields_together() {
        let (_dir, _config, store) = seeded_store();
        let animal = intake_test_animal(&store, "BR-01");
        assert!(animal.is_active());

        exit_batch(
            &store,
            "test-operator",
            &[animal.id],
            ExitReason::Sale,
            exit_date(),
            None,
        )
        .unwrap();

        let reloaded = &list_all(&store).unwrap()[0];
        assert_eq!(reloaded.status, Status::Inactive);
        assert_eq!(reloaded.exit_date, Some(exit_date()));
        assert_eq!(reloaded.exit_reason, Some(ExitReason::Sale));
        assert!(list_active(&store).unwrap().is_empty());
    }

    #[test]
    fn test_exit_batch_tolerates_stale_ids() {
        let (_dir, _config, store) = seeded_store();
        let animal = intake_test_animal(&store, "BR-01");

        let exited = exit_batch(
            &store,
            "test-operator",
            &[animal.id, 999_999],
            ExitReason::Death,
            exit_date(),
            None,
        )
        .unwrap();

        assert_eq!(exited, 1);
        let all = list_all(&store).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status, Status::Inactive);
    }

    #[test]
    fn test_exit_batch_splits_sale_value_evenly() {
        let (_dir, _config, store) = seeded_store();
        let a = intake_test_animal(&store, "BR-01");
        let b = intake_test_animal(&store, "BR-02");

        exit_batch(
            &store,
            "test-operator",
            &[a.id, b.id],
            ExitReason::Sale,
            exit_date(),
            Some(9000.0),
        )
        .unwrap();

        let all = list_all(&store).unwrap();
        assert_eq!(all[0].sale_value, Some(4500.0));
        assert_eq!(all[1].sale_value, Some(4500.0));
    }

    #[test]
    fn test_reexit_without_proceeds_keeps_recorded_sale_value() {
        let (_dir, _config, store) = seeded_store();
        let animal = intake_test_animal(&store, "BR-01");

        exit_batch(
            &store,
            "test-operator",
            &[animal.id],
            ExitReason::Sale,
            exit_date(),
            Some(1000.0),
        )
        .unwrap();

        // Re-submitting the same selection without a sale value, as a
        // stale screen would, must not blank the recorded proceeds.
        exit_batch(
            &store,
            "test-operator",
            &[animal.id],
            ExitReason::Sale,
            exit_date(),
            None,
        )
        .unwrap();

        let reloaded = &list_all(&store).unwrap()[0];
        assert_eq!(reloaded.sale_value, Some(1000.0));
        assert_eq!(reloaded.status, Status::Inactive);
    }

    #[test]
    fn test_exit_batch_with_no_matches_changes_nothing() {
        let (_dir, _config, store) = seeded_store();
        intake_test_animal(&store, "BR-01");

        let exited = exit_batch(
            &store,
            "test-operator",
            &[999_999],
            ExitReason::Theft,
            exit_date(),
            Some(1000.0),
        )
        .unwrap();

        assert_eq!(exited, 0);
        assert_eq!(list_active(&store).unwrap().len(), 1);
    }

    #[test]
    fn test_remove_is_a_silent_no_op_for_unknown_ids() {
        let (_dir, _config, store) = seeded_store();
        let animal = intake_test_animal(&store, "BR-01");

        assert!(!remove(&store, "test-operator", 999_999).unwrap());
        assert_eq!(list_all(&store).unwrap().len(), 1);

        assert!(remove(&store, "test-operator", animal.id).unwrap());
        assert!(list_all(&store).unwrap().is_empty());
    }
}
