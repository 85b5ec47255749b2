//! Payroll ledger - day-labor entries and the fixed-staff roster.
//!
//! Day-labor entries are append-only; `total_paid` is computed once at
//! insertion and stored, so later rate changes never rewrite history.
//! Roster edits are keyed by id and applied in place, which closes the
//! duplicate-name hazard of editing by name.

use crate::entities::{DayLaborEntry, Role, StaffMember, Status};
use crate::errors::{Error, Result};
use crate::store::{Entity, RecordStore};
use chrono::Local;
use tracing::info;

/// Records one paid stint of day labor, dated today. `total_paid` is
/// frozen at `daily_rate * days_worked` and never recomputed.
///
/// Negative rate or days are rejected with [`Error::Validation`].
pub fn record_day_labor(
    store: &RecordStore,
    actor: &str,
    worker_name: &str,
    service: &str,
    daily_rate: f64,
    days_worked: f64,
    notes: &str,
) -> Result<DayLaborEntry> {
    if daily_rate < 0.0 {
        return Err(Error::Validation {
            message: format!("daily_rate must be non-negative, got {daily_rate}"),
        });
    }
    if days_worked < 0.0 {
        return Err(Error::Validation {
            message: format!("days_worked must be non-negative, got {days_worked}"),
        });
    }

    let entry = DayLaborEntry {
        date: Local::now().date_naive(),
        worker_name: worker_name.to_string(),
        service: service.to_string(),
        daily_rate,
        days_worked,
        total_paid: daily_rate * days_worked,
        notes: notes.to_string(),
    };

    store.update(Entity::DayLabor, |entries: &mut Vec<DayLaborEntry>| {
        entries.push(entry.clone());
    })?;

    info!(actor, worker_name, total_paid = entry.total_paid, "day labor recorded");
    Ok(entry)
}

/// Sum of every stored `total_paid`. This is the operating cost the
/// valuation engine subtracts from the gross margin.
pub fn payroll_total(store: &RecordStore) -> Result<f64> {
    let entries: Vec<DayLaborEntry> = store.load(Entity::DayLabor)?;
    Ok(entries.iter().map(|e| e.total_paid).sum())
}

/// Every day-labor entry, oldest first.
pub fn list_day_labor(store: &RecordStore) -> Result<Vec<DayLaborEntry>> {
    store.load(Entity::DayLabor)
}

/// Inserts or edits a roster member.
///
/// With `id = None` a new row is inserted under a fresh id. With
/// `Some(id)` the matching row is updated in place, keeping its status;
/// an id that matches no row yields [`Error::StaffNotFound`].
pub fn upsert_staff(
    store: &RecordStore,
    actor: &str,
    id: Option<u64>,
    name: &str,
    role: Role,
    function: &str,
    phone: &str,
) -> Result<StaffMember> {
    let result = store.update(Entity::Staff, |staff: &mut Vec<StaffMember>| match id {
        Some(id) => {
            let Some(member) = staff.iter_mut().find(|m| m.id == id) else {
                return Err(Error::StaffNotFound { id });
            };
            member.name = name.to_string();
            member.role = role;
            member.function = function.to_string();
            member.phone = phone.to_string();
            Ok(member.clone())
        }
        None => {
            let id = staff.iter().map(|m| m.id).max().unwrap_or(0) + 1;
            let member = StaffMember {
                id,
                name: name.to_string(),
                role,
                function: function.to_string(),
                phone: phone.to_string(),
                status: Status::Active,
            };
            staff.push(member.clone());
            Ok(member)
        }
    })?;
    let member = result?;

    info!(actor, id = member.id, name, ?role, "staff roster updated");
    Ok(member)
}

/// Hard-deletes a roster row by id. Unknown ids are a no-op; returns
/// whether a row was removed.
pub fn remove_staff(store: &RecordStore, actor: &str, id: u64) -> Result<bool> {
    let removed = store.update(Entity::Staff, |staff: &mut Vec<StaffMember>| {
        let before = staff.len();
        staff.retain(|m| m.id != id);
        staff.len() < before
    })?;

    if removed {
        info!(actor, id, "staff row removed");
    }
    Ok(removed)
}

/// The full roster.
pub fn list_staff(store: &RecordStore) -> Result<Vec<StaffMember>> {
    store.load(Entity::Staff)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::seeded_store;

    #[test]
    fn test_total_paid_is_frozen_at_insertion() {
        let (_dir, _config, store) = seeded_store();
        let first = record_day_labor(
            &store,
            "test-operator",
            "Jose",
            "Fence repair",
            100.0,
            3.0,
            "",
        )
        .unwrap();
        assert_eq!(first.total_paid, 300.0);

        // A later entry at a different rate must not touch the first one.
        record_day_labor(&store, "test-operator", "Jose", "Branding", 180.0, 2.0, "").unwrap();

        let entries = list_day_labor(&store).unwrap();
        assert_eq!(entries[0].total_paid, 300.0);
        assert_eq!(entries[1].total_paid, 360.0);
        assert_eq!(payroll_total(&store).unwrap(), 660.0);
    }

    #[test]
    fn test_record_day_labor_rejects_negative_inputs() {
        let (_dir, _config, store) = seeded_store();
        let rate = record_day_labor(&store, "test-operator", "Jose", "x", -1.0, 1.0, "");
        assert!(matches!(rate, Err(Error::Validation { .. })));
        let days = record_day_labor(&store, "test-operator", "Jose", "x", 100.0, -1.0, "");
        assert!(matches!(days, Err(Error::Validation { .. })));
        assert_eq!(payroll_total(&store).unwrap(), 0.0);
    }

    #[test]
    fn test_upsert_staff_inserts_with_fresh_id() {
        let (_dir, _config, store) = seeded_store();
        // The seeded owner holds id 1.
        let member = upsert_staff(
            &store,
            "test-operator",
            None,
            "Jose Silva",
            Role::Hand,
            "General",
            "",
        )
        .unwrap();
        assert_eq!(member.id, 2);
        assert_eq!(member.status, Status::Active);
        assert_eq!(list_staff(&store).unwrap().len(), 2);
    }

    #[test]
    fn test_upsert_staff_edits_in_place_by_id() {
        let (_dir, _config, store) = seeded_store();
        let member = upsert_staff(
            &store,
            "test-operator",
            None,
            "Jose Silva",
            Role::Hand,
            "General",
            "",
        )
        .unwrap();

        let edited = upsert_staff(
            &store,
            "test-operator",
            Some(member.id),
            "Jose Silva",
            Role::Foreman,
            "Cattle work",
            "555-0101",
        )
        .unwrap();

        assert_eq!(edited.id, member.id);
        let roster = list_staff(&store).unwrap();
        // Same row count: the edit did not go through delete-then-reinsert.
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[1].role, Role::Foreman);
        assert_eq!(roster[1].phone, "555-0101");
    }

    #[test]
    fn test_upsert_staff_with_unknown_id_is_an_error() {
        let (_dir, _config, store) = seeded_store();
        let result = upsert_staff(
            &store,
            "test-operator",
            Some(404),
            "Nobody",
            Role::Hand,
            "",
            "",
        );
        assert!(matches!(result, Err(Error::StaffNotFound { id: 404 })));
    }

    #[test]
    fn test_remove_staff_by_id() {
        let (_dir, _config, store) = seeded_store();
        let member = upsert_staff(
            &store,
            "test-operator",
            None,
            "Jose Silva",
            Role::Hand,
            "General",
            "",
        )
        .unwrap();

        assert!(remove_staff(&store, "test-operator", member.id).unwrap());
        assert!(!remove_staff(&store, "test-operator", member.id).unwrap());
        assert_eq!(list_staff(&store).unwrap().len(), 1);
    }
}
