//! Daily checklist log.
//!
//! Append-only. A day may carry zero or many entries; the routine counts
//! as done on a day as soon as at least one entry exists for it.

use crate::entities::ChecklistEntry;
use crate::errors::Result;
use crate::store::{Entity, RecordStore};
use chrono::NaiveDate;
use tracing::info;

/// Appends one checklist pass with the acting operator as responsible.
pub fn log_entry(
    store: &RecordStore,
    actor: &str,
    date: NaiveDate,
    salt: bool,
    water: bool,
    fence: bool,
    notes: &str,
) -> Result<ChecklistEntry> {
    let entry = ChecklistEntry {
        date,
        responsible: actor.to_string(),
        salt,
        water,
        fence,
        notes: notes.to_string(),
    };

    store.update(Entity::Checklist, |entries: &mut Vec<ChecklistEntry>| {
        entries.push(entry.clone());
    })?;

    info!(actor, date = %date, "checklist entry logged");
    Ok(entry)
}

/// Every entry logged for the given day, in insertion order.
pub fn entries_on(store: &RecordStore, date: NaiveDate) -> Result<Vec<ChecklistEntry>> {
    let entries: Vec<ChecklistEntry> = store.load(Entity::Checklist)?;
    Ok(entries.into_iter().filter(|e| e.date == date).collect())
}

/// Whether the routine was done on the given day: at least one entry
/// exists with that date.
pub fn routine_done_on(store: &RecordStore, date: NaiveDate) -> Result<bool> {
    Ok(!entries_on(store, date)?.is_empty())
}

/// The last `n` entries, oldest of them first.
pub fn recent(store: &RecordStore, n: usize) -> Result<Vec<ChecklistEntry>> {
    let entries: Vec<ChecklistEntry> = store.load(Entity::Checklist)?;
    let skip = entries.len().saturating_sub(n);
    Ok(entries.into_iter().skip(skip).collect())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::seeded_store;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn test_routine_done_requires_at_least_one_entry() {
        let (_dir, _config, store) = seeded_store();
        assert!(!routine_done_on(&store, day(1)).unwrap());

        log_entry(&store, "Jose", day(1), true, true, false, "fence low on west side").unwrap();
        assert!(routine_done_on(&store, day(1)).unwrap());
        assert!(!routine_done_on(&store, day(2)).unwrap());
    }

    #[test]
    fn test_a_day_may_have_multiple_entries() {
        let (_dir, _config, store) = seeded_store();
        log_entry(&store, "Jose", day(1), true, true, true, "").unwrap();
        log_entry(&store, "Maria", day(1), false, true, true, "salt restocked").unwrap();

        let entries = entries_on(&store, day(1)).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].responsible, "Jose");
        assert_eq!(entries[1].responsible, "Maria");
    }

    #[test]
    fn test_recent_returns_the_tail_in_order() {
        let (_dir, _config, store) = seeded_store();
        for d in 1..=5 {
            log_entry(&store, "Jose", day(d), true, true, true, "").unwrap();
        }

        let tail = recent(&store, 2).unwrap();
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].date, day(4));
        assert_eq!(tail[1].date, day(5));
    }
}
