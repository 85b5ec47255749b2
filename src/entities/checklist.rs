//! Checklist entity - one completed pass of the daily routine.
//!
//! Append-only. A date may have zero or many entries; "was the routine
//! done on day D" is defined as "at least one entry exists with date D".

use super::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the daily checklist table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistEntry {
    /// Day the routine was performed
    pub date: NaiveDate,
    /// Name of the person who performed it (weak reference)
    pub responsible: String,
    /// Salt / mineral supply checked and topped up
    pub salt: bool,
    /// Water availability checked
    pub water: bool,
    /// Fence integrity checked
    pub fence: bool,
    /// Free-text observations
    pub notes: String,
}

// Append-only table with no id column; the whole row is the identity.
impl Record for ChecklistEntry {
    fn key(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}",
            self.date, self.responsible, self.salt, self.water, self.fence, self.notes
        )
    }
}
