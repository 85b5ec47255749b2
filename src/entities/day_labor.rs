//! Day-labor entity - one paid stint of casual work.
//!
//! Append-only ledger. `total_paid` is computed once at insertion from the
//! rate and days and stored redundantly; it is a historical fact and is
//! never recomputed from the other two fields afterwards.

use super::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the day-labor payroll ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DayLaborEntry {
    /// Date the entry was recorded
    pub date: NaiveDate,
    /// Name of the day laborer
    pub worker_name: String,
    /// Description of the service performed, free text
    pub service: String,
    /// Agreed daily rate
    pub daily_rate: f64,
    /// Number of days worked
    pub days_worked: f64,
    /// `daily_rate * days_worked`, frozen at insertion
    pub total_paid: f64,
    /// Free-text observations
    pub notes: String,
}

// Append-only table with no id column; the whole row is the identity.
impl Record for DayLaborEntry {
    fn key(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}|{}",
            self.date,
            self.worker_name,
            self.service,
            self.daily_rate,
            self.days_worked,
            self.total_paid,
            self.notes
        )
    }
}
