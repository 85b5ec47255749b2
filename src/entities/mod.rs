//! Entity module - record types persisted as CSV tables.
//!
//! Each entity has one serde model per file; the model's field order is the
//! column order of the persisted table. Column sets are append-only over the
//! product's lifetime - never reordered or removed - so old data files stay
//! loadable after an upgrade (the migrator depends on this).

pub mod animal;
pub mod checklist;
pub mod day_labor;
pub mod market_quote;
pub mod pasture;
pub mod staff;

pub use animal::{Animal, Category, ExitReason};
pub use checklist::ChecklistEntry;
pub use day_labor::DayLaborEntry;
pub use market_quote::MarketQuote;
pub use pasture::Pasture;
pub use staff::{Role, StaffMember};

use serde::{Deserialize, Serialize};

/// Implemented by every persisted record type: a deterministic row
/// identity the store uses to re-associate rows with unknown extra
/// columns carried by the file, so columns added by other deployments
/// survive typed mutations. Duplicate keys are tolerated; rows are
/// matched in table order.
pub trait Record {
    /// Identity of this row within its table.
    fn key(&self) -> String;
}

/// Presence state shared by animals (on the property vs departed) and
/// staff (on the roster vs dismissed).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Presently on the property / on the roster
    Active,
    /// Departed (sold, died, consumed, stolen) or dismissed
    Inactive,
}
