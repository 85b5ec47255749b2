//! Staff entity - the fixed-roster worker record.
//!
//! Roster edits are keyed by `id` and applied in place. The `Owner` role
//! is distinguished: the migrator re-asserts it on the row whose name
//! matches the configured owner exactly, and the presentation layer uses
//! it as its access-control gate.

use super::{Record, Status};
use serde::{Deserialize, Serialize};

/// Closed set of roster roles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Ranch owner; grants administrative access in the presentation layer
    Owner,
    /// Ranch manager
    Manager,
    /// Foreman
    Foreman,
    /// General ranch hand
    Hand,
    /// Tractor / machinery operator
    #[serde(rename = "Tractor-Driver")]
    TractorDriver,
    /// Cook
    Cook,
    /// Default role back-filled by migration for rows predating the column
    Operational,
    /// Anything else
    Other,
}

/// One row of the fixed-staff roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique roster id, the key for in-place edits
    pub id: u64,
    /// Worker name
    pub name: String,
    /// Roster role
    pub role: Role,
    /// Day-to-day function, free text
    pub function: String,
    /// Contact phone, free text
    pub phone: String,
    /// Active while employed
    pub status: Status,
}

impl Record for StaffMember {
    fn key(&self) -> String {
        self.id.to_string()
    }
}
