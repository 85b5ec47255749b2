//! Unified error types for `Herdbook`.
//!
//! Every fallible operation in the crate returns the crate-wide [`Result`]
//! alias. Migration is the one exception to fail-fast propagation: its
//! errors are downgraded to warnings at the call site so a single malformed
//! table never locks the operator out of the rest of the records.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file missing, unreadable, or malformed.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// An entity key that is not part of the known storage layout.
    /// This is a programmer error, not an operator-recoverable condition.
    #[error("Unknown entity: {name}")]
    UnknownEntity {
        /// The unrecognized entity key
        name: String,
    },

    /// A "latest row" lookup against a table that has no rows. Seeding
    /// guarantees at least one market quote, so hitting this means the
    /// data directory was tampered with.
    #[error("No rows recorded yet for entity: {entity}")]
    EmptyHistory {
        /// The entity whose history is empty
        entity: String,
    },

    /// Rejected operator input (negative weight, cost, price, or rate).
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the rejected input
        message: String,
    },

    /// A staff edit addressed an id that is not on the roster.
    #[error("No staff member with id {id}")]
    StaffNotFound {
        /// The roster id that did not match any row
        id: u64,
    },

    /// I/O error from the filesystem layer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encode/decode error from the transport layer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
