//! Core business logic.
//!
//! Ledger operations follow one pattern: load the whole entity table,
//! mutate in memory, write the whole table back (the record store holds
//! the entity lock across the cycle). Nothing here caches; derived
//! metrics are recomputed from fresh snapshots on every call. Every
//! mutating operation takes an explicit `actor` so the log records who
//! did what; the core never interprets the actor beyond logging it.

/// Daily checklist log
pub mod checklist;
/// Livestock ledger (intake, exits, corrections)
pub mod livestock;
/// Market price reference
pub mod market;
/// Pasture register
pub mod pasture;
/// Payroll ledger (fixed roster + day labor)
pub mod payroll;
/// Snapshot formatting for the dashboard
pub mod report;
/// Herd valuation and profitability engine
pub mod valuation;
