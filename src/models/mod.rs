//! Core data models for the ledger engine.
//!
//! This module contains all the domain models used throughout the engine,
//! from raw spreadsheet rows to the derived summary.

mod audit;
mod ledger;
mod raw_record;
mod summary;
mod work_record;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use ledger::{DetailRow, Ledger, LedgerEntry};
pub use raw_record::RawRecord;
pub use summary::{CompensatoryTime, Summary};
pub use work_record::{DayStatus, WorkRecord};
