//! Calculation logic for the ledger engine.
//!
//! This module contains the whole accounting pipeline: status label
//! classification, row normalization, the per-day work accounting rules,
//! ledger construction, aggregation into compensatory time, and
//! interactive reclassification of single days.

mod aggregator;
mod ledger_builder;
mod reclassifier;
mod row_normalizer;
mod status_classification;
mod work_accounting;

pub use aggregator::{compensatory_time, summarize};
pub use ledger_builder::{LedgerBuildResult, build_ledger};
pub use reclassifier::{OverrideTarget, StatusOverride, apply_override, reaggregate};
pub use row_normalizer::{NormalizedRow, is_weekend, normalize_row, parse_worked_minutes};
pub use status_classification::classify_status;
pub use work_accounting::{WorkAccounting, WorkMinutes, account_work_record, evaluate_work_record};
