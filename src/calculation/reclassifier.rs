//! Interactive reclassification of ledger entries.
//!
//! A user can mark any day as a holiday, or clear that mark, after the
//! ledger is built. The change is expressed as a [`StatusOverride`] message;
//! applying it mutates the entry in place and re-aggregates the whole ledger.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::LedgerConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{DayStatus, Ledger, Summary};

use super::{evaluate_work_record, summarize};

/// The status an entry is overridden to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideTarget {
    /// Treat the day as a holiday.
    Holiday,
    /// Treat the day as an ordinary working day with a blank status.
    Ordinary,
}

/// Message requesting that one ledger entry be reclassified.
///
/// # Example
///
/// ```
/// use comp_ledger::calculation::{OverrideTarget, StatusOverride};
///
/// let message = StatusOverride::holiday(3, true);
/// assert_eq!(message.index, 3);
/// assert_eq!(message.target, OverrideTarget::Holiday);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusOverride {
    /// Position of the entry in the ledger.
    pub index: usize,
    /// The status to apply.
    pub target: OverrideTarget,
}

impl StatusOverride {
    /// Builds a message from a holiday toggle.
    pub fn holiday(index: usize, holiday: bool) -> Self {
        let target = if holiday {
            OverrideTarget::Holiday
        } else {
            OverrideTarget::Ordinary
        };
        Self { index, target }
    }
}

/// Applies an override and returns the fresh summary.
///
/// The entry's status label becomes the holiday label or `""`. Whatever the
/// label said before (a leave marker, for instance) is lost; clearing the
/// holiday mark always yields an ordinary day. Every entry is then
/// re-evaluated and the whole ledger summarized again.
///
/// Returns [`EngineError::EntryNotFound`] without touching the ledger if
/// the index is out of range.
///
/// # Example
///
/// ```
/// use comp_ledger::calculation::{StatusOverride, apply_override, build_ledger};
/// use comp_ledger::config::LedgerConfig;
/// use comp_ledger::models::RawRecord;
///
/// let config = LedgerConfig::default();
/// let rows = vec![RawRecord::new("01(월)", "0.25", "")];
/// let mut ledger = build_ledger(&rows, &config).ledger;
///
/// // 360 minutes on an ordinary day: 120 deducted
/// let summary = apply_override(&mut ledger, StatusOverride::holiday(0, true), &config)?;
/// assert_eq!(summary.total_overtime_minutes, 360);
/// assert_eq!(summary.total_deduction_minutes, 0);
///
/// let summary = apply_override(&mut ledger, StatusOverride::holiday(0, false), &config)?;
/// assert_eq!(summary.total_overtime_minutes, 0);
/// assert_eq!(summary.total_deduction_minutes, 120);
/// # Ok::<(), comp_ledger::error::EngineError>(())
/// ```
pub fn apply_override(
    ledger: &mut Ledger,
    message: StatusOverride,
    config: &LedgerConfig,
) -> EngineResult<Summary> {
    let len = ledger.len();
    let entry = ledger
        .entries_mut()
        .get_mut(message.index)
        .ok_or(EngineError::EntryNotFound {
            index: message.index,
            len,
        })?;

    let (label, status) = match message.target {
        OverrideTarget::Holiday => (config.labels().holiday.clone(), DayStatus::Holiday),
        OverrideTarget::Ordinary => (String::new(), DayStatus::Ordinary),
    };
    entry.record.status_label = label;
    entry.record.status = status;

    info!(
        index = message.index,
        date = %entry.record.date,
        target = ?message.target,
        "Ledger entry reclassified"
    );

    Ok(reaggregate(ledger, config))
}

/// Re-evaluates every entry and summarizes the ledger.
pub fn reaggregate(ledger: &mut Ledger, config: &LedgerConfig) -> Summary {
    let rules = config.rules();
    for entry in ledger.entries_mut() {
        let minutes = evaluate_work_record(&entry.record, rules);
        entry.overtime_minutes = minutes.overtime_minutes;
        entry.deduction_minutes = minutes.deduction_minutes;
    }
    summarize(ledger, rules)
}
