//! Ledger construction.
//!
//! Runs every raw row through normalization and the work accounting rules,
//! keeping import order.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LedgerConfig;
use crate::models::{AuditTrace, AuditWarning, Ledger, LedgerEntry, RawRecord};

use super::{NormalizedRow, account_work_record, normalize_row};

/// A freshly built ledger and the audit trace of building it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerBuildResult {
    /// The ordered ledger.
    pub ledger: Ledger,
    /// One step per retained row, one warning per discarded row.
    pub audit_trace: AuditTrace,
}

/// Builds the ledger from raw rows in arrival order.
///
/// Weekly subtotal rows are skipped; every other row becomes exactly one
/// entry at the same relative position.
///
/// # Example
///
/// ```
/// use comp_ledger::calculation::build_ledger;
/// use comp_ledger::config::LedgerConfig;
/// use comp_ledger::models::RawRecord;
///
/// let rows = vec![
///     RawRecord::new("01(월)", "0.375", ""),
///     RawRecord::new("02(화)", "0.4167", ""),
///     RawRecord::new("주간 근무시간", "0.7917", ""),
///     RawRecord::new("06(토)", "0", ""),
/// ];
///
/// let result = build_ledger(&rows, &LedgerConfig::default());
/// let dates: Vec<&str> = result.ledger.entries().iter().map(|e| e.date()).collect();
/// assert_eq!(dates, vec!["01(월)", "02(화)", "06(토)"]);
/// assert_eq!(result.ledger.entries()[1].overtime_minutes, 60);
/// assert_eq!(result.audit_trace.warnings.len(), 1);
/// ```
pub fn build_ledger(records: &[RawRecord], config: &LedgerConfig) -> LedgerBuildResult {
    let start_time = Instant::now();
    let mut entries = Vec::with_capacity(records.len());
    let mut steps = Vec::with_capacity(records.len());
    let mut warnings = Vec::new();
    let mut step_number: u32 = 1;

    for (row, raw) in records.iter().enumerate() {
        let record = match normalize_row(raw, config) {
            NormalizedRow::Record(record) => record,
            NormalizedRow::Discard => {
                debug!(row, date = %raw.date, "Discarding weekly subtotal row");
                warnings.push(AuditWarning {
                    code: "WEEKLY_SUBTOTAL_DISCARDED".to_string(),
                    message: format!("Row {} ('{}') is a weekly subtotal and was skipped", row, raw.date),
                    severity: "low".to_string(),
                });
                continue;
            }
        };

        let accounting = account_work_record(&record, config.rules(), step_number);
        step_number += 1;
        steps.push(accounting.audit_step);

        entries.push(LedgerEntry {
            record,
            overtime_minutes: accounting.minutes.overtime_minutes,
            deduction_minutes: accounting.minutes.deduction_minutes,
        });
    }

    let duration_us = start_time.elapsed().as_micros() as u64;
    debug!(
        rows = records.len(),
        entries = entries.len(),
        discarded = warnings.len(),
        duration_us,
        "Ledger built"
    );

    LedgerBuildResult {
        ledger: Ledger::new(entries),
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    }
}
