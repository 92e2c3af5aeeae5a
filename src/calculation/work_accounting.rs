//! Work accounting rules.
//!
//! This module decides, for a single day, how many of the worked minutes
//! count as overtime and how many minutes are deducted as a shortfall.

use serde::{Deserialize, Serialize};

use crate::config::AccountingRules;
use crate::models::{AuditStep, DayStatus, WorkRecord};

/// Overtime and deduction minutes for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkMinutes {
    /// Minutes credited as compensable excess.
    pub overtime_minutes: u32,
    /// Minutes short of the expected work duration.
    pub deduction_minutes: u32,
}

/// The result of accounting one work record, with its audit step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkAccounting {
    /// The derived minutes.
    pub minutes: WorkMinutes,
    /// The audit step recording which rule applied.
    pub audit_step: AuditStep,
}

/// Computes overtime and deduction minutes for a work record.
///
/// 1. A holiday credits every worked minute as overtime and never deducts.
/// 2. Otherwise the deduction depends on the status:
///    - full-day leave: nothing is deducted;
///    - half-day leave: the shortfall below the half-day minutes;
///    - ordinary day: the shortfall below the ordinary-day minutes.
/// 3. Independently of the deduction, minutes above the overtime threshold
///    count as overtime, on leave days too.
///
/// # Example
///
/// ```
/// use comp_ledger::calculation::evaluate_work_record;
/// use comp_ledger::config::AccountingRules;
/// use comp_ledger::models::{DayStatus, WorkRecord};
///
/// let rules = AccountingRules::default();
/// let record = WorkRecord {
///     date: "02(화)".to_string(),
///     worked_minutes: 600,
///     status_label: String::new(),
///     status: DayStatus::Ordinary,
/// };
///
/// let minutes = evaluate_work_record(&record, &rules);
/// assert_eq!(minutes.overtime_minutes, 60);
/// assert_eq!(minutes.deduction_minutes, 0);
/// ```
pub fn evaluate_work_record(record: &WorkRecord, rules: &AccountingRules) -> WorkMinutes {
    let worked = record.worked_minutes;

    if record.status == DayStatus::Holiday {
        return WorkMinutes {
            overtime_minutes: worked,
            deduction_minutes: 0,
        };
    }

    let deduction_minutes = match record.status {
        DayStatus::FullDayLeave => 0,
        DayStatus::HalfDayLeave => rules.half_day_minutes.saturating_sub(worked),
        _ => rules.ordinary_day_minutes.saturating_sub(worked),
    };
    let overtime_minutes = worked.saturating_sub(rules.overtime_threshold_minutes);

    WorkMinutes {
        overtime_minutes,
        deduction_minutes,
    }
}

/// Computes overtime and deduction minutes and records an audit step.
///
/// # Arguments
///
/// * `record` - The normalized day
/// * `rules` - Minute thresholds
/// * `step_number` - The step number for audit trail sequencing
///
/// # Example
///
/// ```
/// use comp_ledger::calculation::account_work_record;
/// use comp_ledger::config::AccountingRules;
/// use comp_ledger::models::{DayStatus, WorkRecord};
///
/// let record = WorkRecord {
///     date: "01(월)".to_string(),
///     worked_minutes: 0,
///     status_label: String::new(),
///     status: DayStatus::Ordinary,
/// };
///
/// let result = account_work_record(&record, &AccountingRules::default(), 3);
/// assert_eq!(result.minutes.deduction_minutes, 480);
/// assert_eq!(result.audit_step.rule_id, "ordinary_day");
/// assert_eq!(result.audit_step.step_number, 3);
/// ```
pub fn account_work_record(
    record: &WorkRecord,
    rules: &AccountingRules,
    step_number: u32,
) -> WorkAccounting {
    let minutes = evaluate_work_record(record, rules);
    let worked = record.worked_minutes;

    let (rule_id, rule_name) = match record.status {
        DayStatus::Holiday => ("holiday", "Holiday"),
        DayStatus::FullDayLeave => ("full_day_leave", "Full-Day Leave"),
        DayStatus::HalfDayLeave => ("half_day_leave", "Half-Day Leave"),
        DayStatus::Ordinary => ("ordinary_day", "Ordinary Day"),
    };

    let reasoning = match record.status {
        DayStatus::Holiday => format!(
            "Holiday: all {} worked minutes count as overtime, nothing deducted",
            worked
        ),
        DayStatus::FullDayLeave => with_overtime(
            "Full-day leave: no deduction".to_string(),
            minutes,
            rules,
        ),
        DayStatus::HalfDayLeave => with_overtime(
            shortfall_reasoning("Half-day leave", worked, rules.half_day_minutes, minutes),
            minutes,
            rules,
        ),
        DayStatus::Ordinary => with_overtime(
            shortfall_reasoning("Ordinary day", worked, rules.ordinary_day_minutes, minutes),
            minutes,
            rules,
        ),
    };

    let audit_step = AuditStep {
        step_number,
        date: record.date.clone(),
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input: serde_json::json!({
            "worked_minutes": worked,
            "status": record.status,
            "status_label": record.status_label,
        }),
        output: serde_json::json!({
            "overtime_minutes": minutes.overtime_minutes,
            "deduction_minutes": minutes.deduction_minutes,
        }),
        reasoning,
    };

    WorkAccounting {
        minutes,
        audit_step,
    }
}

fn shortfall_reasoning(kind: &str, worked: u32, expected: u32, minutes: WorkMinutes) -> String {
    if minutes.deduction_minutes > 0 {
        format!(
            "{}: {} worked minutes is under {} expected, {} minutes deducted",
            kind, worked, expected, minutes.deduction_minutes
        )
    } else {
        format!(
            "{}: {} worked minutes meets {} expected, no deduction",
            kind, worked, expected
        )
    }
}

fn with_overtime(reasoning: String, minutes: WorkMinutes, rules: &AccountingRules) -> String {
    if minutes.overtime_minutes > 0 {
        format!(
            "{}; exceeds {} minute threshold by {} minutes of overtime",
            reasoning, rules.overtime_threshold_minutes, minutes.overtime_minutes
        )
    } else {
        reasoning
    }
}
