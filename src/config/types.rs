//! Configuration types for attendance accounting.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every type has a
//! `Default` carrying the values used by the attendance export this engine
//! was built for.

use serde::{Deserialize, Serialize};

/// Minute thresholds used by the work accounting rules.
///
/// # Example
///
/// ```
/// use comp_ledger::config::AccountingRules;
///
/// let rules = AccountingRules::default();
/// assert_eq!(rules.ordinary_day_minutes, 480);
/// assert_eq!(rules.overtime_threshold_minutes, 540);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountingRules {
    /// Expected minutes of work on an ordinary day (8 hours).
    pub ordinary_day_minutes: u32,
    /// Expected minutes of work on a half-day leave day (4 hours).
    pub half_day_minutes: u32,
    /// Minutes after which a non-holiday day accrues overtime (9 hours).
    pub overtime_threshold_minutes: u32,
    /// Length of one compensatory day off in minutes (9 hours).
    pub comp_day_minutes: u32,
    /// Minutes in one day, used to scale worked-time fractions.
    pub minutes_per_day: u32,
}

impl Default for AccountingRules {
    fn default() -> Self {
        Self {
            ordinary_day_minutes: 480,
            half_day_minutes: 240,
            overtime_threshold_minutes: 540,
            comp_day_minutes: 540,
            minutes_per_day: 1440,
        }
    }
}

/// Labels and markers recognised in the attendance export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusLabels {
    /// Status label meaning the whole day is a holiday.
    pub holiday: String,
    /// Substring of a status label marking a full-day leave.
    pub full_day_leave_marker: String,
    /// Substring of a status label marking a half-day leave.
    pub half_day_leave_marker: String,
    /// Substring of a date label marking a weekly subtotal row.
    pub weekly_subtotal_marker: String,
    /// Substrings of a date label marking a weekend day.
    pub weekend_markers: Vec<String>,
}

impl Default for StatusLabels {
    fn default() -> Self {
        Self {
            holiday: "공휴일".to_string(),
            full_day_leave_marker: "8.00h".to_string(),
            half_day_leave_marker: "4.00h".to_string(),
            weekly_subtotal_marker: "주간 근무시간".to_string(),
            weekend_markers: vec!["토".to_string(), "일".to_string()],
        }
    }
}

/// The complete ledger configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Accounting thresholds.
    pub rules: AccountingRules,
    /// Recognised labels and markers.
    pub labels: StatusLabels,
}

impl LedgerConfig {
    /// Creates a new ledger configuration from its parts.
    pub fn new(rules: AccountingRules, labels: StatusLabels) -> Self {
        Self { rules, labels }
    }

    /// Returns the accounting rules.
    pub fn rules(&self) -> &AccountingRules {
        &self.rules
    }

    /// Returns the status labels.
    pub fn labels(&self) -> &StatusLabels {
        &self.labels
    }
}
