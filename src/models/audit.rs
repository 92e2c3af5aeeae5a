//! Audit trace models.
//!
//! Every rule application records an [`AuditStep`] so a ledger can be
//! explained day by day.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording an accounting decision.
///
/// # Example
///
/// ```
/// use comp_ledger::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     date: "02(화)".to_string(),
///     rule_id: "ordinary_day".to_string(),
///     rule_name: "Ordinary Day".to_string(),
///     input: serde_json::json!({"worked_minutes": 600}),
///     output: serde_json::json!({"overtime_minutes": 60, "deduction_minutes": 0}),
///     reasoning: "600 minutes worked exceeds 540 minute threshold by 60 minutes".to_string(),
/// };
/// assert_eq!(step.rule_id, "ordinary_day");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The date label of the row the rule was applied to.
    pub date: String,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated while building a ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a ledger build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of accounting steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated while building.
    pub warnings: Vec<AuditWarning>,
    /// The total build duration in microseconds.
    pub duration_us: u64,
}
