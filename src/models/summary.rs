//! Ledger summary models.

use serde::{Deserialize, Serialize};

/// Net balance converted into whole compensatory days and leftover hours.
///
/// `hours` is always in `0..comp_day_hours`; a negative balance borrows
/// from `days` instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensatoryTime {
    /// Whole compensatory days (may be negative).
    pub days: i64,
    /// Leftover whole hours.
    pub hours: i64,
}

/// Totals derived from a whole ledger.
///
/// A summary is never patched; every aggregation builds a new one.
///
/// # Example
///
/// ```
/// use comp_ledger::models::{CompensatoryTime, Summary};
///
/// let summary = Summary {
///     first_date: "01(월)".to_string(),
///     last_date: "31(수)".to_string(),
///     total_overtime_minutes: 660,
///     total_deduction_minutes: 120,
///     net_balance_minutes: 540,
///     comp_time: CompensatoryTime { days: 1, hours: 0 },
/// };
/// assert_eq!(summary.period_text(), "01(월) ~ 31(수)");
/// assert_eq!(summary.comp_time_text(), "1 days 0 hours");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Date label of the first ledger entry (positional).
    pub first_date: String,
    /// Date label of the last ledger entry (positional).
    pub last_date: String,
    /// Sum of overtime minutes.
    pub total_overtime_minutes: i64,
    /// Sum of deduction minutes.
    pub total_deduction_minutes: i64,
    /// Overtime minus deduction.
    pub net_balance_minutes: i64,
    /// The net balance as compensatory time off.
    pub comp_time: CompensatoryTime,
}

impl Summary {
    /// Period line of the summary view.
    pub fn period_text(&self) -> String {
        format!("{} ~ {}", self.first_date, self.last_date)
    }

    /// Compensatory time line of the summary view.
    pub fn comp_time_text(&self) -> String {
        format!("{} days {} hours", self.comp_time.days, self.comp_time.hours)
    }

    /// Totals line of the detail view.
    pub fn totals_text(&self) -> String {
        format!(
            "Overtime: {} min, Deduction: {} min, Compensatory time: {}",
            self.total_overtime_minutes,
            self.total_deduction_minutes,
            self.comp_time_text()
        )
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Period: {}", self.period_text())?;
        write!(f, "Compensatory time: {}", self.comp_time_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Summary {
        Summary {
            first_date: "01(월)".to_string(),
            last_date: "05(금)".to_string(),
            total_overtime_minutes: 100,
            total_deduction_minutes: 700,
            net_balance_minutes: -600,
            comp_time: CompensatoryTime { days: -2, hours: 8 },
        }
    }

    #[test]
    fn test_display_renders_summary_view() {
        assert_eq!(
            sample().to_string(),
            "Period: 01(월) ~ 05(금)\nCompensatory time: -2 days 8 hours"
        );
    }

    #[test]
    fn test_totals_text() {
        assert_eq!(
            sample().totals_text(),
            "Overtime: 100 min, Deduction: 700 min, Compensatory time: -2 days 8 hours"
        );
    }

    #[test]
    fn test_empty_summary_text() {
        let summary = Summary::default();
        assert_eq!(summary.period_text(), " ~ ");
        assert_eq!(summary.comp_time_text(), "0 days 0 hours");
    }

    #[test]
    fn test_summary_serialization() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["first_date"], "01(월)");
        assert_eq!(json["net_balance_minutes"], -600);
        assert_eq!(json["comp_time"]["days"], -2);
        assert_eq!(json["comp_time"]["hours"], 8);
    }
}
