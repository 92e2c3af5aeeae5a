//! Ledger aggregation.
//!
//! Reduces a ledger to a [`Summary`] and converts the net balance into
//! compensatory time off.

use crate::config::AccountingRules;
use crate::models::{CompensatoryTime, Ledger, Summary};

const MINUTES_PER_HOUR: i64 = 60;

/// Summarizes the whole ledger.
///
/// First and last dates are taken by position. An empty ledger gives empty
/// dates and zero totals.
///
/// # Example
///
/// ```
/// use comp_ledger::calculation::{build_ledger, summarize};
/// use comp_ledger::config::LedgerConfig;
/// use comp_ledger::models::RawRecord;
///
/// let config = LedgerConfig::default();
/// let rows = vec![
///     RawRecord::new("01(월)", "0.5", ""),     // 720 minutes, 180 overtime
///     RawRecord::new("02(화)", "0.3125", ""),  // 450 minutes, 30 deducted
/// ];
///
/// let ledger = build_ledger(&rows, &config).ledger;
/// let summary = summarize(&ledger, config.rules());
///
/// assert_eq!(summary.first_date, "01(월)");
/// assert_eq!(summary.last_date, "02(화)");
/// assert_eq!(summary.net_balance_minutes, 150);
/// assert_eq!(summary.comp_time.days, 0);
/// assert_eq!(summary.comp_time.hours, 2);
/// ```
pub fn summarize(ledger: &Ledger, rules: &AccountingRules) -> Summary {
    let entries = ledger.entries();

    let first_date = entries.first().map(|e| e.date().to_string()).unwrap_or_default();
    let last_date = entries.last().map(|e| e.date().to_string()).unwrap_or_default();

    let total_overtime_minutes: i64 = entries.iter().map(|e| i64::from(e.overtime_minutes)).sum();
    let total_deduction_minutes: i64 = entries.iter().map(|e| i64::from(e.deduction_minutes)).sum();
    let net_balance_minutes = total_overtime_minutes - total_deduction_minutes;

    Summary {
        first_date,
        last_date,
        total_overtime_minutes,
        total_deduction_minutes,
        net_balance_minutes,
        comp_time: compensatory_time(net_balance_minutes, rules.comp_day_minutes),
    }
}

/// Converts a net balance into whole compensatory days and leftover hours.
///
/// Days are floored, so a deficit borrows a whole day and the leftover
/// hours stay non-negative.
///
/// # Example
///
/// ```
/// use comp_ledger::calculation::compensatory_time;
///
/// let credit = compensatory_time(540, 540);
/// assert_eq!((credit.days, credit.hours), (1, 0));
///
/// // -600 minutes = -2 days + 480 minutes
/// let deficit = compensatory_time(-600, 540);
/// assert_eq!((deficit.days, deficit.hours), (-2, 8));
/// ```
pub fn compensatory_time(net_balance_minutes: i64, comp_day_minutes: u32) -> CompensatoryTime {
    // ConfigLoader rejects a zero-length day; a hand-built zero acts as one minute.
    let day = i64::from(comp_day_minutes.max(1));

    CompensatoryTime {
        days: net_balance_minutes.div_euclid(day),
        hours: net_balance_minutes.rem_euclid(day) / MINUTES_PER_HOUR,
    }
}
