//! Row normalization.
//!
//! Converts one [`RawRecord`] into a [`WorkRecord`], or discards it when the
//! row is a weekly subtotal rather than a day.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::{LedgerConfig, StatusLabels};
use crate::models::{RawRecord, WorkRecord};

use super::classify_status;

/// Outcome of normalizing one raw row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedRow {
    /// The row describes a day.
    Record(WorkRecord),
    /// The row is an aggregate (weekly subtotal) and carries no day.
    Discard,
}

/// Normalizes one raw row.
///
/// - A date label containing the weekly subtotal marker is discarded.
/// - Worked minutes are the worked-time fraction times the minutes per day,
///   rounded to the nearest minute; unparsable input counts as zero.
/// - A date label containing a weekend marker forces the holiday label,
///   whatever the exported status text said.
///
/// # Example
///
/// ```
/// use comp_ledger::calculation::{NormalizedRow, normalize_row};
/// use comp_ledger::config::LedgerConfig;
/// use comp_ledger::models::{DayStatus, RawRecord};
///
/// let config = LedgerConfig::default();
///
/// let row = normalize_row(&RawRecord::new("06(토)", "0.25", "연차(8.00h)"), &config);
/// let NormalizedRow::Record(record) = row else { panic!("expected a record") };
/// assert_eq!(record.worked_minutes, 360);
/// assert_eq!(record.status_label, "공휴일");
/// assert_eq!(record.status, DayStatus::Holiday);
///
/// let subtotal = RawRecord::new("1주차 주간 근무시간", "1.6667", "");
/// assert_eq!(normalize_row(&subtotal, &config), NormalizedRow::Discard);
/// ```
pub fn normalize_row(raw: &RawRecord, config: &LedgerConfig) -> NormalizedRow {
    let labels = config.labels();

    if raw.date.contains(&labels.weekly_subtotal_marker) {
        return NormalizedRow::Discard;
    }

    let worked_minutes = parse_worked_minutes(&raw.total_worked, config.rules().minutes_per_day);

    let status_label = if is_weekend(&raw.date, labels) {
        labels.holiday.clone()
    } else {
        raw.status.clone()
    };
    let status = classify_status(&status_label, labels);

    NormalizedRow::Record(WorkRecord {
        date: raw.date.clone(),
        worked_minutes,
        status_label,
        status,
    })
}

/// Returns true if the date label carries any weekend marker.
pub fn is_weekend(date: &str, labels: &StatusLabels) -> bool {
    labels
        .weekend_markers
        .iter()
        .any(|marker| date.contains(marker.as_str()))
}

/// Converts a worked-time fraction of a day into whole minutes.
///
/// The leading numeric part of `text` is used, so `"0.5 "` and `"0.5d"` both
/// read as half a day. Halves round up. Anything that does not yield a
/// non-negative minute count that fits in `u32` is zero.
///
/// # Example
///
/// ```
/// use comp_ledger::calculation::parse_worked_minutes;
///
/// assert_eq!(parse_worked_minutes("0.375", 1440), 540);
/// assert_eq!(parse_worked_minutes("0.4167", 1440), 600);
/// assert_eq!(parse_worked_minutes("", 1440), 0);
/// assert_eq!(parse_worked_minutes("n/a", 1440), 0);
/// ```
pub fn parse_worked_minutes(text: &str, minutes_per_day: u32) -> u32 {
    let Some(fraction) = leading_number(text) else {
        return 0;
    };

    fraction
        .checked_mul(Decimal::from(minutes_per_day))
        .and_then(|minutes| minutes.checked_add(Decimal::new(5, 1)))
        .map(|minutes| minutes.floor())
        .and_then(|minutes| minutes.to_u32())
        .unwrap_or(0)
}

/// Parses the longest numeric prefix of `text`, after leading whitespace.
fn leading_number(text: &str) -> Option<Decimal> {
    let text = text.trim_start();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let int_len = digit_run(unsigned);
    let mut mantissa_len = int_len;
    let mut frac_len = 0;
    if unsigned[int_len..].starts_with('.') {
        frac_len = digit_run(&unsigned[int_len + 1..]);
        // "5." keeps the integer part only
        if frac_len > 0 {
            mantissa_len = int_len + 1 + frac_len;
        }
    }
    if int_len + frac_len == 0 {
        return None;
    }

    let mut mantissa = unsigned[..mantissa_len].to_string();
    if int_len == 0 {
        mantissa.insert(0, '0');
    }

    // Exponent only counts when followed by digits.
    let rest = &unsigned[mantissa_len..];
    let value = match rest.strip_prefix(['e', 'E']) {
        Some(exponent) => {
            let sign_len = usize::from(exponent.starts_with(['+', '-']));
            let exp_len = digit_run(&exponent[sign_len..]);
            if exp_len > 0 {
                let scientific = format!("{}e{}", mantissa, &exponent[..sign_len + exp_len]);
                Decimal::from_scientific(&scientific).ok()?
            } else {
                Decimal::from_str(&mantissa).ok()?
            }
        }
        None => Decimal::from_str(&mantissa).ok()?,
    };

    Some(if negative { -value } else { value })
}

fn digit_run(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayStatus;

    fn record(raw: RawRecord) -> WorkRecord {
        match normalize_row(&raw, &LedgerConfig::default()) {
            NormalizedRow::Record(record) => record,
            NormalizedRow::Discard => panic!("row {:?} was discarded", raw.date),
        }
    }

    // ==========================================================================
    // Worked minutes
    // ==========================================================================

    #[test]
    fn test_nine_hour_fraction() {
        assert_eq!(parse_worked_minutes("0.375", 1440), 540);
    }

    #[test]
    fn test_rounds_to_nearest_minute() {
        // 0.4167 * 1440 = 600.048
        assert_eq!(parse_worked_minutes("0.4167", 1440), 600);
        // 0.41632 * 1440 = 599.5008
        assert_eq!(parse_worked_minutes("0.41632", 1440), 600);
        // 0.4163 * 1440 = 599.472
        assert_eq!(parse_worked_minutes("0.4163", 1440), 599);
    }

    #[test]
    fn test_exact_half_minute_rounds_up() {
        // 0.003125 * 1440 = 4.5
        assert_eq!(parse_worked_minutes("0.003125", 1440), 5);
        // 0.00312 * 1440 = 4.4928
        assert_eq!(parse_worked_minutes("0.00312", 1440), 4);
    }

    #[test]
    fn test_blank_and_garbage_are_zero() {
        assert_eq!(parse_worked_minutes("", 1440), 0);
        assert_eq!(parse_worked_minutes("   ", 1440), 0);
        assert_eq!(parse_worked_minutes("abc", 1440), 0);
        assert_eq!(parse_worked_minutes(".", 1440), 0);
        assert_eq!(parse_worked_minutes("-", 1440), 0);
    }

    #[test]
    fn test_leading_numeric_prefix_is_used() {
        assert_eq!(parse_worked_minutes("  0.5", 1440), 720);
        assert_eq!(parse_worked_minutes("0.5days", 1440), 720);
        assert_eq!(parse_worked_minutes(".25", 1440), 360);
        assert_eq!(parse_worked_minutes("1.", 1440), 1440);
        assert_eq!(parse_worked_minutes("+0.5", 1440), 720);
    }

    #[test]
    fn test_exponent_notation() {
        assert_eq!(parse_worked_minutes("2.5e-1", 1440), 360);
        assert_eq!(parse_worked_minutes("5E-1", 1440), 720);
        // dangling exponent is ignored
        assert_eq!(parse_worked_minutes("0.5e", 1440), 720);
    }

    #[test]
    fn test_negative_and_overflowing_values_are_zero() {
        assert_eq!(parse_worked_minutes("-0.25", 1440), 0);
        assert_eq!(parse_worked_minutes("99999999999999999999", 1440), 0);
        assert_eq!(parse_worked_minutes("1e30", 1440), 0);
    }

    #[test]
    fn test_float_rendered_cell() {
        // what a numeric spreadsheet cell renders to
        assert_eq!(parse_worked_minutes(&0.3958333333333333_f64.to_string(), 1440), 570);
    }

    // ==========================================================================
    // Normalization
    // ==========================================================================

    #[test]
    fn test_ordinary_row_keeps_status() {
        let rec = record(RawRecord::new("01(월)", "0.375", ""));
        assert_eq!(rec.date, "01(월)");
        assert_eq!(rec.worked_minutes, 540);
        assert_eq!(rec.status_label, "");
        assert_eq!(rec.status, DayStatus::Ordinary);
    }

    #[test]
    fn test_leave_label_passes_through() {
        let rec = record(RawRecord::new("03(수)", "0.1667", "오전반차(4.00h)"));
        assert_eq!(rec.status_label, "오전반차(4.00h)");
        assert_eq!(rec.status, DayStatus::HalfDayLeave);
        assert_eq!(rec.worked_minutes, 240);
    }

    #[test]
    fn test_saturday_becomes_holiday() {
        let rec = record(RawRecord::new("06(토)", "0", ""));
        assert_eq!(rec.status_label, "공휴일");
        assert_eq!(rec.status, DayStatus::Holiday);
    }

    #[test]
    fn test_sunday_overrides_leave_label() {
        let rec = record(RawRecord::new("07(일)", "0.1", "연차(8.00h)"));
        assert_eq!(rec.status_label, "공휴일");
        assert_eq!(rec.status, DayStatus::Holiday);
    }

    #[test]
    fn test_weekly_subtotal_is_discarded() {
        let raw = RawRecord::new("주간 근무시간", "1.875", "");
        assert_eq!(
            normalize_row(&raw, &LedgerConfig::default()),
            NormalizedRow::Discard
        );
    }

    #[test]
    fn test_missing_fields_yield_absent_ordinary_day() {
        let rec = record(RawRecord::default());
        assert_eq!(rec.date, "");
        assert_eq!(rec.worked_minutes, 0);
        assert_eq!(rec.status, DayStatus::Ordinary);
    }

    #[test]
    fn test_is_weekend() {
        let labels = StatusLabels::default();
        assert!(is_weekend("06(토)", &labels));
        assert!(is_weekend("07(일)", &labels));
        assert!(!is_weekend("08(월)", &labels));
    }
}
