//! Status label classification.
//!
//! Turns the free-text status column into a [`DayStatus`] once, so the
//! accounting rules never inspect label text.

use crate::config::StatusLabels;
use crate::models::DayStatus;

/// Classifies a status label.
///
/// Checked in order, first match wins:
/// 1. label equals the holiday label exactly → [`DayStatus::Holiday`]
/// 2. label contains the full-day leave marker → [`DayStatus::FullDayLeave`]
/// 3. label contains the half-day leave marker → [`DayStatus::HalfDayLeave`]
/// 4. anything else, including `""` → [`DayStatus::Ordinary`]
///
/// # Example
///
/// ```
/// use comp_ledger::calculation::classify_status;
/// use comp_ledger::config::StatusLabels;
/// use comp_ledger::models::DayStatus;
///
/// let labels = StatusLabels::default();
/// assert_eq!(classify_status("공휴일", &labels), DayStatus::Holiday);
/// assert_eq!(classify_status("연차(8.00h)", &labels), DayStatus::FullDayLeave);
/// assert_eq!(classify_status("오전반차(4.00h)", &labels), DayStatus::HalfDayLeave);
/// assert_eq!(classify_status("", &labels), DayStatus::Ordinary);
/// ```
pub fn classify_status(label: &str, labels: &StatusLabels) -> DayStatus {
    if label == labels.holiday {
        DayStatus::Holiday
    } else if label.contains(&labels.full_day_leave_marker) {
        DayStatus::FullDayLeave
    } else if label.contains(&labels.half_day_leave_marker) {
        DayStatus::HalfDayLeave
    } else {
        DayStatus::Ordinary
    }
}
