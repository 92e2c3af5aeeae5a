//! Normalized per-day work records.

use serde::{Deserialize, Serialize};

/// Classification of a day's status label.
///
/// The attendance export encodes leave and holidays in a single free-text
/// column. The label is classified once into this variant and every
/// accounting rule reads the variant instead of the text.
///
/// # Example
///
/// ```
/// use comp_ledger::models::DayStatus;
///
/// let status = DayStatus::HalfDayLeave;
/// assert_eq!(status.to_string(), "Half-day leave");
/// assert!(!status.is_holiday());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Declared holiday or weekend; all worked time is compensable.
    Holiday,
    /// Full-day leave; never incurs a shortfall.
    FullDayLeave,
    /// Half-day leave; at least the half-day minutes must be worked.
    HalfDayLeave,
    /// Ordinary working day.
    #[default]
    Ordinary,
}

impl DayStatus {
    /// Returns true for [`DayStatus::Holiday`].
    pub fn is_holiday(self) -> bool {
        self == DayStatus::Holiday
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayStatus::Holiday => write!(f, "Holiday"),
            DayStatus::FullDayLeave => write!(f, "Full-day leave"),
            DayStatus::HalfDayLeave => write!(f, "Half-day leave"),
            DayStatus::Ordinary => write!(f, "Ordinary"),
        }
    }
}

/// One retained day of the attendance export after normalization.
///
/// `status_label` keeps the text shown to users (possibly replaced by the
/// holiday label through weekend inference or an override); `status` is its
/// classification and must always agree with it.
///
/// # Example
///
/// ```
/// use comp_ledger::models::{DayStatus, WorkRecord};
///
/// let record = WorkRecord {
///     date: "02(화)".to_string(),
///     worked_minutes: 600,
///     status_label: String::new(),
///     status: DayStatus::Ordinary,
/// };
/// assert_eq!(record.worked_minutes, 600);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRecord {
    /// Date label exactly as it appeared in the export.
    pub date: String,
    /// Minutes worked, rounded to the nearest minute.
    pub worked_minutes: u32,
    /// Status label text.
    pub status_label: String,
    /// Classification of `status_label`.
    pub status: DayStatus,
}
