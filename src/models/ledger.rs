//! Ledger models: per-day accounting results and the ordered ledger.

use serde::{Deserialize, Serialize};

use super::{DayStatus, WorkRecord};

/// A work record together with its derived overtime and deduction.
///
/// Serializes flat, so the record's fields sit next to the derived minutes.
///
/// # Example
///
/// ```
/// use comp_ledger::models::{DayStatus, LedgerEntry, WorkRecord};
///
/// let entry = LedgerEntry {
///     record: WorkRecord {
///         date: "02(화)".to_string(),
///         worked_minutes: 600,
///         status_label: String::new(),
///         status: DayStatus::Ordinary,
///     },
///     overtime_minutes: 60,
///     deduction_minutes: 0,
/// };
/// assert!(!entry.detail_row().holiday_override);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// The normalized record.
    #[serde(flatten)]
    pub record: WorkRecord,
    /// Minutes credited as compensable excess.
    pub overtime_minutes: u32,
    /// Minutes short of the expected work duration.
    pub deduction_minutes: u32,
}

impl LedgerEntry {
    /// Date label of the entry.
    pub fn date(&self) -> &str {
        &self.record.date
    }

    /// Projects the entry onto the detail/edit view.
    pub fn detail_row(&self) -> DetailRow {
        DetailRow {
            date: self.record.date.clone(),
            worked_minutes: self.record.worked_minutes,
            overtime_minutes: self.overtime_minutes,
            deduction_minutes: self.deduction_minutes,
            holiday_override: self.record.status == DayStatus::Holiday,
        }
    }
}

/// One row of the detail/edit view.
///
/// Carries every ledger column except the raw status text, plus the
/// holiday toggle a user can flip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRow {
    /// Date label.
    pub date: String,
    /// Minutes worked.
    pub worked_minutes: u32,
    /// Overtime minutes.
    pub overtime_minutes: u32,
    /// Deduction minutes.
    pub deduction_minutes: u32,
    /// Whether the day is currently treated as a holiday.
    pub holiday_override: bool,
}

/// The ordered per-day ledger of one import session.
///
/// Entries keep their import order; "first" and "last" are positional.
/// Entries can be mutated in place but never added, removed or reordered
/// after the ledger is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    /// Creates a ledger from entries in import order.
    pub fn new(entries: Vec<LedgerEntry>) -> Self {
        Self { entries }
    }

    /// Returns the entries in import order.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [LedgerEntry] {
        &mut self.entries
    }

    /// Returns the entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&LedgerEntry> {
        self.entries.get(index)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the ledger has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Projects every entry onto the detail/edit view.
    pub fn detail_rows(&self) -> Vec<DetailRow> {
        self.entries.iter().map(LedgerEntry::detail_row).collect()
    }
}
