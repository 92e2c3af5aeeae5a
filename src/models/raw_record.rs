//! Raw attendance rows as supplied by the spreadsheet reader.

use serde::{Deserialize, Deserializer, Serialize};

/// One row of the attendance export, before any normalization.
///
/// Every field is kept as text. Spreadsheet readers emit a mix of strings,
/// numbers and nulls for the same column, so deserialization accepts any
/// scalar and renders it as a string; a missing or null cell becomes `""`.
/// The attendance export's own Korean column headers are accepted as aliases.
///
/// # Example
///
/// ```
/// use comp_ledger::models::RawRecord;
///
/// let record: RawRecord = serde_json::from_str(
///     r#"{"일자": "02(화)", "총 근무시간": 0.4167, "상태": null}"#,
/// ).unwrap();
///
/// assert_eq!(record.date, "02(화)");
/// assert_eq!(record.total_worked, "0.4167");
/// assert_eq!(record.status, "");
/// assert_eq!(record.start_time, "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Locale-formatted date label, e.g. `"06(토)"`.
    #[serde(default, alias = "일자", deserialize_with = "cell_text")]
    pub date: String,
    /// Start of work, as displayed in the export.
    #[serde(default, alias = "업무시작", deserialize_with = "cell_text")]
    pub start_time: String,
    /// End of work, as displayed in the export.
    #[serde(default, alias = "업무종료", deserialize_with = "cell_text")]
    pub end_time: String,
    /// Total worked time as a fraction of a day (0.5 = 12 hours).
    #[serde(default, alias = "총 근무시간", deserialize_with = "cell_text")]
    pub total_worked: String,
    /// Free-text status label (leave marker, holiday label, or blank).
    #[serde(default, alias = "상태", deserialize_with = "cell_text")]
    pub status: String,
}

impl RawRecord {
    /// Creates a raw record from the three columns the accounting rules read.
    pub fn new(
        date: impl Into<String>,
        total_worked: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            total_worked: total_worked.into(),
            status: status.into(),
            ..Self::default()
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Cell {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
    Other(serde::de::IgnoredAny),
}

fn cell_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let cell = Option::<Cell>::deserialize(deserializer)?;
    Ok(match cell {
        None => String::new(),
        Some(Cell::Text(text)) => text,
        Some(Cell::Integer(n)) => n.to_string(),
        Some(Cell::Float(n)) => n.to_string(),
        Some(Cell::Flag(b)) => b.to_string(),
        Some(Cell::Other(_)) => String::new(),
    })
}
