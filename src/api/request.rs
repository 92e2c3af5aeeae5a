//! Request types for the ledger API.

use serde::{Deserialize, Serialize};

use crate::models::RawRecord;

/// Request body for `POST /ledgers`.
///
/// Rows are the spreadsheet rows from the header offset onwards, in sheet
/// order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    /// Raw attendance rows.
    pub records: Vec<RawRecord>,
}

/// Request body for `PUT /ledgers/:id/entries/:index/holiday`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HolidayToggleRequest {
    /// The new state of the holiday checkbox.
    pub holiday: bool,
}
