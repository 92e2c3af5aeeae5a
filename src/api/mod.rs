//! HTTP API module for the ledger engine.
//!
//! This module exposes import sessions over REST: a host UI posts the
//! spreadsheet rows, shows the summary and detail rows, and sends holiday
//! toggles back.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{HolidayToggleRequest, ImportRequest};
pub use response::{ApiError, ApiErrorResponse, ImportResponse, LedgerView, SummaryView};
pub use state::AppState;
