//! Compensatory Time Ledger Engine
//!
//! This crate turns a daily attendance export into a ledger of overtime and
//! deduction minutes per day, and aggregates that ledger into a
//! compensatory-time-off balance. Days can be reclassified as holidays after
//! import, which re-aggregates the whole ledger.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
