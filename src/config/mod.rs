//! Configuration loading and management for the ledger engine.
//!
//! This module provides functionality to load accounting thresholds and
//! recognised status labels from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use comp_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Holiday label: {}", config.labels().holiday);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AccountingRules, LedgerConfig, StatusLabels};
