//! Error types for the ledger engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The accounting core itself never fails on attendance data; these errors
//! cover configuration loading and host-side lookups of sessions and entries.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the ledger engine.
///
/// # Example
///
/// ```
/// use comp_ledger::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/accounting.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/accounting.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was parsed but is not usable.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// An override referenced a ledger position that does not exist.
    #[error("Ledger entry {index} not found (ledger has {len} entries)")]
    EntryNotFound {
        /// The requested position.
        index: usize,
        /// The number of entries in the ledger.
        len: usize,
    },

    /// No import session exists under the given id.
    #[error("Ledger session not found: {id}")]
    SessionNotFound {
        /// The session id that was requested.
        id: Uuid,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
