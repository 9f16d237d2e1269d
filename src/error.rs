//! Error types for the Vacation Entitlement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate for
//! infrastructure failures such as missing or invalid configuration. Rejections
//! of a vacation request are not errors in this sense; they are reported as
//! [`VacationFailure`](crate::models::VacationFailure) values.

use thiserror::Error;

/// The main error type for the Vacation Entitlement Engine.
///
/// # Example
///
/// ```
/// use vacation_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
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

    /// The vacation policy contains a value that cannot be used.
    #[error("Invalid vacation policy field '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A holiday entry was invalid.
    #[error("Invalid holiday on {date}: {message}")]
    InvalidHoliday {
        /// The date of the holiday entry.
        date: chrono::NaiveDate,
        /// A description of what made the entry invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
