//! Error types for tzsegment-core.
//!
//! Only the strict entry points (parsers, constructors, configuration)
//! return these. The lenient classification functions never fail and fall
//! back to fixed values instead.

use thiserror::Error;

/// The main error type for tzsegment operations.
#[derive(Debug, Error)]
pub enum TzSegmentError {
    /// Invalid timezone name provided.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Error parsing timestamp input.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Segment width is zero or does not divide a day evenly.
    #[error("Invalid segment width: {0} minutes (must be positive and divide 1440)")]
    InvalidSegmentWidth(u32),

    /// Unknown day-type code.
    #[error("Invalid day type: '{0}'. Expected: L, S, D")]
    InvalidDayType(String),

    /// Inconsistent classifier configuration.
    #[error("Config error: {0}")]
    ConfigError(String),
}

/// Result type alias for tzsegment operations.
pub type Result<T> = std::result::Result<T, TzSegmentError>;
