//! Error types for cost report aggregation

use thiserror::Error;

/// Errors produced while decoding and aggregating cost data
#[derive(Debug, Error)]
pub enum ReportError {
    /// The API response carried no data for the requested window,
    /// which signals an upstream API or network failure.
    #[error("no cost data returned for the requested window")]
    DataUnavailable,

    /// A composite aggregation key did not split into the expected
    /// number of dimension parts.
    #[error("malformed aggregation key {key:?}: expected {expected} parts, found {found}")]
    MalformedKey {
        key: String,
        expected: usize,
        found: usize,
    },

    /// A timestamp from the API did not match the documented format.
    /// This is a contract violation, not recoverable input.
    #[error("invalid timestamp from cost API: {0}")]
    Timestamp(#[from] chrono::ParseError),
}
