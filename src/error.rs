//! Error types for bamsieve

use thiserror::Error;

/// Result type alias for filter construction
pub type Result<T> = std::result::Result<T, FilterError>;

/// Configuration errors raised while building a filter.
///
/// Every variant belongs to the construction-time regime: once a filter is
/// built, evaluation cannot fail. Absent or mistyped record data is resolved
/// to a rejection during evaluation, never to an error.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Field name does not match any integer field of the record
    #[error("unknown integer field: {0:?}")]
    UnknownIntegerField(String),

    /// Field name does not match any string field of the record
    #[error("unknown string field: {0:?}")]
    UnknownStringField(String),

    /// Flag name does not match any record flag
    #[error("unknown flag: {0:?}")]
    UnknownFlag(String),

    /// Operator token is not one of `==`, `!=`, `<`, `<=`, `>`, `>=`
    #[error("unknown comparison operator: {0:?}")]
    UnknownOperator(String),

    /// Tag names are exactly two ASCII characters
    #[error("invalid tag name {0:?}: expected two ASCII characters")]
    InvalidTagName(String),

    /// Regular expression failed to compile
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
