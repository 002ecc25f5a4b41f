//! Rounding error types.

use thiserror::Error;

/// Errors from rounding resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundingError {
    /// The name is valid but this engine has no policy registered
    /// under it. Distinct from "not found": callers can tell an invalid
    /// name from an unimplemented backend and choose to skip rather
    /// than abort.
    #[error("unsupported rounding: {name}")]
    UnsupportedRounding {
        /// The requested policy name
        name: String,
    },

    /// Query named neither a currency nor an explicit scale
    #[error("rounding query needs a currency or an explicit scale")]
    MissingTarget,
}

/// Result type for rounding operations.
pub type RoundingResult<T> = Result<T, RoundingError>;
