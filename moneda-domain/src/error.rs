//! Domain error types.

use thiserror::Error;

/// Errors raised by the monetary domain.
///
/// All failures are local and synchronous. Operations either fully
/// succeed and return a new value, or fail and leave their inputs
/// untouched; nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Currency code or locale tag has no registration
    #[error("unknown currency: {code}")]
    UnknownCurrency {
        /// The code or locale tag that failed to resolve
        code: String,
    },

    /// Currency descriptor failed validation
    #[error("invalid currency unit: {reason}")]
    InvalidCurrencyUnit {
        /// Why the descriptor was rejected
        reason: String,
    },

    /// Numeric input could not be parsed into an exact decimal
    #[error("invalid amount {input:?}: {reason}")]
    InvalidAmount {
        /// The rejected input
        input: String,
        /// Parser diagnostic
        reason: String,
    },

    /// Arithmetic between two amounts of different currencies
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Currency code of the left operand
        left: String,
        /// Currency code of the right operand
        right: String,
    },

    /// Division by a zero scalar
    #[error("division by zero")]
    DivisionByZero,

    /// Result exceeded the 96-bit decimal mantissa
    #[error("decimal overflow during {op}")]
    Overflow {
        /// The operation that overflowed
        op: &'static str,
    },
}

/// Result type for domain operations.
pub type MoneyResult<T> = Result<T, MoneyError>;
