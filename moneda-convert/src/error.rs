//! Conversion error types.

use moneda_domain::MoneyError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from conversion provider selection and rate lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// No registered provider can serve the query
    #[error("no conversion provider available: {detail}")]
    NoProviderAvailable {
        /// What was asked for (term currency, provider name, rate types)
        detail: String,
    },

    /// The selected provider has no rate for the currency pair.
    /// Distinct from `NoProviderAvailable`: the provider exists but
    /// does not quote this pair.
    #[error("provider {provider} has no rate for {base}/{term}")]
    CurrencyPairUnsupported {
        /// Provider that was asked
        provider: String,
        /// Base (source) currency code
        base: String,
        /// Term (target) currency code
        term: String,
    },

    /// A seeded rate factor was rejected (zero or negative)
    #[error("invalid rate factor {factor} for {base}/{term}")]
    InvalidRate {
        /// Base currency code
        base: String,
        /// Term currency code
        term: String,
        /// The rejected factor
        factor: Decimal,
    },

    /// Domain error surfaced while applying a rate
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Result type for conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;
