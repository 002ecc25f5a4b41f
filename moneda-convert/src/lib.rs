//! Moneda Conversion Layer
//!
//! Pluggable currency conversion: providers quote exchange rates
//! behind the [`RateProvider`] port, [`MonetaryConversions`] selects
//! among registered providers, and the resulting [`CurrencyConversion`]
//! applies a rate as a money operator.
//!
//! # Flow
//!
//! ```text
//! ConversionQuery → MonetaryConversions → RateProvider → ExchangeRate
//!                                       ↘ CurrencyConversion (operator)
//! ```

#![warn(clippy::all)]

pub mod conversions;
pub mod error;
pub mod provider;
pub mod providers;
pub mod query;
pub mod rate;

// Re-exports for convenience
pub use conversions::{CurrencyConversion, MonetaryConversions};
pub use error::{ConversionError, ConversionResult};
pub use provider::RateProvider;
pub use providers::{IdentityRateProvider, StaticRateProvider};
pub use query::ConversionQuery;
pub use rate::{ExchangeRate, RateContext, RateType};
