//! Exchange rates and their provenance.

use chrono::{DateTime, Utc};
use moneda_domain::CurrencyUnit;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a rate was quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateType {
    /// Current market rate
    Spot,
    /// Rate as of some past point in time
    Historic,
    /// Contractually deferred rate (e.g. per-customer tariffs)
    Deferred,
    /// Wildcard: matches any rate type
    Any,
}

impl RateType {
    /// Whether a provider quoting `self` can serve a request for
    /// `requested`. `Any` matches in either direction.
    pub fn serves(self, requested: RateType) -> bool {
        self == requested || self == RateType::Any || requested == RateType::Any
    }
}

impl fmt::Display for RateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateType::Spot => write!(f, "SPOT"),
            RateType::Historic => write!(f, "HISTORIC"),
            RateType::Deferred => write!(f, "DEFERRED"),
            RateType::Any => write!(f, "ANY"),
        }
    }
}

/// Provenance metadata attached to an exchange rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateContext {
    provider_name: String,
    rate_type: RateType,
    timestamp: DateTime<Utc>,
}

impl RateContext {
    /// Context stamped with the current time.
    pub fn new(provider_name: impl Into<String>, rate_type: RateType) -> Self {
        Self::at(provider_name, rate_type, Utc::now())
    }

    /// Context with an explicit timestamp (historic rates).
    pub fn at(
        provider_name: impl Into<String>,
        rate_type: RateType,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self { provider_name: provider_name.into(), rate_type, timestamp }
    }

    /// Name of the provider that quoted the rate.
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    /// Rate type the quote was made under.
    pub fn rate_type(&self) -> RateType {
        self.rate_type
    }

    /// When the quote was made.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// A factor converting a base-currency amount into the term currency,
/// with provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    base_currency: CurrencyUnit,
    term_currency: CurrencyUnit,
    factor: Decimal,
    context: RateContext,
}

impl ExchangeRate {
    /// Build a rate quote.
    pub fn new(
        base_currency: CurrencyUnit,
        term_currency: CurrencyUnit,
        factor: Decimal,
        context: RateContext,
    ) -> Self {
        Self { base_currency, term_currency, factor, context }
    }

    /// Base (source) currency.
    pub fn base_currency(&self) -> &CurrencyUnit {
        &self.base_currency
    }

    /// Term (target) currency.
    pub fn term_currency(&self) -> &CurrencyUnit {
        &self.term_currency
    }

    /// Multiplicative conversion factor.
    pub fn factor(&self) -> Decimal {
        self.factor
    }

    /// Provenance metadata.
    pub fn context(&self) -> &RateContext {
        &self.context
    }
}
