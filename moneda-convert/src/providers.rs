//! Built-in rate providers.
//!
//! Stub-grade implementations of the [`RateProvider`] port: identity
//! conversion and a static in-memory table. Live rate sources plug in
//! behind the same port.

use std::collections::HashMap;
use std::sync::RwLock;

use moneda_domain::CurrencyUnit;
use rust_decimal::Decimal;

use crate::error::ConversionError;
use crate::provider::RateProvider;
use crate::query::ConversionQuery;
use crate::rate::{ExchangeRate, RateContext, RateType};

fn pair_unsupported(provider: &str, base: &CurrencyUnit, term: &CurrencyUnit) -> ConversionError {
    ConversionError::CurrencyPairUnsupported {
        provider: provider.to_string(),
        base: base.code().to_string(),
        term: term.code().to_string(),
    }
}

// =============================================================================
// Identity Provider
// =============================================================================

/// Quotes factor 1 for same-currency pairs only.
///
/// Register it so no-op conversions resolve even when no table or
/// live source covers the currency.
pub struct IdentityRateProvider;

/// Name the identity provider registers under.
pub const IDENTITY_PROVIDER: &str = "identity";

impl RateProvider for IdentityRateProvider {
    fn name(&self) -> &str {
        IDENTITY_PROVIDER
    }

    fn rate_types(&self) -> &[RateType] {
        &[RateType::Any]
    }

    fn rate(
        &self,
        base: &CurrencyUnit,
        query: &ConversionQuery,
    ) -> Result<ExchangeRate, ConversionError> {
        let term = query.term_currency();
        if base == term {
            Ok(ExchangeRate::new(
                base.clone(),
                term.clone(),
                Decimal::ONE,
                RateContext::new(IDENTITY_PROVIDER, RateType::Any),
            ))
        } else {
            Err(pair_unsupported(IDENTITY_PROVIDER, base, term))
        }
    }
}

// =============================================================================
// Static Table Provider
// =============================================================================

/// Static in-memory rate table.
///
/// Seeding a pair also stores its inverse, and same-currency pairs
/// quote factor 1 without being seeded. Useful for tests and fixed
/// tariff tables; a live source adapter replaces this behind the same
/// port.
pub struct StaticRateProvider {
    name: String,
    rate_types: [RateType; 1],
    rates: RwLock<HashMap<(String, String), Decimal>>,
}

impl StaticRateProvider {
    /// Create an empty provider quoting `rate_type` under `name`.
    pub fn new(name: impl Into<String>, rate_type: RateType) -> Self {
        Self {
            name: name.into(),
            rate_types: [rate_type],
            rates: RwLock::new(HashMap::new()),
        }
    }

    /// Seed a pair and its inverse, replacing earlier quotes.
    ///
    /// # Errors
    /// `ConversionError::InvalidRate` for a zero or negative factor
    /// (the inverse would be undefined).
    pub fn set_rate(&self, base: &str, term: &str, factor: Decimal) -> Result<(), ConversionError> {
        if factor <= Decimal::ZERO {
            return Err(ConversionError::InvalidRate {
                base: base.to_string(),
                term: term.to_string(),
                factor,
            });
        }
        let mut rates = self.rates.write().unwrap();
        rates.insert((base.to_string(), term.to_string()), factor);
        rates.insert((term.to_string(), base.to_string()), Decimal::ONE / factor);
        Ok(())
    }

    /// Builder-style seeding for test setup.
    pub fn with_rate(self, base: &str, term: &str, factor: Decimal) -> Result<Self, ConversionError> {
        self.set_rate(base, term, factor)?;
        Ok(self)
    }

    /// Number of stored pair quotes (inverses included).
    pub fn rate_count(&self) -> usize {
        self.rates.read().unwrap().len()
    }
}

impl RateProvider for StaticRateProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn rate_types(&self) -> &[RateType] {
        &self.rate_types
    }

    fn rate(
        &self,
        base: &CurrencyUnit,
        query: &ConversionQuery,
    ) -> Result<ExchangeRate, ConversionError> {
        let term = query.term_currency();
        if base == term {
            return Ok(ExchangeRate::new(
                base.clone(),
                term.clone(),
                Decimal::ONE,
                RateContext::new(self.name.clone(), self.rate_types[0]),
            ));
        }

        let factor = {
            let rates = self.rates.read().unwrap();
            rates
                .get(&(base.code().to_string(), term.code().to_string()))
                .copied()
        };
        let factor = factor.ok_or_else(|| pair_unsupported(&self.name, base, term))?;
        Ok(ExchangeRate::new(
            base.clone(),
            term.clone(),
            factor,
            RateContext::new(self.name.clone(), self.rate_types[0]),
        ))
    }
}
