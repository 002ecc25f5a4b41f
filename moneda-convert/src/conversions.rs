//! Provider registry and the conversion operator.

use std::sync::{Arc, RwLock};

use moneda_domain::{CurrencyUnit, Money, MoneyError, MoneyOperator};

use crate::error::ConversionError;
use crate::provider::RateProvider;
use crate::query::ConversionQuery;
use crate::rate::ExchangeRate;

/// Registry of conversion providers.
///
/// Explicitly constructed and passed by callers. Selection: an
/// explicit `provider_name` wins; otherwise the first registered
/// provider whose rate types serve the query (registration order is
/// priority).
pub struct MonetaryConversions {
    providers: RwLock<Vec<Arc<dyn RateProvider>>>,
}

impl MonetaryConversions {
    /// Create a registry with no providers.
    pub fn new() -> Self {
        Self { providers: RwLock::new(Vec::new()) }
    }

    /// Register a provider at the lowest priority.
    pub fn register(&self, provider: Arc<dyn RateProvider>) {
        tracing::debug!(provider = provider.name(), "conversion provider registered");
        self.providers.write().unwrap().push(provider);
    }

    /// Number of registered providers.
    pub fn provider_count(&self) -> usize {
        self.providers.read().unwrap().len()
    }

    /// Resolve a query into a reusable conversion operator.
    ///
    /// # Errors
    /// `ConversionError::NoProviderAvailable` when no registered
    /// provider matches the query's name or rate types.
    pub fn conversion(&self, query: ConversionQuery) -> Result<CurrencyConversion, ConversionError> {
        let selected = {
            let providers = self.providers.read().unwrap();
            if let Some(name) = query.provider_name() {
                providers.iter().find(|p| p.name() == name).cloned()
            } else {
                providers.iter().find(|p| p.supports(&query)).cloned()
            }
        };

        let provider = selected.ok_or_else(|| {
            let detail = match query.provider_name() {
                Some(name) => format!("provider {:?}", name),
                None => format!("term {}", query.term_currency().code()),
            };
            ConversionError::NoProviderAvailable { detail }
        })?;
        tracing::debug!(
            provider = provider.name(),
            term = query.term_currency().code(),
            "conversion provider selected"
        );
        Ok(CurrencyConversion { provider, query })
    }

    /// Shorthand: conversion into `term` with no further constraints.
    pub fn to(&self, term: &CurrencyUnit) -> Result<CurrencyConversion, ConversionError> {
        self.conversion(ConversionQuery::to(term))
    }
}

impl Default for MonetaryConversions {
    fn default() -> Self {
        Self::new()
    }
}

/// A reusable conversion operator bound to one provider and one term
/// currency.
///
/// Applying it multiplies the amount by the quoted factor and yields a
/// value in the term currency: `amount.with(&conversion)`.
pub struct CurrencyConversion {
    provider: Arc<dyn RateProvider>,
    query: ConversionQuery,
}

impl CurrencyConversion {
    /// The currency results are denominated in.
    pub fn term_currency(&self) -> &CurrencyUnit {
        self.query.term_currency()
    }

    /// Name of the provider backing this conversion.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Quote the rate that would be applied to `amount`.
    ///
    /// # Errors
    /// `ConversionError::CurrencyPairUnsupported` when the provider has
    /// no rate for the pair.
    pub fn exchange_rate(&self, amount: &Money) -> Result<ExchangeRate, ConversionError> {
        self.provider.rate(amount.currency(), &self.query)
    }
}

impl MoneyOperator for CurrencyConversion {
    type Error = ConversionError;

    fn apply(&self, amount: &Money) -> Result<Money, ConversionError> {
        let rate = self.exchange_rate(amount)?;
        let value = amount
            .value()
            .checked_mul(rate.factor())
            .ok_or(MoneyError::Overflow { op: "convert" })?;
        Ok(Money::new(rate.term_currency().clone(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{IdentityRateProvider, StaticRateProvider};
    use crate::rate::RateType;
    use rust_decimal_macros::dec;

    fn mxn() -> CurrencyUnit {
        CurrencyUnit::new("MXN", Some(484), 2).unwrap()
    }

    fn usd() -> CurrencyUnit {
        CurrencyUnit::new("USD", Some(840), 2).unwrap()
    }

    fn chf() -> CurrencyUnit {
        CurrencyUnit::new("CHF", Some(756), 2).unwrap()
    }

    fn seeded() -> MonetaryConversions {
        let conversions = MonetaryConversions::new();
        conversions.register(Arc::new(IdentityRateProvider));
        conversions.register(Arc::new(
            StaticRateProvider::new("table-spot", RateType::Spot)
                .with_rate("MXN", "USD", dec!(0.058))
                .unwrap(),
        ));
        conversions.register(Arc::new(
            StaticRateProvider::new("tariff-deferred", RateType::Deferred)
                .with_rate("MXN", "CHF", dec!(0.053))
                .unwrap(),
        ));
        conversions
    }

    #[test]
    fn test_conversion_applies_as_operator() {
        let conversions = seeded();
        let conversion = conversions.to(&usd()).unwrap();

        let pesos = Money::of(&mxn(), 500);
        let dollars = pesos.with(&conversion).unwrap();
        assert_eq!(dollars.currency().code(), "USD");
        assert_eq!(dollars.value(), dec!(29.0));

        let rate = conversion.exchange_rate(&pesos).unwrap();
        assert_eq!(rate.factor(), dec!(0.058));
        assert_eq!(rate.context().provider_name(), "table-spot");
    }

    #[test]
    fn test_priority_is_registration_order() {
        // Identity is registered first; a same-currency conversion
        // resolves to it even though the static table also matches.
        let conversions = seeded();
        let conversion = conversions.to(&mxn()).unwrap();
        assert_eq!(conversion.provider_name(), "identity");

        let back = Money::of(&mxn(), 500).with(&conversion).unwrap();
        assert_eq!(back, Money::of(&mxn(), 500));
    }

    #[test]
    fn test_selection_by_rate_type() {
        let conversions = seeded();
        let query = ConversionQuery::to(&chf())
            .with_rate_type(RateType::Deferred)
            .with_attribute("customerID", "1234")
            .with_attribute("contractID", "ABC");
        let conversion = conversions.conversion(query).unwrap();
        assert_eq!(conversion.provider_name(), "identity");
        // Identity can't quote MXN/CHF; the explicit name routes past it.
        assert!(Money::of(&mxn(), 500).with(&conversion).is_err());

        let query = ConversionQuery::to(&chf())
            .with_rate_type(RateType::Deferred)
            .with_provider("tariff-deferred");
        let conversion = conversions.conversion(query).unwrap();
        let francs = Money::of(&mxn(), 500).with(&conversion).unwrap();
        assert_eq!(francs.currency().code(), "CHF");
        assert_eq!(francs.value(), dec!(26.5));
    }

    #[test]
    fn test_no_provider_available() {
        let conversions = MonetaryConversions::new();
        let result = conversions.to(&usd());
        assert!(matches!(
            result,
            Err(ConversionError::NoProviderAvailable { .. })
        ));
    }

    #[test]
    fn test_unknown_provider_name() {
        let conversions = seeded();
        let query = ConversionQuery::to(&usd()).with_provider("nope");
        let result = conversions.conversion(query);
        assert!(matches!(
            result,
            Err(ConversionError::NoProviderAvailable { .. })
        ));
    }

    #[test]
    fn test_pair_unsupported_is_distinct() {
        let conversions = seeded();
        let query = ConversionQuery::to(&usd()).with_provider("table-spot");
        let conversion = conversions.conversion(query).unwrap();

        let eur = CurrencyUnit::new("EUR", Some(978), 2).unwrap();
        let result = Money::of(&eur, 100).with(&conversion);
        assert!(matches!(
            result,
            Err(ConversionError::CurrencyPairUnsupported { .. })
        ));
    }

    #[test]
    fn test_conversion_linearity() {
        let conversions = seeded();
        let conversion = conversions.to(&usd()).unwrap();

        let a = Money::of(&mxn(), dec!(123.45));
        let b = Money::of(&mxn(), dec!(678.9));
        let of_sum = a.add(&b).unwrap().with(&conversion).unwrap();
        let sum_of = a
            .with(&conversion)
            .unwrap()
            .add(&b.with(&conversion).unwrap())
            .unwrap();
        assert_eq!(of_sum, sum_of);
    }
}
