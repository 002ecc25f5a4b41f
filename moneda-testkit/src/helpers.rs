//! Fixture builders for registry and conversion tests.

use std::sync::Arc;

use anyhow::Result;
use rust_decimal_macros::dec;

use moneda_convert::{IdentityRateProvider, MonetaryConversions, RateType, StaticRateProvider};
use moneda_domain::{CurrencyRegistry, CurrencyUnit, Money};

/// A registry seeded with the ISO table plus one custom unit (XBT,
/// eight fraction digits) for custom-currency scenarios.
pub fn demo_registry() -> Result<CurrencyRegistry> {
    let registry = CurrencyRegistry::new();
    registry.register(CurrencyUnit::new("XBT", None, 8)?)?;
    Ok(registry)
}

/// A conversion context with three providers, registered in priority
/// order:
///
/// 1. `table-spot` with spot MXN/USD and USD/CHF rates,
/// 2. `tariff-deferred` with a deferred MXN/CHF contract rate,
/// 3. `identity` as a same-currency fallback.
pub fn demo_conversions() -> Result<MonetaryConversions> {
    let spot = StaticRateProvider::new("table-spot", RateType::Spot)
        .with_rate("MXN", "USD", dec!(0.058))?
        .with_rate("USD", "CHF", dec!(0.91))?;
    let deferred = StaticRateProvider::new("tariff-deferred", RateType::Deferred)
        .with_rate("MXN", "CHF", dec!(0.053))?;

    let conversions = MonetaryConversions::new();
    conversions.register(Arc::new(spot));
    conversions.register(Arc::new(deferred));
    conversions.register(Arc::new(IdentityRateProvider));
    Ok(conversions)
}

/// Build an amount from a registered currency code.
pub fn money(registry: &CurrencyRegistry, code: &str, value: &str) -> Result<Money> {
    let unit = registry.lookup(code)?;
    Ok(Money::parse(&unit, value)?)
}
