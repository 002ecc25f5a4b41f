//! End-to-end flow: currency lookup, arithmetic, functional operators,
//! rounding, and multi-provider conversion against the testkit fixtures.

use anyhow::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use moneda_convert::{ConversionError, ConversionQuery, RateType};
use moneda_domain::{Money, MoneyError};
use moneda_rounding::{RoundingEngine, RoundingError, RoundingQuery};
use moneda_testkit::{demo_conversions, demo_registry, init_tracing, money};

#[test]
fn test_lookup_arithmetic_chain() -> Result<()> {
    init_tracing();
    let registry = demo_registry()?;

    let by_code = registry.lookup("COP")?;
    let by_locale = registry.lookup_by_locale("es-CO")?;
    assert_eq!(by_code, by_locale);

    let start = money(&registry, "COP", "500000")?;
    let result = start
        .subtract(&money(&registry, "COP", "100000")?)?
        .multiply(dec!(2))?
        .add(&money(&registry, "COP", "100000")?)?;
    assert_eq!(result.value(), dec!(900000));
    assert_eq!(result.currency().code(), "COP");
    Ok(())
}

#[test]
fn test_closure_operator_and_query() -> Result<()> {
    let registry = demo_registry()?;
    let amount = money(&registry, "USD", "250.25")?;

    let doubler = |m: &Money| -> Result<Money, MoneyError> { m.multiply(dec!(2)) };
    let doubled = amount.with(&doubler)?;
    assert_eq!(doubled.value(), dec!(500.50));

    let is_positive = |m: &Money| m.value() > Decimal::ZERO;
    assert!(doubled.query(&is_positive));
    Ok(())
}

#[test]
fn test_default_rounding_for_currency() -> Result<()> {
    let registry = demo_registry()?;
    let engine = RoundingEngine::new();

    let cop = registry.lookup("COP")?;
    let raw = Money::of(&cop, dec!(500000.3472));
    let rounded = raw.with(&engine.for_currency(&cop))?;
    assert_eq!(rounded.value(), dec!(500000.35));
    Ok(())
}

#[test]
fn test_cash_rounding_unsupported_without_policy() -> Result<()> {
    let engine = RoundingEngine::new();
    let err = engine
        .resolve(&RoundingQuery::named("cashRounding"))
        .unwrap_err();
    assert!(matches!(err, RoundingError::UnsupportedRounding { ref name } if name == "cashRounding"));
    Ok(())
}

#[test]
fn test_spot_conversion_mxn_to_usd() -> Result<()> {
    init_tracing();
    let registry = demo_registry()?;
    let conversions = demo_conversions()?;

    let usd = registry.lookup("USD")?;
    let conversion = conversions.to(&usd)?;

    let pesos = money(&registry, "MXN", "500")?;
    let dollars = pesos.with(&conversion)?;
    assert_eq!(dollars.currency().code(), "USD");
    assert_eq!(dollars.value(), dec!(29.000));
    Ok(())
}

#[test]
fn test_deferred_conversion_with_attributes() -> Result<()> {
    let registry = demo_registry()?;
    let conversions = demo_conversions()?;

    let chf = registry.lookup("CHF")?;
    let query = ConversionQuery::to(&chf)
        .with_rate_type(RateType::Deferred)
        .with_provider("tariff-deferred")
        .with_attribute("customerID", "1234")
        .with_attribute("contractID", "ABC-2024");
    assert_eq!(query.attribute("customerID"), Some("1234"));

    let conversion = conversions.conversion(query)?;
    assert_eq!(conversion.provider_name(), "tariff-deferred");

    let pesos = money(&registry, "MXN", "1000")?;
    let francs = pesos.with(&conversion)?;
    assert_eq!(francs.currency().code(), "CHF");
    assert_eq!(francs.value(), dec!(53.000));
    Ok(())
}

#[test]
fn test_same_currency_conversion_is_a_no_op() -> Result<()> {
    let registry = demo_registry()?;
    let conversions = demo_conversions()?;

    let usd = registry.lookup("USD")?;
    let amount = money(&registry, "USD", "42.42")?;

    let default_chain = conversions.to(&usd)?;
    assert_eq!(amount.with(&default_chain)?, amount);

    let identity = conversions.conversion(ConversionQuery::to(&usd).with_provider("identity"))?;
    assert_eq!(identity.provider_name(), "identity");
    assert_eq!(amount.with(&identity)?, amount);
    Ok(())
}

#[test]
fn test_unsupported_pair_reports_no_provider() -> Result<()> {
    let registry = demo_registry()?;
    let conversions = demo_conversions()?;

    let jpy = registry.lookup("JPY")?;
    let conversion = conversions.to(&jpy)?;
    let pesos = money(&registry, "MXN", "100")?;
    let err = pesos.with(&conversion).unwrap_err();
    assert!(matches!(err, ConversionError::CurrencyPairUnsupported { .. }));
    Ok(())
}

#[test]
fn test_conversion_is_linear() -> Result<()> {
    let registry = demo_registry()?;
    let conversions = demo_conversions()?;

    let usd = registry.lookup("USD")?;
    let conversion = conversions.to(&usd)?;

    let a = money(&registry, "MXN", "120")?;
    let b = money(&registry, "MXN", "380")?;
    let summed = a.add(&b)?.with(&conversion)?;
    let converted = a.with(&conversion)?.add(&b.with(&conversion)?)?;
    assert_eq!(summed, converted);
    Ok(())
}
