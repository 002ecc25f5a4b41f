//! Operator and query protocol.
//!
//! Not a component but a protocol: anything transforming
//! `Money -> Money` may be passed to [`Money::with`]; anything
//! evaluating `Money -> R` to [`Money::query`]. Rounding, conversion,
//! and caller-supplied closures compose through these two seams without
//! the core knowing their concrete identity.

use crate::money::Money;

/// A pure unary transform over monetary amounts.
///
/// Implementations must not mutate their input; they either return a
/// new amount or fail, leaving the input unchanged. Closures of shape
/// `Fn(&Money) -> Result<Money, E>` satisfy this trait directly.
pub trait MoneyOperator {
    /// Failure type surfaced by this operator.
    type Error;

    /// Apply the transform, producing a new amount.
    fn apply(&self, amount: &Money) -> Result<Money, Self::Error>;
}

impl<F, E> MoneyOperator for F
where
    F: Fn(&Money) -> Result<Money, E>,
{
    type Error = E;

    fn apply(&self, amount: &Money) -> Result<Money, E> {
        self(amount)
    }
}

/// A pure read-only extractor over monetary amounts.
///
/// Closures of shape `Fn(&Money) -> R` satisfy this trait directly.
pub trait MoneyQuery {
    /// Result type produced by the query.
    type Output;

    /// Evaluate against an amount without modifying it.
    fn evaluate(&self, amount: &Money) -> Self::Output;
}

impl<F, R> MoneyQuery for F
where
    F: Fn(&Money) -> R,
{
    type Output = R;

    fn evaluate(&self, amount: &Money) -> R {
        self(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::CurrencyUnit;
    use crate::error::MoneyError;
    use rust_decimal_macros::dec;

    /// A named operator struct works the same as a closure.
    struct Halver;

    impl MoneyOperator for Halver {
        type Error = MoneyError;

        fn apply(&self, amount: &Money) -> Result<Money, MoneyError> {
            amount.divide(dec!(2))
        }
    }

    #[test]
    fn test_struct_operator() {
        let cop = CurrencyUnit::new("COP", Some(170), 2).unwrap();
        let half = Money::of(&cop, 100).with(&Halver).unwrap();
        assert_eq!(half, Money::of(&cop, 50));
    }

    #[test]
    fn test_operators_compose() {
        let cop = CurrencyUnit::new("COP", Some(170), 2).unwrap();
        let doubler = |m: &Money| m.multiply(dec!(2));
        let result = Money::of(&cop, 100).with(&doubler).unwrap().with(&Halver).unwrap();
        assert_eq!(result, Money::of(&cop, 100));
    }

    #[test]
    fn test_query_extracts_arbitrary_type() {
        let cop = CurrencyUnit::new("COP", Some(170), 2).unwrap();
        let code = |m: &Money| m.currency().code().to_string();
        assert_eq!(Money::of(&cop, 100).query(&code), "COP");
    }
}
