//! Exact-decimal monetary amounts.
//!
//! `Money` is an immutable (currency, value) pair over `rust_decimal`,
//! i.e. scaled-integer arithmetic (unscaled mantissa + scale), never
//! binary floating point. Every operation returns a new instance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::currency::CurrencyUnit;
use crate::error::MoneyError;
use crate::operator::{MoneyOperator, MoneyQuery};

/// Immutable (currency, exact-decimal value) pair.
///
/// # Invariants
/// - Arithmetic between two amounts of different currencies fails with
///   `CurrencyMismatch`; there is no implicit conversion.
/// - Addition and subtraction keep the max of the operand scales, so no
///   precision is lost.
/// - Multiplication and division perform no implicit rounding; results
///   may carry extended scale until explicitly rounded.
///
/// # Examples
/// ```
/// # use moneda_domain::{CurrencyUnit, Money};
/// # use rust_decimal_macros::dec;
/// let cop = CurrencyUnit::new("COP", Some(170), 2).unwrap();
/// let total = Money::of(&cop, 500_000)
///     .subtract(&Money::of(&cop, 100_000)).unwrap()
///     .multiply(dec!(2)).unwrap()
///     .add(&Money::of(&cop, 100_000)).unwrap();
/// assert_eq!(total, Money::of(&cop, 900_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    currency: CurrencyUnit,
    amount: Decimal,
}

impl Money {
    /// Build an amount from a currency and a ready decimal value.
    pub fn new(currency: CurrencyUnit, amount: Decimal) -> Self {
        Self { currency, amount }
    }

    /// Build an amount from any lossless numeric input (integers,
    /// decimals).
    pub fn of(currency: &CurrencyUnit, value: impl Into<Decimal>) -> Self {
        Self::new(currency.clone(), value.into())
    }

    /// Parse a decimal string into an amount.
    ///
    /// # Errors
    /// Returns `MoneyError::InvalidAmount` when the text is not a
    /// decimal number.
    pub fn parse(currency: &CurrencyUnit, input: &str) -> Result<Self, MoneyError> {
        let amount = Decimal::from_str(input).map_err(|e| MoneyError::InvalidAmount {
            input: input.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::new(currency.clone(), amount))
    }

    /// The amount's currency.
    pub fn currency(&self) -> &CurrencyUnit {
        &self.currency
    }

    /// The exact decimal value.
    pub fn value(&self) -> Decimal {
        self.amount
    }

    /// Total significant digits of the unscaled value.
    ///
    /// `500.55` has precision 5; zero has precision 1.
    pub fn precision(&self) -> u32 {
        let mut mantissa = self.amount.mantissa().unsigned_abs();
        if mantissa == 0 {
            return 1;
        }
        let mut digits = 0u32;
        while mantissa > 0 {
            mantissa /= 10;
            digits += 1;
        }
        digits
    }

    /// Digits to the right of the decimal point.
    pub fn scale(&self) -> u32 {
        self.amount.scale()
    }

    /// Numerator of the fractional part, carrying the sign.
    ///
    /// `0.55` yields 55; `-0.55` yields -55. Not reduced.
    pub fn fraction_numerator(&self) -> i128 {
        self.amount.mantissa() % self.fraction_denominator()
    }

    /// Denominator of the fractional part: 10^scale, not reduced.
    ///
    /// `0.55` yields 100; a whole number yields 1.
    pub fn fraction_denominator(&self) -> i128 {
        10i128.pow(self.amount.scale())
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                left: self.currency.code().to_string(),
                right: other.currency.code().to_string(),
            })
        }
    }

    /// Add another amount of the same currency.
    ///
    /// # Errors
    /// `CurrencyMismatch` across currencies; `Overflow` past the
    /// decimal mantissa.
    pub fn add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        let sum = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow { op: "add" })?;
        Ok(Money::new(self.currency.clone(), sum))
    }

    /// Subtract another amount of the same currency.
    ///
    /// # Errors
    /// `CurrencyMismatch` across currencies; `Overflow` past the
    /// decimal mantissa.
    pub fn subtract(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        let diff = self
            .amount
            .checked_sub(other.amount)
            .ok_or(MoneyError::Overflow { op: "subtract" })?;
        Ok(Money::new(self.currency.clone(), diff))
    }

    /// Multiply by a dimensionless scalar. No implicit rounding.
    ///
    /// # Errors
    /// `Overflow` past the decimal mantissa.
    pub fn multiply(&self, scalar: Decimal) -> Result<Money, MoneyError> {
        let product = self
            .amount
            .checked_mul(scalar)
            .ok_or(MoneyError::Overflow { op: "multiply" })?;
        Ok(Money::new(self.currency.clone(), product))
    }

    /// Divide by a dimensionless scalar. No implicit rounding.
    ///
    /// # Errors
    /// `DivisionByZero` for a zero scalar; `Overflow` past the decimal
    /// mantissa.
    pub fn divide(&self, scalar: Decimal) -> Result<Money, MoneyError> {
        if scalar.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let quotient = self
            .amount
            .checked_div(scalar)
            .ok_or(MoneyError::Overflow { op: "divide" })?;
        Ok(Money::new(self.currency.clone(), quotient))
    }

    /// Whether the value is strictly positive.
    pub fn is_positive(&self) -> bool {
        !self.amount.is_zero() && self.amount.is_sign_positive()
    }

    /// Whether the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        !self.amount.is_zero() && self.amount.is_sign_negative()
    }

    /// Whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Apply a unary transform, producing a new amount.
    ///
    /// The sole polymorphic extension point: rounding, conversion, and
    /// ad-hoc caller-supplied operators all enter here.
    ///
    /// # Examples
    /// ```
    /// # use moneda_domain::{CurrencyUnit, Money, MoneyError};
    /// # use rust_decimal_macros::dec;
    /// let cop = CurrencyUnit::new("COP", Some(170), 2).unwrap();
    /// let doubler = |m: &Money| m.multiply(dec!(2));
    /// let doubled = Money::of(&cop, 500_000).with(&doubler).unwrap();
    /// assert_eq!(doubled, Money::of(&cop, 1_000_000));
    /// ```
    pub fn with<O: MoneyOperator + ?Sized>(&self, operator: &O) -> Result<Money, O::Error> {
        operator.apply(self)
    }

    /// Evaluate a read-only query against this amount.
    ///
    /// # Examples
    /// ```
    /// # use moneda_domain::{CurrencyUnit, Money};
    /// let cop = CurrencyUnit::new("COP", Some(170), 2).unwrap();
    /// let positive = |m: &Money| m.is_positive();
    /// assert!(Money::of(&cop, 500_000).query(&positive));
    /// ```
    pub fn query<Q: MoneyQuery + ?Sized>(&self, query: &Q) -> Q::Output {
        query.evaluate(self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency.code(), self.amount)
    }
}
