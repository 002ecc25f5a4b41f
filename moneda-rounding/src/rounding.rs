//! Rounding modes and the resolved rounding operator.

use moneda_domain::{Money, MoneyOperator};
use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

use crate::error::RoundingError;

/// Rounding mode applied at a target scale.
///
/// Maps onto `rust_decimal::RoundingStrategy`. `HalfEven` (banker's
/// rounding) is the monetary default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Round half to the nearest even digit (banker's rounding)
    #[default]
    HalfEven,
    /// Round half away from zero
    HalfUp,
    /// Round half toward zero
    HalfDown,
    /// Round away from zero
    Up,
    /// Round toward zero (truncate)
    Down,
    /// Round toward positive infinity
    Ceiling,
    /// Round toward negative infinity
    Floor,
}

impl RoundingMode {
    fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfDown => RoundingStrategy::MidpointTowardZero,
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::Ceiling => RoundingStrategy::ToPositiveInfinity,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
        }
    }
}

/// A resolved rounding function: target scale plus mode.
///
/// Applied through the operator seam (`amount.with(&rounding)`).
/// Idempotent: applying the same rounding twice equals applying it
/// once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rounding {
    scale: u32,
    mode: RoundingMode,
}

impl Rounding {
    /// Rounding at an explicit scale and mode.
    pub fn new(scale: u32, mode: RoundingMode) -> Self {
        Self { scale, mode }
    }

    /// Banker's rounding at the given scale.
    pub fn half_even(scale: u32) -> Self {
        Self::new(scale, RoundingMode::HalfEven)
    }

    /// Target scale (digits right of the decimal point).
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Rounding mode.
    pub fn mode(&self) -> RoundingMode {
        self.mode
    }
}

impl MoneyOperator for Rounding {
    type Error = RoundingError;

    fn apply(&self, amount: &Money) -> Result<Money, RoundingError> {
        let rounded = amount
            .value()
            .round_dp_with_strategy(self.scale, self.mode.strategy());
        Ok(Money::new(amount.currency().clone(), rounded))
    }
}
