//! Rounding queries.

use moneda_domain::CurrencyUnit;
use serde::{Deserialize, Serialize};

use crate::rounding::RoundingMode;

/// Configuration resolved by the engine into a rounding function.
///
/// Recognized options: a target currency (its fraction digits drive
/// the default scale), a named policy, and scale/mode overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundingQuery {
    currency: Option<CurrencyUnit>,
    rounding_name: Option<String>,
    scale: Option<u32>,
    mode: Option<RoundingMode>,
}

impl RoundingQuery {
    /// Query for a currency's default rounding.
    pub fn of_currency(currency: &CurrencyUnit) -> Self {
        Self { currency: Some(currency.clone()), ..Self::default() }
    }

    /// Query for a named rounding policy.
    pub fn named(name: impl Into<String>) -> Self {
        Self { rounding_name: Some(name.into()), ..Self::default() }
    }

    /// Set the target currency.
    pub fn with_currency(mut self, currency: &CurrencyUnit) -> Self {
        self.currency = Some(currency.clone());
        self
    }

    /// Select a named policy.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.rounding_name = Some(name.into());
        self
    }

    /// Override the target scale.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Override the rounding mode.
    pub fn with_mode(mut self, mode: RoundingMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Target currency, if set.
    pub fn currency(&self) -> Option<&CurrencyUnit> {
        self.currency.as_ref()
    }

    /// Named policy selector, if set.
    pub fn rounding_name(&self) -> Option<&str> {
        self.rounding_name.as_deref()
    }

    /// Explicit scale override, if set.
    pub fn scale(&self) -> Option<u32> {
        self.scale
    }

    /// Explicit mode override, if set.
    pub fn mode(&self) -> Option<RoundingMode> {
        self.mode
    }
}
