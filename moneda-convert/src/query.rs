//! Conversion queries.

use moneda_domain::CurrencyUnit;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::rate::RateType;

/// Configuration for selecting a provider and quoting a rate.
///
/// The term currency is required; rate types, an explicit provider
/// name, and free-form attributes (e.g. customerID, contractID) narrow
/// the selection and carry provider-specific routing context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionQuery {
    term_currency: CurrencyUnit,
    rate_types: Vec<RateType>,
    provider_name: Option<String>,
    attributes: HashMap<String, String>,
}

impl ConversionQuery {
    /// Query targeting a term currency with no further constraints.
    pub fn to(term_currency: &CurrencyUnit) -> Self {
        Self {
            term_currency: term_currency.clone(),
            rate_types: Vec::new(),
            provider_name: None,
            attributes: HashMap::new(),
        }
    }

    /// Require a rate type (may be called repeatedly).
    pub fn with_rate_type(mut self, rate_type: RateType) -> Self {
        self.rate_types.push(rate_type);
        self
    }

    /// Select a provider by name, bypassing priority ordering.
    pub fn with_provider(mut self, name: impl Into<String>) -> Self {
        self.provider_name = Some(name.into());
        self
    }

    /// Attach a routing attribute for provider-specific context.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Target (term) currency.
    pub fn term_currency(&self) -> &CurrencyUnit {
        &self.term_currency
    }

    /// Requested rate types; empty means any.
    pub fn rate_types(&self) -> &[RateType] {
        &self.rate_types
    }

    /// Explicit provider selector, if set.
    pub fn provider_name(&self) -> Option<&str> {
        self.provider_name.as_deref()
    }

    /// Look up a routing attribute.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Whether a provider quoting `quoted` satisfies this query's rate
    /// types.
    pub fn accepts_rate_type(&self, quoted: RateType) -> bool {
        self.rate_types.is_empty() || self.rate_types.iter().any(|rt| quoted.serves(*rt))
    }
}
