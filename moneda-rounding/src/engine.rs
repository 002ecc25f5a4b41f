//! Rounding resolution engine.
//!
//! Default resolution derives the scale from the currency's fraction
//! digits with half-even mode; named policies go through a registered
//! [`RoundingPolicy`] and fail cleanly when the name is unknown.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use moneda_domain::CurrencyUnit;

use crate::error::RoundingError;
use crate::query::RoundingQuery;
use crate::rounding::Rounding;

/// Extensibility seam for named rounding policies.
///
/// Implementations resolve a query into a concrete [`Rounding`]; an
/// implementation may refuse a query it cannot serve. Nothing ships
/// registered: resolving a named query against an engine without a
/// matching policy fails with `UnsupportedRounding`, which callers may
/// treat as "skip this rounding" rather than as a fatal error.
pub trait RoundingPolicy: Send + Sync {
    /// Policy name matched against `RoundingQuery::rounding_name`.
    fn name(&self) -> &str;

    /// Resolve the query into a rounding function.
    fn resolve(&self, query: &RoundingQuery) -> Result<Rounding, RoundingError>;
}

/// Maps (currency, rounding-policy) queries to rounding functions.
///
/// Explicitly constructed; thread-safe using RwLock so concurrent
/// resolution and policy registration are safe.
pub struct RoundingEngine {
    policies: RwLock<HashMap<String, Arc<dyn RoundingPolicy>>>,
}

impl RoundingEngine {
    /// Create an engine with no named policies registered.
    pub fn new() -> Self {
        Self { policies: RwLock::new(HashMap::new()) }
    }

    /// Register a named policy, replacing any previous one of that name.
    pub fn register_policy(&self, policy: Arc<dyn RoundingPolicy>) {
        let name = policy.name().to_string();
        let mut policies = self.policies.write().unwrap();
        if policies.insert(name.clone(), policy).is_some() {
            tracing::warn!(name = %name, "rounding policy replaced");
        } else {
            tracing::debug!(name = %name, "rounding policy registered");
        }
    }

    /// Number of registered named policies.
    pub fn policy_count(&self) -> usize {
        self.policies.read().unwrap().len()
    }

    /// Resolve a query into a rounding function.
    ///
    /// Without a name: scale = explicit override, else the currency's
    /// fraction digits; mode = explicit override, else half-even.
    ///
    /// # Errors
    /// `UnsupportedRounding` for an unregistered name; `MissingTarget`
    /// when neither a currency nor a scale is given.
    pub fn resolve(&self, query: &RoundingQuery) -> Result<Rounding, RoundingError> {
        if let Some(name) = query.rounding_name() {
            let policy = {
                let policies = self.policies.read().unwrap();
                policies.get(name).cloned()
            };
            let policy = policy.ok_or_else(|| RoundingError::UnsupportedRounding {
                name: name.to_string(),
            })?;
            return policy.resolve(query);
        }

        let scale = match (query.scale(), query.currency()) {
            (Some(scale), _) => scale,
            (None, Some(currency)) => currency.fraction_digits(),
            (None, None) => return Err(RoundingError::MissingTarget),
        };
        Ok(Rounding::new(scale, query.mode().unwrap_or_default()))
    }

    /// Default rounding for a currency: half-even at its fraction
    /// digits.
    pub fn for_currency(&self, currency: &CurrencyUnit) -> Rounding {
        Rounding::half_even(currency.fraction_digits())
    }
}

impl Default for RoundingEngine {
    fn default() -> Self {
        Self::new()
    }
}
