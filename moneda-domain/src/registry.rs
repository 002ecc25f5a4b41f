//! Currency registry.
//!
//! Explicitly constructed and passed by callers; there is no ambient
//! global. Thread-safe using RwLock for concurrent access: many
//! concurrent lookups, exclusive registration, so a lookup never
//! observes a partially registered entry.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::currency::CurrencyUnit;
use crate::error::MoneyError;

/// Built-in ISO 4217 seed: (code, numeric code, fraction digits).
const ISO_SEED: &[(&str, u16, u32)] = &[
    ("ARS", 32, 2),
    ("AUD", 36, 2),
    ("BHD", 48, 3),
    ("BRL", 986, 2),
    ("CAD", 124, 2),
    ("CHF", 756, 2),
    ("CLP", 152, 0),
    ("CNY", 156, 2),
    ("COP", 170, 2),
    ("CZK", 203, 2),
    ("DKK", 208, 2),
    ("EUR", 978, 2),
    ("GBP", 826, 2),
    ("HKD", 344, 2),
    ("ILS", 376, 2),
    ("INR", 356, 2),
    ("JPY", 392, 0),
    ("KRW", 410, 0),
    ("KWD", 414, 3),
    ("MXN", 484, 2),
    ("NOK", 578, 2),
    ("NZD", 554, 2),
    ("PEN", 604, 2),
    ("PLN", 985, 2),
    ("SEK", 752, 2),
    ("SGD", 702, 2),
    ("TND", 788, 3),
    ("TRY", 949, 2),
    ("USD", 840, 2),
    ("ZAR", 710, 2),
];

/// Static region-to-currency table for locale resolution.
const LOCALE_REGIONS: &[(&str, &str)] = &[
    ("AR", "ARS"),
    ("AT", "EUR"),
    ("AU", "AUD"),
    ("BE", "EUR"),
    ("BR", "BRL"),
    ("CA", "CAD"),
    ("CH", "CHF"),
    ("CL", "CLP"),
    ("CN", "CNY"),
    ("CO", "COP"),
    ("CZ", "CZK"),
    ("DE", "EUR"),
    ("DK", "DKK"),
    ("ES", "EUR"),
    ("FI", "EUR"),
    ("FR", "EUR"),
    ("GB", "GBP"),
    ("HK", "HKD"),
    ("IE", "EUR"),
    ("IL", "ILS"),
    ("IN", "INR"),
    ("IT", "EUR"),
    ("JP", "JPY"),
    ("KR", "KRW"),
    ("KW", "KWD"),
    ("MX", "MXN"),
    ("NL", "EUR"),
    ("NO", "NOK"),
    ("NZ", "NZD"),
    ("PE", "PEN"),
    ("PL", "PLN"),
    ("PT", "EUR"),
    ("SE", "SEK"),
    ("SG", "SGD"),
    ("TN", "TND"),
    ("TR", "TRY"),
    ("US", "USD"),
    ("ZA", "ZAR"),
];

/// Extract the 2-letter region subtag from a locale tag.
///
/// Accepts BCP-47-ish tags ("es-CO", "en_US") and bare regions, which
/// must be uppercase ("US"): a bare lowercase 2-letter tag reads as a
/// language ("es") and does not name a region.
fn region_subtag(tag: &str) -> Option<String> {
    let tag = tag.trim();
    if !tag.contains(['-', '_']) {
        if tag.len() == 2 && tag.chars().all(|c| c.is_ascii_uppercase()) {
            return Some(tag.to_string());
        }
        return None;
    }
    tag.split(['-', '_'])
        .filter(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
        .next_back()
        .map(|part| part.to_ascii_uppercase())
}

/// Registry of currency descriptors.
///
/// Registry-held entries are `Arc`-shared, so repeated lookups of the
/// same code yield reference-equal descriptors until the code is
/// re-registered.
pub struct CurrencyRegistry {
    units: RwLock<HashMap<String, Arc<CurrencyUnit>>>,
}

impl CurrencyRegistry {
    /// Create a registry seeded with the built-in ISO table.
    pub fn new() -> Self {
        let registry = Self::empty();
        {
            let mut units = registry.units.write().unwrap();
            for &(code, numeric, digits) in ISO_SEED {
                units.insert(code.to_string(), Arc::new(CurrencyUnit::seed(code, numeric, digits)));
            }
        }
        registry
    }

    /// Create an empty registry with no seeded currencies.
    pub fn empty() -> Self {
        Self { units: RwLock::new(HashMap::new()) }
    }

    /// Look up a currency by code.
    ///
    /// # Errors
    /// Returns `MoneyError::UnknownCurrency` if the code is unregistered.
    pub fn lookup(&self, code: &str) -> Result<Arc<CurrencyUnit>, MoneyError> {
        let units = self.units.read().unwrap();
        units
            .get(code)
            .cloned()
            .ok_or_else(|| MoneyError::UnknownCurrency { code: code.to_string() })
    }

    /// Resolve a locale tag ("es-CO", "en_US", "US") to its currency.
    ///
    /// # Errors
    /// Returns `MoneyError::UnknownCurrency` if the tag has no region
    /// mapping or the mapped code is unregistered.
    pub fn lookup_by_locale(&self, tag: &str) -> Result<Arc<CurrencyUnit>, MoneyError> {
        let region = region_subtag(tag)
            .ok_or_else(|| MoneyError::UnknownCurrency { code: tag.to_string() })?;
        let code = LOCALE_REGIONS
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, c)| *c)
            .ok_or_else(|| MoneyError::UnknownCurrency { code: tag.to_string() })?;
        self.lookup(code)
    }

    /// Register a currency, overwriting any previous entry for its code.
    ///
    /// # Errors
    /// Returns `MoneyError::InvalidCurrencyUnit` if the descriptor's
    /// code is empty (possible via deserialized descriptors).
    pub fn register(&self, unit: CurrencyUnit) -> Result<(), MoneyError> {
        if unit.code().is_empty() {
            return Err(MoneyError::InvalidCurrencyUnit {
                reason: "code must be non-empty".to_string(),
            });
        }
        let code = unit.code().to_string();
        let mut units = self.units.write().unwrap();
        if units.insert(code.clone(), Arc::new(unit)).is_some() {
            tracing::warn!(code = %code, "currency registration overwritten");
        } else {
            tracing::debug!(code = %code, "currency registered");
        }
        Ok(())
    }

    /// Whether a code has a registration.
    pub fn is_registered(&self, code: &str) -> bool {
        self.units.read().unwrap().contains_key(code)
    }

    /// Number of registered currencies.
    pub fn count(&self) -> usize {
        self.units.read().unwrap().len()
    }
}

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
