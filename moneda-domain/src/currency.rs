//! Currency descriptors.
//!
//! Immutable, validated at construction time. Identity is the code:
//! two descriptors with the same code compare equal even if their
//! metadata differs.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::MoneyError;

/// Maximum fraction digits an exact decimal value can carry.
pub const MAX_FRACTION_DIGITS: u32 = 28;

/// Immutable descriptor of a currency.
///
/// # Invariants
/// - `code` is non-empty ASCII alphanumeric (ISO-4217-like)
/// - `fraction_digits <= MAX_FRACTION_DIGITS`
///
/// Equality, ordering, and hashing consider the code alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyUnit {
    code: String,
    numeric_code: Option<u16>,
    fraction_digits: u32,
}

impl CurrencyUnit {
    /// Create a validated currency descriptor.
    ///
    /// # Examples
    /// ```
    /// # use moneda_domain::CurrencyUnit;
    /// let xbt = CurrencyUnit::new("XBT", None, 3).unwrap();
    /// assert_eq!(xbt.code(), "XBT");
    /// assert_eq!(xbt.numeric_code(), None);
    /// assert_eq!(xbt.fraction_digits(), 3);
    /// ```
    ///
    /// # Errors
    /// Returns `MoneyError::InvalidCurrencyUnit` if the code is empty or
    /// not ASCII alphanumeric, or if `fraction_digits` exceeds the
    /// decimal scale limit.
    pub fn new(
        code: impl Into<String>,
        numeric_code: Option<u16>,
        fraction_digits: u32,
    ) -> Result<Self, MoneyError> {
        let code = code.into();
        if code.is_empty() {
            return Err(MoneyError::InvalidCurrencyUnit {
                reason: "code must be non-empty".to_string(),
            });
        }
        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(MoneyError::InvalidCurrencyUnit {
                reason: format!("code {:?} must be ASCII alphanumeric", code),
            });
        }
        if fraction_digits > MAX_FRACTION_DIGITS {
            return Err(MoneyError::InvalidCurrencyUnit {
                reason: format!(
                    "fraction digits {} exceeds limit {}",
                    fraction_digits, MAX_FRACTION_DIGITS
                ),
            });
        }
        Ok(Self { code, numeric_code, fraction_digits })
    }

    /// Constructor for the built-in seed tables, which are known valid.
    pub(crate) fn seed(code: &str, numeric_code: u16, fraction_digits: u32) -> Self {
        Self {
            code: code.to_string(),
            numeric_code: Some(numeric_code),
            fraction_digits,
        }
    }

    /// Currency code, the unique key (e.g. "COP").
    pub fn code(&self) -> &str {
        &self.code
    }

    /// ISO numeric code, if the currency has one.
    pub fn numeric_code(&self) -> Option<u16> {
        self.numeric_code
    }

    /// Default number of fraction digits for rounding and display.
    pub fn fraction_digits(&self) -> u32 {
        self.fraction_digits
    }
}

impl PartialEq for CurrencyUnit {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for CurrencyUnit {}

impl Hash for CurrencyUnit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialOrd for CurrencyUnit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CurrencyUnit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(&other.code)
    }
}

impl fmt::Display for CurrencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
