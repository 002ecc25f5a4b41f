//! Conversion provider port.
//!
//! Providers map (base currency, term currency, query context) to
//! exchange rates. A rate lookup is a pure function of its inputs at
//! call time; providers may cache internally, and the core tolerates
//! either.
//!
//! Implementations:
//! - `IdentityRateProvider` - same-currency pairs at factor 1
//! - `StaticRateProvider` - in-memory table for tests and fixed tariffs
//! - adapters wrapping a live rate source (such an adapter owns its
//!   timeout/retry contract and must not block this core indefinitely)

use moneda_domain::CurrencyUnit;

use crate::error::ConversionError;
use crate::query::ConversionQuery;
use crate::rate::{ExchangeRate, RateType};

/// Port for exchange rate providers.
pub trait RateProvider: Send + Sync {
    /// Provider name, used for explicit selection in queries.
    fn name(&self) -> &str;

    /// Rate types this provider can quote.
    fn rate_types(&self) -> &[RateType];

    /// Quote a rate from `base` into the query's term currency.
    ///
    /// # Errors
    /// `ConversionError::CurrencyPairUnsupported` when the provider has
    /// no rate for the pair.
    fn rate(
        &self,
        base: &CurrencyUnit,
        query: &ConversionQuery,
    ) -> Result<ExchangeRate, ConversionError>;

    /// Whether this provider can serve the query's rate types.
    fn supports(&self, query: &ConversionQuery) -> bool {
        self.rate_types().iter().any(|rt| query.accepts_rate_type(*rt))
    }
}
