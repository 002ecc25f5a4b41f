//! Moneda Domain Layer
//!
//! Pure monetary domain logic with zero I/O dependencies.
//! Contains currency descriptors, the currency registry, exact-decimal
//! amounts, and the operator/query protocol that rounding and conversion
//! plug into.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod currency;
pub mod error;
pub mod money;
pub mod operator;
pub mod registry;

// Re-export commonly used types
pub use currency::CurrencyUnit;
pub use error::{MoneyError, MoneyResult};
pub use money::Money;
pub use operator::{MoneyOperator, MoneyQuery};
pub use registry::CurrencyRegistry;
