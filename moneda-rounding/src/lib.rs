//! Moneda Rounding Layer
//!
//! Maps (currency, rounding-policy) queries onto rounding operators.
//! The default policy is half-even at the currency's fraction digits;
//! named policies are an extensibility seam that fails cleanly with
//! `UnsupportedRounding` when nothing is registered under the name.

#![warn(clippy::all)]

pub mod engine;
pub mod error;
pub mod query;
pub mod rounding;

// Re-exports for convenience
pub use engine::{RoundingEngine, RoundingPolicy};
pub use error::{RoundingError, RoundingResult};
pub use query::RoundingQuery;
pub use rounding::{Rounding, RoundingMode};
