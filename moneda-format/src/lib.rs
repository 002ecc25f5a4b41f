//! Moneda Formatting Collaborator
//!
//! Renders monetary amounts to text from a [`FormatConfig`]. This is
//! the external collaborator boundary: it consumes only the public
//! accessors of `Money` (currency, value, scale) and never feeds back
//! into the engine. Full CLDR grammar support is out of scope; the
//! configuration covers a locale tag, an optional pattern with a
//! currency placeholder, and grouping sizes.

#![warn(clippy::all)]

mod pattern;

use moneda_domain::Money;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::pattern::Pattern;

/// Currency symbols for default rendering; codes without an entry
/// render as "CODE value".
const SYMBOLS: &[(&str, &str)] = &[
    ("EUR", "\u{20ac}"),
    ("GBP", "\u{a3}"),
    ("INR", "\u{20b9}"),
    ("JPY", "\u{a5}"),
    ("KRW", "\u{20a9}"),
    ("USD", "$"),
];

fn symbol_for(code: &str) -> Option<&'static str> {
    SYMBOLS.iter().find(|(c, _)| *c == code).map(|(_, s)| *s)
}

/// Rendering configuration.
///
/// Recognized options: `locale` (informational tag), `pattern`
/// (printf-style with `¤` as the currency placeholder, `;`-separated
/// positive/negative subpatterns), and `grouping_sizes` (rightmost
/// group first, last size repeating).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatConfig {
    locale: String,
    pattern: Option<String>,
    grouping_sizes: Vec<usize>,
}

impl FormatConfig {
    /// Configuration for a locale with default rendering.
    pub fn locale(tag: impl Into<String>) -> Self {
        Self { locale: tag.into(), pattern: None, grouping_sizes: vec![3] }
    }

    /// Use a pattern instead of the default rendering.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Override grouping sizes, rightmost group first.
    ///
    /// `[3]` gives 1,234,567; `[3, 2]` gives 12,34,567 (Indian style).
    pub fn with_grouping_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.grouping_sizes = sizes;
        self
    }

    /// The locale tag this configuration was built for.
    pub fn locale_tag(&self) -> &str {
        &self.locale
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::locale("en-US")
    }
}

/// Formats monetary amounts according to a [`FormatConfig`].
pub struct MoneyFormatter {
    config: FormatConfig,
    pattern: Option<Pattern>,
}

impl MoneyFormatter {
    /// Build a formatter, parsing the configured pattern once.
    pub fn new(config: FormatConfig) -> Self {
        let pattern = config.pattern.as_deref().map(Pattern::parse);
        Self { config, pattern }
    }

    /// Render an amount.
    pub fn format(&self, money: &Money) -> String {
        match &self.pattern {
            Some(pattern) => pattern.render(money, &self.config.grouping_sizes),
            None => self.format_default(money),
        }
    }

    fn format_default(&self, money: &Money) -> String {
        let digits = money.currency().fraction_digits();
        let (negative, int_part, frac_part) = fixed_parts(money.value(), digits);
        let grouped = group_digits(&int_part, &self.config.grouping_sizes);
        let sign = if negative { "-" } else { "" };
        let number = if frac_part.is_empty() {
            grouped
        } else {
            format!("{}.{}", grouped, frac_part)
        };
        match symbol_for(money.currency().code()) {
            Some(symbol) => format!("{}{}{}", sign, symbol, number),
            None => format!("{}{} {}", sign, money.currency().code(), number),
        }
    }
}

/// Split a value into sign, integer digits, and exactly `scale`
/// fraction digits (half-even), using the decimal's own scaled-integer
/// representation.
pub(crate) fn fixed_parts(value: Decimal, scale: u32) -> (bool, String, String) {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(scale);
    // rescale clamps when the mantissa has no room for the requested
    // scale, so split on the scale actually in effect and pad the
    // fraction back out to the requested digits.
    let effective = rounded.scale();
    let mantissa = rounded.mantissa();
    let negative = mantissa < 0;
    let abs = mantissa.unsigned_abs();
    let denom = 10u128.pow(effective);
    let int_part = (abs / denom).to_string();
    let frac_part = if scale == 0 {
        String::new()
    } else {
        let mut digits = if effective == 0 {
            String::new()
        } else {
            format!("{:0width$}", abs % denom, width = effective as usize)
        };
        digits.push_str(&"0".repeat((scale - effective) as usize));
        digits
    };
    (negative, int_part, frac_part)
}

/// Group integer digits right-to-left by `sizes`, the last size
/// repeating. Empty sizes (or a zero size) disable grouping.
pub(crate) fn group_digits(digits: &str, sizes: &[usize]) -> String {
    if sizes.is_empty() || sizes.contains(&0) || digits.len() <= sizes[0] {
        return digits.to_string();
    }

    let bytes = digits.as_bytes();
    let mut groups: Vec<&str> = Vec::new();
    let mut end = bytes.len();
    let mut size_idx = 0;
    while end > 0 {
        let size = sizes[size_idx.min(sizes.len() - 1)];
        let start = end.saturating_sub(size);
        groups.push(&digits[start..end]);
        end = start;
        size_idx += 1;
    }
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneda_domain::CurrencyUnit;
    use rust_decimal_macros::dec;

    fn usd() -> CurrencyUnit {
        CurrencyUnit::new("USD", Some(840), 2).unwrap()
    }

    fn inr() -> CurrencyUnit {
        CurrencyUnit::new("INR", Some(356), 2).unwrap()
    }

    fn cop() -> CurrencyUnit {
        CurrencyUnit::new("COP", Some(170), 2).unwrap()
    }

    fn jpy() -> CurrencyUnit {
        CurrencyUnit::new("JPY", Some(392), 0).unwrap()
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1234567", &[3]), "1,234,567");
        assert_eq!(group_digits("123", &[3]), "123");
        assert_eq!(group_digits("12345678", &[3, 2]), "1,23,45,678");
        assert_eq!(group_digits("1234567", &[]), "1234567");
        assert_eq!(group_digits("1234567", &[0]), "1234567");
    }

    #[test]
    fn test_default_format_with_symbol() {
        let formatter = MoneyFormatter::new(FormatConfig::locale("en-US"));
        assert_eq!(formatter.format(&Money::of(&usd(), dec!(500.55))), "$500.55");
        assert_eq!(
            formatter.format(&Money::of(&usd(), dec!(1234567.8))),
            "$1,234,567.80"
        );
    }

    #[test]
    fn test_default_format_without_symbol() {
        let formatter = MoneyFormatter::new(FormatConfig::locale("es-CO"));
        assert_eq!(
            formatter.format(&Money::of(&cop(), 500_000)),
            "COP 500,000.00"
        );
    }

    #[test]
    fn test_default_format_zero_fraction_digits() {
        let formatter = MoneyFormatter::new(FormatConfig::locale("ja-JP"));
        assert_eq!(formatter.format(&Money::of(&jpy(), 12345)), "\u{a5}12,345");
    }

    #[test]
    fn test_default_format_rounds_half_even() {
        let formatter = MoneyFormatter::new(FormatConfig::locale("en-US"));
        assert_eq!(formatter.format(&Money::of(&usd(), dec!(2.125))), "$2.12");
    }

    #[test]
    fn test_negative_default_format() {
        let formatter = MoneyFormatter::new(FormatConfig::locale("en-US"));
        assert_eq!(formatter.format(&Money::of(&usd(), dec!(-500.55))), "-$500.55");
    }

    #[test]
    fn test_format_at_mantissa_scale_limit() {
        // The mantissa has no room for two fraction digits here; the
        // integer part must come through intact, fraction zero-padded.
        let formatter = MoneyFormatter::new(FormatConfig::locale("en-US"));
        assert_eq!(
            formatter.format(&Money::of(&usd(), Decimal::MAX)),
            "$79,228,162,514,264,337,593,543,950,335.00"
        );
        assert_eq!(
            formatter.format(&Money::of(&usd(), dec!(7922816251426433759354395033.5))),
            "$7,922,816,251,426,433,759,354,395,033.50"
        );
    }

    #[test]
    fn test_indian_grouping_sizes() {
        let config = FormatConfig::locale("en-IN").with_grouping_sizes(vec![3, 2]);
        let formatter = MoneyFormatter::new(config);
        assert_eq!(
            formatter.format(&Money::of(&inr(), dec!(12345678.9))),
            "\u{20b9}1,23,45,678.90"
        );
    }

    #[test]
    fn test_pattern_format() {
        let config = FormatConfig::locale("en-US").with_pattern("$###.## \u{a4};($###.##) \u{a4}");
        let formatter = MoneyFormatter::new(config);
        assert_eq!(
            formatter.format(&Money::of(&usd(), dec!(500.55))),
            "$500.55 USD"
        );
        assert_eq!(
            formatter.format(&Money::of(&usd(), dec!(-500.55))),
            "($500.55) USD"
        );
    }
}
