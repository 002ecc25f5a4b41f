//! Pattern parsing and rendering.
//!
//! A pattern is a literal template with two placeholders: a `#`-run
//! (optionally `.##`-suffixed to fix the fraction digits) for the
//! number, and `¤` for the currency code. `;` separates positive and
//! negative subpatterns; the negative subpattern renders the absolute
//! value (e.g. parenthesized accounting style).

use moneda_domain::Money;

use crate::{fixed_parts, group_digits};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Currency,
    Number { fraction_digits: u32 },
}

#[derive(Debug, Clone)]
pub(crate) struct Pattern {
    positive: Vec<Token>,
    negative: Option<Vec<Token>>,
}

fn parse_subpattern(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\u{a4}' => {
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(Token::Currency);
            }
            '#' => {
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                while chars.peek() == Some(&'#') {
                    chars.next();
                }
                let mut fraction_digits = 0u32;
                if chars.peek() == Some(&'.') {
                    chars.next();
                    while chars.peek() == Some(&'#') {
                        chars.next();
                        fraction_digits += 1;
                    }
                }
                tokens.push(Token::Number { fraction_digits });
            }
            _ => literal.push(c),
        }
    }
    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }
    tokens
}

impl Pattern {
    pub(crate) fn parse(pattern: &str) -> Self {
        match pattern.split_once(';') {
            Some((positive, negative)) => Self {
                positive: parse_subpattern(positive),
                negative: Some(parse_subpattern(negative)),
            },
            None => Self { positive: parse_subpattern(pattern), negative: None },
        }
    }

    pub(crate) fn render(&self, money: &Money, grouping_sizes: &[usize]) -> String {
        let (tokens, sign_prefix) = if money.is_negative() {
            match &self.negative {
                Some(tokens) => (tokens, ""),
                None => (&self.positive, "-"),
            }
        } else {
            (&self.positive, "")
        };

        let mut out = String::from(sign_prefix);
        for token in tokens {
            match token {
                Token::Literal(text) => out.push_str(text),
                Token::Currency => out.push_str(money.currency().code()),
                Token::Number { fraction_digits } => {
                    let (_, int_part, frac_part) =
                        fixed_parts(money.value().abs(), *fraction_digits);
                    out.push_str(&group_digits(&int_part, grouping_sizes));
                    if !frac_part.is_empty() {
                        out.push('.');
                        out.push_str(&frac_part);
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneda_domain::CurrencyUnit;
    use rust_decimal_macros::dec;

    fn usd() -> CurrencyUnit {
        CurrencyUnit::new("USD", Some(840), 2).unwrap()
    }

    #[test]
    fn test_parse_tokens() {
        let pattern = Pattern::parse("$###.## \u{a4}");
        assert_eq!(
            pattern.positive,
            vec![
                Token::Literal("$".to_string()),
                Token::Number { fraction_digits: 2 },
                Token::Literal(" ".to_string()),
                Token::Currency,
            ]
        );
        assert!(pattern.negative.is_none());
    }

    #[test]
    fn test_integer_only_number() {
        let pattern = Pattern::parse("### \u{a4}");
        let rendered = pattern.render(&Money::of(&usd(), dec!(1234.6)), &[3]);
        assert_eq!(rendered, "1,235 USD");
    }

    #[test]
    fn test_negative_without_subpattern_gets_minus() {
        let pattern = Pattern::parse("$###.##");
        let rendered = pattern.render(&Money::of(&usd(), dec!(-12.5)), &[3]);
        assert_eq!(rendered, "-$12.50");
    }

    #[test]
    fn test_negative_subpattern() {
        let pattern = Pattern::parse("$###.##;($###.##)");
        let rendered = pattern.render(&Money::of(&usd(), dec!(-12.5)), &[3]);
        assert_eq!(rendered, "($12.50)");
    }
}
