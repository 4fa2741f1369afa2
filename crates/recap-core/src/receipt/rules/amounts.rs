//! Amount extraction.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::patterns::AMOUNT;
use super::FieldRule;

/// Matches a `Total`/`Total Amount` label and captures the numeric token
/// that follows.
#[derive(Debug, Default)]
pub struct AmountRule;

impl AmountRule {
    pub fn new() -> Self {
        Self
    }
}

impl FieldRule for AmountRule {
    type Output = Decimal;

    fn extract(&self, text: &str) -> Option<Decimal> {
        let caps = AMOUNT.captures(text)?;
        let token = match caps.get(2) {
            Some(frac) => format!("{}.{}", &caps[1], frac.as_str()),
            None => caps[1].to_string(),
        };
        parse_amount(&token)
    }
}

/// Parse a `$1,234.56`-style token into a decimal amount.
///
/// Strips the currency sign and thousands separators before parsing. A token
/// that still fails to parse is a miss, not an error.
pub fn parse_amount(token: &str) -> Option<Decimal> {
    let cleaned: String = token
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}
