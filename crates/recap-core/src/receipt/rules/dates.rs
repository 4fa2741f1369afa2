//! Date extraction and normalization.

use crate::models::receipt::CanonicalDate;

use super::patterns::RECEIPT_DATE;
use super::FieldRule;

/// Matches a `Date` label followed by an `MM/DD/YYYY` token.
#[derive(Debug, Default)]
pub struct DateRule;

impl DateRule {
    pub fn new() -> Self {
        Self
    }
}

impl FieldRule for DateRule {
    type Output = CanonicalDate;

    fn extract(&self, text: &str) -> Option<CanonicalDate> {
        RECEIPT_DATE
            .captures(text)
            .map(|caps| normalize_date(&caps[1], &caps[2], &caps[3]))
    }
}

/// Rearrange month/day/year components into the canonical `YYYY-MM-DD` token.
///
/// Purely lexical: pads each component to its width and performs no calendar
/// arithmetic, so there is no error path. Expects zero-padded 2/2/4-digit
/// components as captured by the date pattern.
pub fn normalize_date(month: &str, day: &str, year: &str) -> CanonicalDate {
    CanonicalDate::from_parts(month, day, year)
}
