//! Rule-based receipt parser.

use std::time::Instant;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::receipt::{ReceiptRecord, UNKNOWN_VENDOR};

use super::rules::{AmountRule, DateRule, FieldRule, VendorRule};

/// Outcome of parsing one document, with per-field miss warnings.
///
/// A warning marks a field that fell back to its default; it never makes the
/// parse a failure.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// Extracted record with defaults applied.
    pub record: ReceiptRecord,
    /// One entry per field rule that did not match.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for receipt parsing.
pub trait ReceiptParser {
    /// Parse one document's text. Total: misses resolve to defaults.
    fn parse(&self, text: &str) -> ReceiptRecord;
}

/// Parser applying the fixed rule table.
///
/// The rule set is deliberately not configurable per call; adapting to a new
/// receipt layout means editing the rules, not passing configuration. The
/// three extractions are independent: a miss on one field never blocks the
/// others.
#[derive(Debug, Default)]
pub struct RuleBasedParser {
    vendor: VendorRule,
    date: DateRule,
    amount: AmountRule,
}

impl RuleBasedParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one document and report field misses as warnings.
    pub fn parse_report(&self, text: &str) -> ExtractionReport {
        let start = Instant::now();
        let mut warnings = Vec::new();

        let vendor = self.vendor.extract(text);
        if vendor.is_none() {
            warnings.push("no vendor label matched".to_string());
        }

        let receipt_date = self.date.extract(text);
        if receipt_date.is_none() {
            warnings.push("no date label matched".to_string());
        }

        let amount = self.amount.extract(text);
        if amount.is_none() {
            warnings.push("no total label matched".to_string());
        }

        let record = ReceiptRecord {
            vendor_name: vendor.unwrap_or_else(|| UNKNOWN_VENDOR.to_string()),
            receipt_date,
            amount: amount.unwrap_or(Decimal::ZERO),
        };

        debug!(
            "parsed receipt for {} ({} field misses)",
            record.vendor_name,
            warnings.len()
        );

        ExtractionReport {
            record,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl ReceiptParser for RuleBasedParser {
    fn parse(&self, text: &str) -> ReceiptRecord {
        self.parse_report(text).record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::receipt::CanonicalDate;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn test_parse_full_receipt() {
        let text = r#"
            STARBUCKS COFFEE
            Company: Starbucks
            Date: 01/15/2024
            Latte ............ 4.95
            Muffin ........... 4.50
            Total: $9.45
        "#;

        let record = RuleBasedParser::new().parse(text);

        assert_eq!(record.vendor_name, "Starbucks");
        assert_eq!(
            record.receipt_date,
            Some(CanonicalDate::from_parts("01", "15", "2024"))
        );
        assert_eq!(record.amount, Decimal::from_str("9.45").unwrap());
    }

    #[test]
    fn test_unlabeled_text_yields_all_defaults() {
        let record = RuleBasedParser::new().parse("thank you, come again\n");
        assert_eq!(record, ReceiptRecord::unmatched());
    }

    #[test]
    fn test_field_misses_are_independent() {
        // No vendor and no date, but the total still extracts.
        let record = RuleBasedParser::new().parse("Groceries\nTotal Amount: 13.01\n");
        assert_eq!(record.vendor_name, UNKNOWN_VENDOR);
        assert_eq!(record.receipt_date, None);
        assert_eq!(record.amount, Decimal::from_str("13.01").unwrap());
    }

    #[test]
    fn test_report_warnings_name_missing_fields() {
        let report = RuleBasedParser::new().parse_report("Provider: Acme\n");
        assert_eq!(report.record.vendor_name, "Acme");
        assert_eq!(
            report.warnings,
            vec!["no date label matched", "no total label matched"]
        );
    }

    #[test]
    fn test_empty_text() {
        let record = RuleBasedParser::new().parse("");
        assert_eq!(record, ReceiptRecord::unmatched());
    }
}
