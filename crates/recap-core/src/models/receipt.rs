//! Receipt data models and the grouped output artifact.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Vendor sentinel used when no vendor label matches.
pub const UNKNOWN_VENDOR: &str = "Unknown";

/// Canonical `YYYY-MM-DD` date token.
///
/// Built by lexically rearranging the captured month/day/year groups with
/// zero-padding to widths 2/2/4. There is no calendar validation: `13/40/2024`
/// normalizes to `2024-13-40`. This is a known limitation inherited from the
/// extraction rules, which constrain the token shape but not its ranges.
/// Lexicographic order on the padded form equals chronological order, so the
/// derived `Ord` is the sort key used by aggregation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalDate(String);

impl CanonicalDate {
    /// Normalize month/day/year components into the canonical form.
    ///
    /// Total over numeric input: any three digit strings produce a
    /// structurally valid token.
    pub fn from_parts(month: &str, day: &str, year: &str) -> Self {
        Self(format!("{year:0>4}-{month:0>2}-{day:0>2}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One parsed receipt. Immutable once produced by the parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRecord {
    /// Vendor name, or the `"Unknown"` sentinel when no label matched.
    pub vendor_name: String,

    /// Receipt date; absent (not fabricated) when no date matched.
    pub receipt_date: Option<CanonicalDate>,

    /// Non-negative amount with at most two fractional digits as extracted;
    /// zero when no total matched.
    pub amount: Decimal,
}

impl ReceiptRecord {
    /// The record produced when none of the field rules match.
    pub fn unmatched() -> Self {
        Self {
            vendor_name: UNKNOWN_VENDOR.to_string(),
            receipt_date: None,
            amount: Decimal::ZERO,
        }
    }
}

/// A dated amount inside a vendor group; the vendor name is hoisted to the
/// group level and dropped from each entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptEntry {
    pub receipt_date: Option<CanonicalDate>,
    pub amount: Decimal,
}

/// Per-vendor bucket of chronologically sorted receipt entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorGroup {
    pub company_name: String,
    pub receipts: Vec<ReceiptEntry>,
}

impl VendorGroup {
    /// Sum of this vendor's receipt amounts.
    pub fn total(&self) -> Decimal {
        self.receipts.iter().map(|r| r.amount).sum()
    }
}

/// The persisted artifact: vendor groups in first-appearance order, each
/// carrying its date-ascending receipts list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupedOutput(pub Vec<VendorGroup>);

impl GroupedOutput {
    /// Number of vendor groups.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VendorGroup> {
        self.0.iter()
    }

    pub fn groups(&self) -> &[VendorGroup] {
        &self.0
    }

    /// Total receipt entries across all groups. Aggregation never drops or
    /// duplicates a record, so this equals the input record count.
    pub fn total_receipts(&self) -> usize {
        self.0.iter().map(|g| g.receipts.len()).sum()
    }

    /// Per-vendor amount sums, in group (first-appearance) order.
    pub fn vendor_totals(&self) -> Vec<(&str, Decimal)> {
        self.0
            .iter()
            .map(|g| (g.company_name.as_str(), g.total()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    #[test]
    fn test_canonical_date_from_parts() {
        assert_eq!(CanonicalDate::from_parts("03", "07", "2024").as_str(), "2024-03-07");
        assert_eq!(CanonicalDate::from_parts("12", "31", "1999").as_str(), "1999-12-31");
    }

    #[test]
    fn test_canonical_date_is_lexical_not_calendar() {
        // Out-of-range components pass through untouched; the normalizer
        // rearranges, it does not validate.
        assert_eq!(CanonicalDate::from_parts("13", "40", "2024").as_str(), "2024-13-40");
    }

    #[test]
    fn test_canonical_date_ordering() {
        let earlier = CanonicalDate::from_parts("01", "15", "2024");
        let later = CanonicalDate::from_parts("02", "01", "2024");
        assert!(earlier < later);
        // Absent dates sort before any dated value.
        assert!(None < Some(earlier));
    }

    #[test]
    fn test_record_serializes_camel_case_with_null_date() {
        let record = ReceiptRecord::unmatched();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["vendorName"], "Unknown");
        assert!(json["receiptDate"].is_null());
        assert_eq!(json["amount"], 0.0);
    }

    #[test]
    fn test_grouped_output_artifact_shape() {
        let output = GroupedOutput(vec![VendorGroup {
            company_name: "STARBUCKS".to_string(),
            receipts: vec![ReceiptEntry {
                receipt_date: Some(CanonicalDate::from_parts("01", "15", "2024")),
                amount: Decimal::from_str("9.45").unwrap(),
            }],
        }]);

        let json = serde_json::to_value(&output).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["companyName"], "STARBUCKS");
        assert_eq!(json[0]["receipts"][0]["receiptDate"], "2024-01-15");
        assert_eq!(json[0]["receipts"][0]["amount"], 9.45);
    }

    #[test]
    fn test_vendor_totals() {
        let group = VendorGroup {
            company_name: "WALMART".to_string(),
            receipts: vec![
                ReceiptEntry {
                    receipt_date: None,
                    amount: Decimal::from_str("13.01").unwrap(),
                },
                ReceiptEntry {
                    receipt_date: None,
                    amount: Decimal::from_str("1.99").unwrap(),
                },
            ],
        };
        let output = GroupedOutput(vec![group]);

        assert_eq!(output.total_receipts(), 2);
        assert_eq!(
            output.vendor_totals(),
            vec![("WALMART", Decimal::from_str("15.00").unwrap())]
        );
    }
}
