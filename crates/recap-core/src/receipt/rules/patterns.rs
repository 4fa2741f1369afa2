//! Compiled regex patterns for receipt field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Vendor label followed by an optional separator and a run of letters
    /// and spaces.
    pub static ref VENDOR: Regex = Regex::new(
        r"(?i)\b(?:company|provider)\b[\s:\-]*([A-Za-z][A-Za-z ]*)"
    ).unwrap();

    /// Labeled numeric date. Groups are positional: month, day, year.
    pub static ref RECEIPT_DATE: Regex = Regex::new(
        r"(?i)\bdate\b[\s:\-]*(\d{2})/(\d{2})/(\d{4})"
    ).unwrap();

    /// Labeled total with optional currency sign, thousands separators and
    /// up to two decimal digits.
    pub static ref AMOUNT: Regex = Regex::new(
        r"(?i)\btotal(?:\s+amount)?\b[\s:\-]*\$?\s*(\d{1,3}(?:,\d{3})+|\d+)(?:\.(\d{1,2}))?"
    ).unwrap();
}
