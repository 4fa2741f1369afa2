//! Vendor name extraction.

use super::patterns::VENDOR;
use super::FieldRule;

/// Matches a `Company`/`Provider` label and captures the name that follows.
#[derive(Debug, Default)]
pub struct VendorRule;

impl VendorRule {
    pub fn new() -> Self {
        Self
    }
}

impl FieldRule for VendorRule {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        VENDOR
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
            .filter(|name| !name.is_empty())
    }
}
