//! Rule-based field extraction for receipt text.
//!
//! Each field has one rule pairing its label variants with a value-shape
//! pattern. A rule that finds no match reports `None`; the parser resolves
//! misses to documented defaults, so extraction never fails.

pub mod amounts;
pub mod dates;
pub mod patterns;
pub mod vendor;

pub use amounts::{parse_amount, AmountRule};
pub use dates::{normalize_date, DateRule};
pub use vendor::VendorRule;

/// A single extraction rule.
pub trait FieldRule {
    /// The type of value this rule produces.
    type Output;

    /// Extract the field from text. First match wins; a miss is `None`,
    /// never an error.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}
