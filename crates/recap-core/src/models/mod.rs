//! Data models for receipts and pipeline configuration.

pub mod config;
pub mod receipt;

pub use config::RecapConfig;
pub use receipt::{CanonicalDate, GroupedOutput, ReceiptEntry, ReceiptRecord, VendorGroup};
