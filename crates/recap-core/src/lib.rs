//! Core library for receipt analysis.
//!
//! This crate provides:
//! - PDF text extraction for text-based receipt documents
//! - Rule-based field extraction (vendor, date, amount)
//! - Date normalization to canonical `YYYY-MM-DD` tokens
//! - Vendor grouping with stable chronological ordering

pub mod aggregate;
pub mod error;
pub mod models;
pub mod pdf;
pub mod pipeline;
pub mod receipt;

pub use aggregate::aggregate;
pub use error::{PdfError, RecapError, Result};
pub use models::config::RecapConfig;
pub use models::receipt::{
    CanonicalDate, GroupedOutput, ReceiptEntry, ReceiptRecord, VendorGroup, UNKNOWN_VENDOR,
};
pub use pdf::{PdfExtractor, PdfProcessor};
pub use pipeline::{run_batch, ReceiptPipeline};
pub use receipt::{ExtractionReport, ReceiptParser, RuleBasedParser};
