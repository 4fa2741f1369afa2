//! Error types for the recap-core library.
//!
//! Field extraction itself has no error path: a pattern miss resolves to a
//! documented default, never a fault. The errors here belong to the document
//! boundary (PDF parsing, I/O) and to serialization.

use thiserror::Error;

/// Main error type for the recap library.
#[derive(Error, Debug)]
pub enum RecapError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Result type for the recap library.
pub type Result<T> = std::result::Result<T, RecapError>;
