//! Error types for the cardstmt-core library.

use thiserror::Error;

/// Errors related to statement field extraction.
///
/// "No data found" is never an error: a field with no matching rule is
/// simply null in the extracted record, and an unrecognized issuer is a
/// valid classification.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A captured value could not be converted to its field's type.
    #[error("failed to parse {field}: {value}")]
    Parse { field: String, value: String },

    /// The input is not extracted statement text at all.
    #[error("invalid document: {0}")]
    InvalidDocument(String),
}

/// Result type for the cardstmt library.
pub type Result<T> = std::result::Result<T, ExtractionError>;
