//! Core library for credit-card statement parsing.
//!
//! This crate provides:
//! - Normalization of per-page extracted statement text into one document
//! - Issuer detection over five known statement layouts
//! - Rule-based field extraction (due dates, amounts, card digits)
//! - Statement records with issuer-conditional field sets

pub mod error;
pub mod models;
pub mod statement;

pub use error::{ExtractionError, Result};
pub use models::statement::{
    FieldValue, HdfcStatement, Issuer, PeriodStatement, StatementData, UnknownStatement,
};
pub use statement::classifier::classify;
pub use statement::normalize::{normalize, normalize_pages};
pub use statement::{CardStatementParser, ParseOutcome, StatementParser};
