//! Statement parser: classification, rule evaluation, result assembly.

use std::time::Instant;

use tracing::{debug, info};

use crate::error::ExtractionError;
use crate::models::statement::{
    HdfcStatement, Issuer, PeriodStatement, StatementData, UnknownStatement,
};

use super::classifier::classify;
use super::engine::Extraction;
use super::normalize::{normalize, normalize_pages};
use super::rules::{self, field};
use super::Result;

/// Result of parsing one statement document.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// Issuer assigned to the document.
    pub issuer: Issuer,
    /// Extracted record, shaped by the issuer's schema.
    pub data: StatementData,
    /// Notes for fields whose captures could not be converted.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for statement parsing.
pub trait StatementParser {
    /// Parse a statement from linearized text.
    fn parse(&self, text: &str) -> Result<ParseOutcome>;
}

/// Rule-based parser over the built-in issuer tables.
///
/// Stateless: parses are independent of each other, so one parser can be
/// shared freely across documents and threads.
pub struct CardStatementParser;

impl CardStatementParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse from per-page extracted text. A `None` page stands for a page
    /// whose upstream extraction failed and is treated as empty.
    pub fn parse_pages(&self, pages: &[Option<String>]) -> Result<ParseOutcome> {
        self.parse_document(normalize_pages(pages))
    }

    fn parse_document(&self, document: String) -> Result<ParseOutcome> {
        let start = Instant::now();

        // Raw binary handed in as if it were extracted text is a caller
        // contract violation, unlike every no-data condition below.
        if document.contains('\0') {
            return Err(ExtractionError::InvalidDocument(
                "text contains NUL bytes".to_string(),
            ));
        }

        info!("parsing statement from {} characters of text", document.len());

        let issuer = classify(&document);

        let (data, warnings) = match rules::for_issuer(issuer) {
            Some(ruleset) => {
                let mut extraction = ruleset.extract(&document);
                let warnings = std::mem::take(&mut extraction.warnings);
                (assemble(issuer, extraction), warnings)
            }
            None => {
                debug!("no rule set for {}; field extraction skipped", issuer);
                (StatementData::Unknown(UnknownStatement::new()), Vec::new())
            }
        };

        debug!("assembled {} record with {} warnings", issuer, warnings.len());

        Ok(ParseOutcome {
            issuer,
            data,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

impl Default for CardStatementParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementParser for CardStatementParser {
    fn parse(&self, text: &str) -> Result<ParseOutcome> {
        self.parse_document(normalize(text))
    }
}

/// Compose the final record from captured fields. Field presence follows
/// the issuer's schema; fields the engine did not capture stay null.
fn assemble(issuer: Issuer, mut fields: Extraction) -> StatementData {
    let label = issuer.display_name().to_string();

    match issuer {
        Issuer::Unknown => StatementData::Unknown(UnknownStatement::new()),
        Issuer::Hdfc => StatementData::Hdfc(HdfcStatement {
            issuer: label,
            statement_date: fields.take_text(field::STATEMENT_DATE),
            due_date: fields.take_text(field::DUE_DATE),
            total_amount_due: fields.take_amount(field::TOTAL_AMOUNT_DUE),
            card_last_4: fields.take_text(field::CARD_LAST_4),
            credit_limit: fields.take_amount(field::CREDIT_LIMIT),
        }),
        Issuer::Icici | Issuer::IdfcFirst | Issuer::Axis | Issuer::Chase => {
            StatementData::Period(PeriodStatement {
                issuer: label,
                statement_period: fields.take_text(field::STATEMENT_PERIOD),
                due_date: fields.take_text(field::DUE_DATE),
                total_amount_due: fields.take_amount(field::TOTAL_AMOUNT_DUE),
                card_last_4: fields.take_text(field::CARD_LAST_4),
                previous_balance: fields.take_amount(field::PREVIOUS_BALANCE),
            })
        }
    }
}
