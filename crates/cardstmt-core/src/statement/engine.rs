//! Rule engine: ordered pattern tables evaluated per output field.
//!
//! Rules are data. Each issuer contributes one [`RuleSet`]; adding an
//! issuer means writing a new table under [`super::rules`], not touching
//! the evaluation loop below.

use std::collections::HashMap;

use regex::{Captures, Regex};
use tracing::{trace, warn};

use crate::error::ExtractionError;
use crate::models::statement::FieldValue;

use super::Result;

/// Which capture group(s) of a matched pattern form the field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// A single capture group, taken verbatim.
    Group(usize),
    /// Two capture groups joined with " - " (statement period ranges).
    Span(usize, usize),
}

/// How a captured string becomes a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Keep the capture as found (dates, card digits, period strings).
    Text,
    /// Strip thousands separators and parse as a number.
    Amount,
}

/// One pattern rule.
///
/// Matching modes are inline flags on the pattern itself: `(?i)` for
/// case-insensitive rules, `(?is)` when `.` must also span line breaks to
/// reach across table rows. A rule without flags matches literally within
/// single lines.
pub struct FieldRule {
    regex: Regex,
    capture: Capture,
}

impl FieldRule {
    /// Compile a rule. Rule tables are static and compiled once at startup,
    /// so an invalid pattern is a programming error.
    pub fn new(pattern: &str, capture: Capture) -> Self {
        Self {
            regex: Regex::new(pattern).expect("invalid field rule pattern"),
            capture,
        }
    }

    /// Pull the raw value out of a successful match. `None` means the
    /// designated group did not participate in the match.
    fn resolve(&self, caps: &Captures<'_>) -> Option<String> {
        match self.capture {
            Capture::Group(idx) => caps.get(idx).map(|m| m.as_str().to_string()),
            Capture::Span(start, end) => match (caps.get(start), caps.get(end)) {
                (Some(a), Some(b)) => Some(format!("{} - {}", a.as_str(), b.as_str())),
                _ => None,
            },
        }
    }
}

/// The ordered rule list for one output field.
pub struct FieldRules {
    pub field: &'static str,
    pub kind: ValueKind,
    rules: Vec<FieldRule>,
}

impl FieldRules {
    pub fn new(field: &'static str, kind: ValueKind, rules: Vec<FieldRule>) -> Self {
        Self { field, kind, rules }
    }

    /// Try each rule in declaration order. The first rule whose pattern
    /// matches supplies the value; later rules are not consulted, even when
    /// the winning capture then fails to convert.
    fn extract(&self, text: &str) -> Result<Option<FieldValue>> {
        for rule in &self.rules {
            if let Some(caps) = rule.regex.captures(text) {
                let raw = rule.resolve(&caps).ok_or_else(|| ExtractionError::Parse {
                    field: self.field.to_string(),
                    value: caps.get(0).map(|m| m.as_str()).unwrap_or_default().to_string(),
                })?;
                trace!(field = self.field, raw = %raw, "rule matched");
                return convert(self.field, self.kind, &raw).map(Some);
            }
        }
        Ok(None)
    }
}

fn convert(field: &str, kind: ValueKind, raw: &str) -> Result<FieldValue> {
    match kind {
        ValueKind::Text => Ok(FieldValue::Text(raw.to_string())),
        ValueKind::Amount => {
            // "1,234.56" -> 1234.56; Indian grouping "1,00,000" -> 100000.
            let cleaned = raw.replace(',', "");
            cleaned
                .parse::<f64>()
                .map(FieldValue::Amount)
                .map_err(|_| ExtractionError::Parse {
                    field: field.to_string(),
                    value: raw.to_string(),
                })
        }
    }
}

/// Field values captured from one document, plus per-field warnings.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Matched fields. A field with no matching rule is absent, which the
    /// assembler renders as null.
    values: HashMap<&'static str, FieldValue>,
    /// Notes for captures that failed to convert.
    pub warnings: Vec<String>,
}

impl Extraction {
    pub fn take_text(&mut self, field: &str) -> Option<String> {
        match self.values.remove(field) {
            Some(FieldValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn take_amount(&mut self, field: &str) -> Option<f64> {
        match self.values.remove(field) {
            Some(FieldValue::Amount(v)) => Some(v),
            _ => None,
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// All field rule lists for one issuer.
pub struct RuleSet {
    fields: Vec<FieldRules>,
}

impl RuleSet {
    pub fn new(fields: Vec<FieldRules>) -> Self {
        Self { fields }
    }

    /// Evaluate every field list against the document. A malformed capture
    /// nulls its own field and never aborts the rest of the document.
    pub fn extract(&self, text: &str) -> Extraction {
        let mut extraction = Extraction::default();

        for field in &self.fields {
            match field.extract(text) {
                Ok(Some(value)) => {
                    extraction.values.insert(field.field, value);
                }
                Ok(None) => trace!(field = field.field, "no rule matched"),
                Err(err) => {
                    warn!(field = field.field, "malformed capture: {}", err);
                    extraction.warnings.push(err.to_string());
                }
            }
        }

        extraction
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn amount_field(rules: Vec<FieldRule>) -> RuleSet {
        RuleSet::new(vec![FieldRules::new("amount", ValueKind::Amount, rules)])
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let set = RuleSet::new(vec![FieldRules::new(
            "due_date",
            ValueKind::Text,
            vec![
                FieldRule::new(r"(?i)Due Date:\s*(\d{2}/\d{2}/\d{4})", Capture::Group(1)),
                FieldRule::new(r"(\d{2}/\d{2}/\d{4})", Capture::Group(1)),
            ],
        )]);

        // Both rules can match; the first one declared must supply the value.
        let mut extraction = set.extract("01/01/2024 was billed. Due Date: 15/05/2024");
        assert_eq!(extraction.take_text("due_date"), Some("15/05/2024".to_string()));
    }

    #[test]
    fn test_later_rule_used_when_earlier_does_not_match() {
        let set = RuleSet::new(vec![FieldRules::new(
            "due_date",
            ValueKind::Text,
            vec![
                FieldRule::new(r"(?i)Due Date:\s*(\d{2}/\d{2}/\d{4})", Capture::Group(1)),
                FieldRule::new(r"(?i)Pay by\s+(\d{2}/\d{2}/\d{4})", Capture::Group(1)),
            ],
        )]);

        let mut extraction = set.extract("Pay by 15/05/2024");
        assert_eq!(extraction.take_text("due_date"), Some("15/05/2024".to_string()));
    }

    #[test]
    fn test_amount_thousands_separators_stripped() {
        let set = amount_field(vec![FieldRule::new(
            r"(?i)Total:\s*([\d,]+\.?\d*)",
            Capture::Group(1),
        )]);

        let mut extraction = set.extract("Total: 1,234.56");
        assert_eq!(extraction.take_amount("amount"), Some(1234.56));
    }

    #[test]
    fn test_zero_amounts_are_values_not_null() {
        let set = amount_field(vec![FieldRule::new(
            r"(?i)Total:\s*([\d,]+\.?\d*)",
            Capture::Group(1),
        )]);

        let mut extraction = set.extract("Total: 0");
        assert_eq!(extraction.take_amount("amount"), Some(0.0));

        let mut extraction = set.extract("Total: 0.00");
        assert_eq!(extraction.take_amount("amount"), Some(0.0));
    }

    #[test]
    fn test_indian_digit_grouping() {
        let set = amount_field(vec![FieldRule::new(
            r"(?i)Limit:\s*([\d,]+)",
            Capture::Group(1),
        )]);

        let mut extraction = set.extract("Limit: 3,00,000");
        assert_eq!(extraction.take_amount("amount"), Some(300000.0));
    }

    #[test]
    fn test_no_match_leaves_field_absent() {
        let set = amount_field(vec![FieldRule::new(
            r"(?i)Total:\s*([\d,]+\.?\d*)",
            Capture::Group(1),
        )]);

        let extraction = set.extract("no amounts here");
        assert!(extraction.is_empty());
        assert!(extraction.warnings.is_empty());
    }

    #[test]
    fn test_malformed_capture_nulls_field_and_warns() {
        // "[\d,]+" happily captures a bare comma, which cannot parse.
        let set = RuleSet::new(vec![
            FieldRules::new(
                "amount",
                ValueKind::Amount,
                vec![FieldRule::new(r"(?i)Total:\s*([\d,]+)", Capture::Group(1))],
            ),
            FieldRules::new(
                "due_date",
                ValueKind::Text,
                vec![FieldRule::new(r"(?i)Due:\s*(\d{2}/\d{2}/\d{4})", Capture::Group(1))],
            ),
        ]);

        let mut extraction = set.extract("Total: ,, Due: 15/05/2024");
        assert_eq!(extraction.get("amount"), None);
        assert_eq!(extraction.warnings.len(), 1);
        // The bad capture must not take the rest of the document down.
        assert_eq!(extraction.take_text("due_date"), Some("15/05/2024".to_string()));
    }

    #[test]
    fn test_span_capture_joins_with_dash() {
        let set = RuleSet::new(vec![FieldRules::new(
            "statement_period",
            ValueKind::Text,
            vec![FieldRule::new(
                r"(?i)From\s+(\d{2}/\d{2}/\d{4})\s+to\s+(\d{2}/\d{2}/\d{4})",
                Capture::Span(1, 2),
            )],
        )]);

        let mut extraction = set.extract("From 01/04/2024 to 30/04/2024");
        assert_eq!(
            extraction.take_text("statement_period"),
            Some("01/04/2024 - 30/04/2024".to_string())
        );
    }

    #[test]
    fn test_dot_spans_lines_only_when_flagged() {
        let single_line = amount_field(vec![FieldRule::new(
            r"(?i)Balance.*?([\d,]+\.\d{2})",
            Capture::Group(1),
        )]);
        let extraction = single_line.extract("Balance forwarded\n1,000.00");
        assert!(extraction.is_empty());

        let spanning = amount_field(vec![FieldRule::new(
            r"(?is)Balance.*?([\d,]+\.\d{2})",
            Capture::Group(1),
        )]);
        let mut extraction = spanning.extract("Balance forwarded\n1,000.00");
        assert_eq!(extraction.take_amount("amount"), Some(1000.0));
    }
}
