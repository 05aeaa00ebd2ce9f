//! IDFC FIRST Bank statement rules.
//!
//! The extractor renders the rupee glyph as a stray "r" before every
//! amount, so the amount rules anchor on it. Card numbers print as six
//! digits, six mask characters, four digits.

use crate::statement::engine::{Capture, FieldRule, FieldRules, RuleSet, ValueKind};

use super::field;

pub(super) fn ruleset() -> RuleSet {
    RuleSet::new(vec![
        FieldRules::new(
            field::STATEMENT_PERIOD,
            ValueKind::Text,
            vec![
                FieldRule::new(
                    r"(?i)From:\s*(\d{2}/\d{2}/\d{4})\s*To:\s*(\d{2}/\d{2}/\d{4})",
                    Capture::Span(1, 2),
                ),
                FieldRule::new(
                    r"(?i)Statement Period\s*From:\s*(\d{2}/\d{2}/\d{4})\s*To:\s*(\d{2}/\d{2}/\d{4})",
                    Capture::Span(1, 2),
                ),
            ],
        ),
        FieldRules::new(
            field::DUE_DATE,
            ValueKind::Text,
            vec![
                // Statement date and due date share one table row; the due
                // date is the second of the pair.
                FieldRule::new(
                    r"(?is)Statement Date\s+Payment Due Date\s*[\r\n]+.*?(\d{2}/\d{2}/\d{4})\s+(\d{2}/\d{2}/\d{4})",
                    Capture::Group(2),
                ),
                // Fallback anchored on the text that follows the date row in
                // IDFC's layout.
                FieldRule::new(
                    r"(?is)(\d{2}/\d{2}/\d{4})\s+(\d{2}/\d{2}/\d{4})\s*[\r\n]+.*?Nursing Home",
                    Capture::Group(2),
                ),
            ],
        ),
        FieldRules::new(
            field::TOTAL_AMOUNT_DUE,
            ValueKind::Amount,
            vec![
                FieldRule::new(
                    r"(?is)Total Amount Due\s+Minimum Amount Due\s*[\r\n]+.*?r\s*([\d,]+\.?\d*)",
                    Capture::Group(1),
                ),
                FieldRule::new(
                    r"(?is)Total Amount Due.*?r\s*([\d,]+\.?\d*)\s+r\s*[\d,]+\.?\d*",
                    Capture::Group(1),
                ),
            ],
        ),
        FieldRules::new(
            field::CARD_LAST_4,
            ValueKind::Text,
            vec![
                FieldRule::new(r"(\d{6})\*{6}(\d{4})", Capture::Group(2)),
                FieldRule::new(r"Card Number\s*:?\s*\d{6}\*{6}(\d{4})", Capture::Group(1)),
            ],
        ),
        FieldRules::new(
            field::PREVIOUS_BALANCE,
            ValueKind::Amount,
            vec![
                FieldRule::new(
                    r"(?is)Opening\s+Balance\s+Purchase.*?r[\d,]+\.?\d*\s+r([\d,]+\.?\d*)",
                    Capture::Group(1),
                ),
                FieldRule::new(
                    r"(?i)SUMMARY\s+r[\d,]+\.?\d*\s+r([\d,]+\.?\d*)",
                    Capture::Group(1),
                ),
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::statement::rules::field;

    use super::ruleset;

    const STATEMENT: &str = "\
IDFC FIRST Bank Credit Card Statement
Statement Period From: 01/04/2024 To: 30/04/2024
Statement Date Payment Due Date
05/05/2024 20/05/2024
Total Amount Due Minimum Amount Due
r 5,430.10 r 540.00
Card Number: 456789******1234
Opening Balance Purchase and Other Debits
r1,200.00 r2,400.00
";

    #[test]
    fn test_full_statement() {
        let mut extraction = ruleset().extract(STATEMENT);

        assert_eq!(
            extraction.take_text(field::STATEMENT_PERIOD),
            Some("01/04/2024 - 30/04/2024".to_string())
        );
        assert_eq!(extraction.take_text(field::DUE_DATE), Some("20/05/2024".to_string()));
        assert_eq!(extraction.take_amount(field::TOTAL_AMOUNT_DUE), Some(5430.10));
        assert_eq!(extraction.take_text(field::CARD_LAST_4), Some("1234".to_string()));
        assert_eq!(extraction.take_amount(field::PREVIOUS_BALANCE), Some(2400.0));
    }

    #[test]
    fn test_rupee_glyph_not_captured_into_amount() {
        let text = "Total Amount Due Minimum Amount Due\nr 98.00 r 98.00";
        let mut extraction = ruleset().extract(text);
        assert_eq!(extraction.take_amount(field::TOTAL_AMOUNT_DUE), Some(98.0));
    }

    #[test]
    fn test_summary_balance_fallback_rule() {
        let text = "SUMMARY r3,000.00 r1,750.25";
        let mut extraction = ruleset().extract(text);
        assert_eq!(extraction.take_amount(field::PREVIOUS_BALANCE), Some(1750.25));
    }

    #[test]
    fn test_masked_card_number_variants() {
        let mut extraction = ruleset().extract("456789******9876");
        assert_eq!(extraction.take_text(field::CARD_LAST_4), Some("9876".to_string()));
    }
}
