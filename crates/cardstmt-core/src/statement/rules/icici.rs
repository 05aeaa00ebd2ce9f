//! ICICI Bank statement rules.
//!
//! The total-amount row sits in a three-column table under a literal
//! "Your Total Amount Due" label; pipes are matched with `\s*` so the row
//! matches whether the last column stays on the same line or wraps.

use crate::statement::engine::{Capture, FieldRule, FieldRules, RuleSet, ValueKind};

use super::field;

pub(super) fn ruleset() -> RuleSet {
    RuleSet::new(vec![
        FieldRules::new(
            field::STATEMENT_PERIOD,
            ValueKind::Text,
            vec![
                FieldRule::new(
                    r"(?i)Statement Period\s*:?\s*From\s+(\d{2}/\d{2}/\d{4})\s+to\s+(\d{2}/\d{2}/\d{4})",
                    Capture::Span(1, 2),
                ),
                FieldRule::new(
                    r"(?i)From\s+(\d{2}/\d{2}/\d{4})\s+to\s+(\d{2}/\d{2}/\d{4})",
                    Capture::Span(1, 2),
                ),
            ],
        ),
        FieldRules::new(
            field::DUE_DATE,
            ValueKind::Text,
            vec![
                FieldRule::new(r"(?i)Due Date\s*:?\s*(\d{2}/\d{2}/\d{4})", Capture::Group(1)),
                FieldRule::new(
                    r"(?i)Payment Due Date\s*:?\s*(\d{2}/\d{2}/\d{4})",
                    Capture::Group(1),
                ),
            ],
        ),
        FieldRules::new(
            field::TOTAL_AMOUNT_DUE,
            ValueKind::Amount,
            vec![
                FieldRule::new(
                    r"(?i)Your Total Amount Due\s*[\r\n]+\s*\d{2}/\d{2}/\d{4}\s*\|\s*[\d,]+\.?\d*\s*\|\s*([\d,]+\.?\d*)",
                    Capture::Group(1),
                ),
                FieldRule::new(
                    r"(?i)Minimum Amount Due\s+Your Total Amount Due\s*[\r\n]+\s*\d{2}/\d{2}/\d{4}\s*\|\s*[\d,]+\.?\d*\s*\|\s*([\d,]+\.?\d*)",
                    Capture::Group(1),
                ),
            ],
        ),
        FieldRules::new(
            field::CARD_LAST_4,
            ValueKind::Text,
            vec![
                // Cardholder name sits between the label and the masked number.
                FieldRule::new(
                    r"Card Account No\s*[\r\n]+\s*\w+.*?\s+(\d{4})\s+XXXX\s+XXXX\s+(\d{4})",
                    Capture::Group(2),
                ),
                FieldRule::new(r"(\d{4})\s+XXXX\s+XXXX\s+(\d{4})", Capture::Group(2)),
            ],
        ),
        FieldRules::new(
            field::PREVIOUS_BALANCE,
            ValueKind::Amount,
            vec![
                FieldRule::new(
                    r"(?is)Previous Balance.*?Summary\s+([\d,]+\.?\d*)",
                    Capture::Group(1),
                ),
                FieldRule::new(r"(?i)Statement\s+Summary\s+([\d,]+\.?\d*)", Capture::Group(1)),
            ],
        ),
    ])
}
