//! Axis Bank statement rules.
//!
//! Amounts carry a trailing "Dr" debit indicator that anchors the match
//! but is never captured. Card numbers print as eight digits, four mask
//! characters, four digits.

use crate::statement::engine::{Capture, FieldRule, FieldRules, RuleSet, ValueKind};

use super::field;

pub(super) fn ruleset() -> RuleSet {
    RuleSet::new(vec![
        FieldRules::new(
            field::STATEMENT_PERIOD,
            ValueKind::Text,
            vec![
                // Period and due date share a row: "from - to due".
                FieldRule::new(
                    r"(?i)(\d{2}/\d{2}/\d{4})\s*-\s*(\d{2}/\d{2}/\d{4})\s+\d{2}/\d{2}/\d{4}",
                    Capture::Span(1, 2),
                ),
                FieldRule::new(
                    r"(?i)Statement Period\s*(\d{2}/\d{2}/\d{4})\s*-?\s*(\d{2}/\d{2}/\d{4})",
                    Capture::Span(1, 2),
                ),
            ],
        ),
        FieldRules::new(
            field::DUE_DATE,
            ValueKind::Text,
            vec![
                FieldRule::new(
                    r"(?i)\d{2}/\d{2}/\d{4}\s*-\s*\d{2}/\d{2}/\d{4}\s+(\d{2}/\d{2}/\d{4})",
                    Capture::Group(1),
                ),
                FieldRule::new(r"(?i)Payment Due Date\s*(\d{2}/\d{2}/\d{4})", Capture::Group(1)),
            ],
        ),
        FieldRules::new(
            field::TOTAL_AMOUNT_DUE,
            ValueKind::Amount,
            vec![
                FieldRule::new(
                    r"(?i)Total Payment Due\s+[\w\s]+\s+([\d,]+\.?\d*)\s+Dr",
                    Capture::Group(1),
                ),
                FieldRule::new(
                    r"(?is)Total Payment Due.*?([\d,]+\.?\d*)\s+Dr",
                    Capture::Group(1),
                ),
            ],
        ),
        FieldRules::new(
            field::CARD_LAST_4,
            ValueKind::Text,
            vec![
                FieldRule::new(r"(\d{8})\*{4}(\d{4})", Capture::Group(2)),
                FieldRule::new(r"Card\s+No[:.]?\s*(\d{8})\*{4}(\d{4})", Capture::Group(2)),
            ],
        ),
        FieldRules::new(
            field::PREVIOUS_BALANCE,
            ValueKind::Amount,
            vec![
                FieldRule::new(
                    r"(?is)Previous Balance\s*-\s*Payments.*?[\r\n]+\s*([\d,]+\.?\d*)\s+Dr",
                    Capture::Group(1),
                ),
                FieldRule::new(
                    r"(?is)Account Summary.*?[\r\n]+.*?[\r\n]+\s*([\d,]+\.?\d*)\s+Dr\s+[\d,]+\.?\d*\s+Dr",
                    Capture::Group(1),
                ),
            ],
        ),
    ])
}
