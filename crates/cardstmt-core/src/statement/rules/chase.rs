//! Chase statement rules.
//!
//! Dates may carry two-digit years and amounts a literal dollar sign.

use crate::statement::engine::{Capture, FieldRule, FieldRules, RuleSet, ValueKind};

use super::field;

pub(super) fn ruleset() -> RuleSet {
    RuleSet::new(vec![
        FieldRules::new(
            field::STATEMENT_PERIOD,
            ValueKind::Text,
            vec![FieldRule::new(
                r"(?i)Opening/Closing Date\s*(\d{2}/\d{2}/\d{2,4})\s*-\s*(\d{2}/\d{2}/\d{2,4})",
                Capture::Span(1, 2),
            )],
        ),
        FieldRules::new(
            field::DUE_DATE,
            ValueKind::Text,
            vec![
                FieldRule::new(
                    r"(?i)Payment Due Date\s*:?\s*(\d{2}/\d{2}/\d{2,4})",
                    Capture::Group(1),
                ),
                FieldRule::new(
                    r"(?i)Payment Due Date\s*[\r\n]+\s*(\d{2}/\d{2}/\d{2,4})",
                    Capture::Group(1),
                ),
            ],
        ),
        FieldRules::new(
            field::TOTAL_AMOUNT_DUE,
            ValueKind::Amount,
            vec![
                FieldRule::new(r"(?i)New Balance\s*\$\s*([\d,]+\.?\d*)", Capture::Group(1)),
                FieldRule::new(r"(?i)New Balance.*?\$\s*([\d,]+\.?\d*)", Capture::Group(1)),
            ],
        ),
        FieldRules::new(
            field::CARD_LAST_4,
            ValueKind::Text,
            vec![
                FieldRule::new(
                    r"(?i)Account Number\s*:?\s*XXXX\s+XXXX\s+XXXX\s+(\d{4})",
                    Capture::Group(1),
                ),
                FieldRule::new(
                    r"(?i)Account number\s*:?\s*\d{4}\s+\d{4}\s+\d{4}\s+(\d{4})",
                    Capture::Group(1),
                ),
                FieldRule::new(r"(?i)XXXX\s+XXXX\s+XXXX\s+(\d{4})", Capture::Group(1)),
            ],
        ),
        FieldRules::new(
            field::PREVIOUS_BALANCE,
            ValueKind::Amount,
            vec![
                FieldRule::new(r"(?i)Previous Balance\s*\$\s*([\d,]+\.?\d*)", Capture::Group(1)),
                FieldRule::new(r"(?i)Previous Balance.*?\$\s*([\d,]+\.?\d*)", Capture::Group(1)),
            ],
        ),
    ])
}
