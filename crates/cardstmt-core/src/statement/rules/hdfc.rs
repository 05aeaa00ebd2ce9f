//! HDFC Bank statement rules.
//!
//! HDFC prints a statement date and credit limit instead of a period and
//! previous balance. Due date and total dues share one table row, so both
//! field lists carry the same row pattern with different capture groups.

use crate::statement::engine::{Capture, FieldRule, FieldRules, RuleSet, ValueKind};

use super::field;

/// Row under the "Payment Due Date / Total Dues / Minimum Amount Due"
/// header: first the due date, then the total dues.
const DUES_ROW: &str =
    r"(?is)Payment Due Date\s+Total Dues\s+Minimum Amount Due.*?(\d{2}/\d{2}/\d{4})\s+([\d,]+\.\d{2})";

pub(super) fn ruleset() -> RuleSet {
    RuleSet::new(vec![
        FieldRules::new(
            field::STATEMENT_DATE,
            ValueKind::Text,
            vec![FieldRule::new(
                r"(?i)Statement Date:\s*(\d{2}/\d{2}/\d{4})",
                Capture::Group(1),
            )],
        ),
        FieldRules::new(
            field::DUE_DATE,
            ValueKind::Text,
            vec![FieldRule::new(DUES_ROW, Capture::Group(1))],
        ),
        FieldRules::new(
            field::TOTAL_AMOUNT_DUE,
            ValueKind::Amount,
            vec![FieldRule::new(DUES_ROW, Capture::Group(2))],
        ),
        FieldRules::new(
            field::CARD_LAST_4,
            ValueKind::Text,
            vec![FieldRule::new(
                r"(?i)Card No:\s*\d{4}\s+\d{2}XX\s+XXXX\s+(\d{4})",
                Capture::Group(1),
            )],
        ),
        FieldRules::new(
            field::CREDIT_LIMIT,
            ValueKind::Amount,
            // The credit limit is the last of the three numbers under the
            // three-column limits header.
            vec![
                FieldRule::new(
                    r"(?i)Credit Limit\s+Available Credit Limit\s+Available Cash Limit\s+([\d,]+)\s+([\d,]+)\s+([\d,]+)",
                    Capture::Group(3),
                ),
                FieldRule::new(
                    r"(?is)Credit Limit\s+Available Credit Limit\s+Available Cash Limit.*?([\d,]+)\s+([\d,]+)\s+([\d,]+)",
                    Capture::Group(3),
                ),
            ],
        ),
    ])
}
