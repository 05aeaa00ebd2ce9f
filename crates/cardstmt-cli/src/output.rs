//! Terminal rendering of extraction results.

use cardstmt_core::{ParseOutcome, StatementData};
use console::style;

/// Render the field-table view: detected issuer first, then one
/// `name: value` row per field in the issuer's schema.
pub fn field_table(outcome: &ParseOutcome) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Detected Issuer: {}\n",
        style(outcome.issuer.tag()).cyan()
    ));
    out.push_str(&format!("{}\n", "-".repeat(50)));

    match &outcome.data {
        StatementData::Period(record) => {
            push_text(&mut out, "issuer", Some(&record.issuer));
            push_text(&mut out, "statement_period", record.statement_period.as_deref());
            push_text(&mut out, "due_date", record.due_date.as_deref());
            push_amount(&mut out, "total_amount_due", record.total_amount_due);
            push_text(&mut out, "card_last_4", record.card_last_4.as_deref());
            push_amount(&mut out, "previous_balance", record.previous_balance);
        }
        StatementData::Hdfc(record) => {
            push_text(&mut out, "issuer", Some(&record.issuer));
            push_text(&mut out, "statement_date", record.statement_date.as_deref());
            push_text(&mut out, "due_date", record.due_date.as_deref());
            push_amount(&mut out, "total_amount_due", record.total_amount_due);
            push_text(&mut out, "card_last_4", record.card_last_4.as_deref());
            push_amount(&mut out, "credit_limit", record.credit_limit);
        }
        StatementData::Unknown(record) => {
            push_text(&mut out, "issuer", Some(&record.issuer));
            push_text(&mut out, "error", Some(&record.error));
        }
    }

    out
}

fn push_text(out: &mut String, name: &str, value: Option<&str>) {
    out.push_str(&format!("{:20}: {}\n", name, value.unwrap_or("-")));
}

fn push_amount(out: &mut String, name: &str, value: Option<f64>) {
    match value {
        Some(amount) => out.push_str(&format!("{:20}: {}\n", name, amount)),
        None => push_text(out, name, None),
    }
}
