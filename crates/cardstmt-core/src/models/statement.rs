//! Statement records with issuer-conditional field sets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Card issuer identified from statement text.
///
/// Determines which rule set and which output schema apply. `Unknown` is a
/// valid terminal classification, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Issuer {
    Hdfc,
    Icici,
    IdfcFirst,
    Axis,
    Chase,
    Unknown,
}

impl Issuer {
    /// Display-form label carried in the `issuer` field of extracted records.
    pub fn display_name(&self) -> &'static str {
        match self {
            Issuer::Hdfc => "HDFC Bank",
            Issuer::Icici => "ICICI Bank",
            Issuer::IdfcFirst => "IDFC FIRST Bank",
            Issuer::Axis => "Axis Bank",
            Issuer::Chase => "Chase",
            Issuer::Unknown => "UNKNOWN",
        }
    }

    /// Stable identifier used in logs and terminal output.
    pub fn tag(&self) -> &'static str {
        match self {
            Issuer::Hdfc => "HDFC",
            Issuer::Icici => "ICICI",
            Issuer::IdfcFirst => "IDFC_FIRST",
            Issuer::Axis => "AXIS",
            Issuer::Chase => "CHASE",
            Issuer::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Issuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single extracted field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Verbatim capture (dates, card digits, period strings).
    Text(String),
    /// Numeric capture with thousands separators stripped.
    Amount(f64),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Amount(_) => None,
        }
    }

    pub fn as_amount(&self) -> Option<f64> {
        match self {
            FieldValue::Amount(v) => Some(*v),
            FieldValue::Text(_) => None,
        }
    }
}

/// Record for issuers whose statements report a billing period and a
/// carried-over balance (ICICI, IDFC FIRST, Axis, Chase).
///
/// A field the engine could not extract serializes as `null`; it is never
/// dropped from the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeriodStatement {
    pub issuer: String,
    pub statement_period: Option<String>,
    pub due_date: Option<String>,
    pub total_amount_due: Option<f64>,
    pub card_last_4: Option<String>,
    pub previous_balance: Option<f64>,
}

/// Record for HDFC statements, which report a statement date and a credit
/// limit instead of a period and previous balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HdfcStatement {
    pub issuer: String,
    pub statement_date: Option<String>,
    pub due_date: Option<String>,
    pub total_amount_due: Option<f64>,
    pub card_last_4: Option<String>,
    pub credit_limit: Option<f64>,
}

/// Record produced when no issuer could be identified. Field extraction is
/// never attempted for these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnknownStatement {
    pub issuer: String,
    pub error: String,
}

impl UnknownStatement {
    pub fn new() -> Self {
        Self {
            issuer: Issuer::Unknown.display_name().to_string(),
            error: "Unknown issuer".to_string(),
        }
    }
}

impl Default for UnknownStatement {
    fn default() -> Self {
        Self::new()
    }
}

/// A complete extraction result. The variant, and with it the field set,
/// follows the issuer; records serialize as flat objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatementData {
    Period(PeriodStatement),
    Hdfc(HdfcStatement),
    Unknown(UnknownStatement),
}

impl StatementData {
    /// The display-form issuer label carried by every record.
    pub fn issuer(&self) -> &str {
        match self {
            StatementData::Period(s) => &s.issuer,
            StatementData::Hdfc(s) => &s.issuer,
            StatementData::Unknown(s) => &s.issuer,
        }
    }
}
