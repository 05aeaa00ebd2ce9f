//! Per-issuer field extraction rule tables.
//!
//! Each issuer module declares one ordered rule list per output field,
//! transcribed from the layouts that issuer actually prints. Adding an
//! issuer means adding a module here plus a classifier token pair; the
//! engine stays untouched.

pub mod axis;
pub mod chase;
pub mod hdfc;
pub mod icici;
pub mod idfc_first;

use lazy_static::lazy_static;

use crate::models::statement::Issuer;

use super::engine::RuleSet;

/// Field names shared by the rule tables and the result assembler.
pub mod field {
    pub const STATEMENT_PERIOD: &str = "statement_period";
    pub const STATEMENT_DATE: &str = "statement_date";
    pub const DUE_DATE: &str = "due_date";
    pub const TOTAL_AMOUNT_DUE: &str = "total_amount_due";
    pub const CARD_LAST_4: &str = "card_last_4";
    pub const PREVIOUS_BALANCE: &str = "previous_balance";
    pub const CREDIT_LIMIT: &str = "credit_limit";
}

lazy_static! {
    static ref ICICI: RuleSet = icici::ruleset();
    static ref IDFC_FIRST: RuleSet = idfc_first::ruleset();
    static ref AXIS: RuleSet = axis::ruleset();
    static ref CHASE: RuleSet = chase::ruleset();
    static ref HDFC: RuleSet = hdfc::ruleset();
}

/// Look up the compiled rule set for an issuer. `Unknown` has none.
pub fn for_issuer(issuer: Issuer) -> Option<&'static RuleSet> {
    match issuer {
        Issuer::Icici => Some(&ICICI),
        Issuer::IdfcFirst => Some(&IDFC_FIRST),
        Issuer::Axis => Some(&AXIS),
        Issuer::Chase => Some(&CHASE),
        Issuer::Hdfc => Some(&HDFC),
        Issuer::Unknown => None,
    }
}
