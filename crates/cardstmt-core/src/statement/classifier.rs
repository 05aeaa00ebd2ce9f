//! Issuer detection over normalized statement text.

use tracing::debug;

use crate::models::statement::Issuer;

/// Identify the statement's issuer.
///
/// Case-insensitive substring containment, in fixed priority order. Issuer
/// names co-occur in boilerplate and partner-bank legal text, so the order
/// is part of the contract. Each issuer needs its brand token plus a
/// companion token; a bare "chase" does not count without the chase.com
/// domain.
pub fn classify(text: &str) -> Issuer {
    let haystack = text.to_lowercase();

    let issuer = if haystack.contains("hdfc bank") || haystack.contains("hdfcbank") {
        Issuer::Hdfc
    } else if haystack.contains("icici bank") || haystack.contains("icicibank") {
        Issuer::Icici
    } else if haystack.contains("idfc first bank") || haystack.contains("idfcbank") {
        Issuer::IdfcFirst
    } else if haystack.contains("axis bank") || haystack.contains("axisbank") {
        Issuer::Axis
    } else if haystack.contains("chase") && haystack.contains("chase.com") {
        Issuer::Chase
    } else {
        Issuer::Unknown
    };

    debug!("classified statement issuer as {}", issuer);
    issuer
}
