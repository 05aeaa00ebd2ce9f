//! PDF text extraction — the upstream collaborator that turns statement
//! PDFs into per-page text for the parser.

use std::path::Path;

use anyhow::Context;
use lopdf::Document;
use tracing::{debug, warn};

/// Extract text for every page, in page order.
///
/// A page whose extraction fails yields `None` so the parser treats it as
/// empty instead of failing the whole document; only an unreadable or
/// encrypted file is an error.
pub fn extract_pages(path: &Path) -> anyhow::Result<Vec<Option<String>>> {
    let document = Document::load(path)
        .with_context(|| format!("failed to parse PDF: {}", path.display()))?;

    if document.is_encrypted() {
        anyhow::bail!("PDF is encrypted: {}", path.display());
    }

    let mut pages = Vec::new();
    for &number in document.get_pages().keys() {
        match document.extract_text(&[number]) {
            Ok(text) => pages.push(Some(text)),
            Err(err) => {
                warn!("failed to extract text from page {}: {}", number, err);
                pages.push(None);
            }
        }
    }

    debug!("extracted text for {} pages", pages.len());
    Ok(pages)
}
