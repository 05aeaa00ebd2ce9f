//! Normalization of raw per-page statement text.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BLANK_LINES: Regex = Regex::new(r"\n{2,}").unwrap();
}

/// Collapse runs of blank lines left behind by PDF text extraction.
pub fn normalize(text: &str) -> String {
    BLANK_LINES.replace_all(text, "\n").into_owned()
}

/// Join per-page extracted text into one normalized document.
///
/// A `None` page stands for a page whose upstream text extraction failed;
/// it contributes nothing, as does an empty page. Failed extraction is
/// recovered here, never surfaced as an error.
pub fn normalize_pages(pages: &[Option<String>]) -> String {
    let mut text = String::new();
    for page in pages.iter().flatten() {
        if !page.is_empty() {
            text.push_str(page);
            text.push('\n');
        }
    }
    normalize(&text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_collapses_blank_line_runs() {
        assert_eq!(normalize("Due Date\n\n\n15/05/2024\n\nTotal"), "Due Date\n15/05/2024\nTotal");
    }

    #[test]
    fn test_single_line_breaks_untouched() {
        assert_eq!(normalize("a\nb\nc"), "a\nb\nc");
    }

    #[test]
    fn test_pages_joined_in_order() {
        let pages = vec![Some("page one".to_string()), Some("page two".to_string())];
        assert_eq!(normalize_pages(&pages), "page one\npage two\n");
    }

    #[test]
    fn test_failed_and_empty_pages_are_skipped() {
        let pages = vec![
            Some("first".to_string()),
            None,
            Some(String::new()),
            Some("last".to_string()),
        ];
        assert_eq!(normalize_pages(&pages), "first\nlast\n");
    }

    #[test]
    fn test_all_pages_failed_yields_empty_document() {
        let pages = vec![None, None];
        assert_eq!(normalize_pages(&pages), "");
    }

    #[test]
    fn test_blank_runs_collapsed_across_page_boundaries() {
        let pages = vec![Some("first\n\n".to_string()), Some("\nlast".to_string())];
        assert_eq!(normalize_pages(&pages), "first\nlast\n");
    }
}
