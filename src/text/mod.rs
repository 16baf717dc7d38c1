//! Text Pipeline
//!
//! Turns raw documents into paragraphs and term-frequency vectors.

mod extract;
mod process;
mod vocab;

pub use extract::{extract_file_within_bounds, extract_within_bounds};
pub use process::{normalize_newlines, remove_non_alphanumeric, split_paragraphs};
pub use vocab::{tokenize, Vocabulary};

/// Clean `raw` and split it into paragraphs ready for ingestion
pub fn prepare(raw: &str) -> Vec<String> {
    split_paragraphs(&remove_non_alphanumeric(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare() {
        let raw = "ABBESS, a bawd.\n\nABEL-WACKETS: blows!\n\n";
        assert_eq!(prepare(raw), vec!["ABBESS a bawd", "ABELWACKETS blows"]);
    }
}
