//! Text Cleaning and Splitting

/// Keep ASCII letters, ASCII digits and whitespace; drop everything else
pub fn remove_non_alphanumeric(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Convert `\r\n` and lone `\r` line endings to `\n`
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split on blank-line separators into trimmed, non-empty paragraphs
///
/// Line endings are normalized first, so CRLF documents split the same
/// way as LF ones.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    normalize_newlines(text)
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_non_alphanumeric() {
        assert_eq!(
            remove_non_alphanumeric("ABBESS, or LADY ABBESS; a bawd!\n1811."),
            "ABBESS or LADY ABBESS a bawd\n1811"
        );
        assert_eq!(remove_non_alphanumeric("café"), "caf");
    }

    #[test]
    fn test_split_paragraphs() {
        let text = "  first entry\nwraps here  \n\nsecond\n\n\n\n   \n\nthird";
        assert_eq!(
            split_paragraphs(text),
            vec!["first entry\nwraps here", "second", "third"]
        );
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn test_split_paragraphs_crlf() {
        let text = "ABBESS a bawd\r\n\r\nABIGAIL A ladys\r\nwaitingmaid\r\n\r\nABRAM Naked\r\n";
        assert_eq!(
            split_paragraphs(text),
            vec!["ABBESS a bawd", "ABIGAIL A ladys\nwaitingmaid", "ABRAM Naked"]
        );
    }

    #[test]
    fn test_split_paragraphs_empty() {
        assert!(split_paragraphs("").is_empty());
        assert!(split_paragraphs("\n\n\n\n").is_empty());
    }
}
