//! Truncated one-line previews for the report.

/// Marker appended to truncated previews.
pub const ELLIPSIS: &str = "...";

/// Keeps the first `max_chars` characters of `text`, appending an ellipsis
/// when anything was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Fragment preview: newlines shown as a literal `\n`, then truncated.
pub fn fragment_preview(fragment: &str, max_chars: usize) -> String {
    truncate_chars(&fragment.replace('\n', "\\n"), max_chars)
}

/// Matched-line preview: surrounding whitespace trimmed, then truncated.
pub fn line_preview(line: &str, max_chars: usize) -> String {
    truncate_chars(line.trim(), max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn test_long_text_truncated() {
        assert_eq!(truncate_chars("abcdef", 3), "abc...");
    }

    #[test]
    fn test_truncation_counts_chars() {
        assert_eq!(truncate_chars("ééééé", 2), "éé...");
    }

    #[test]
    fn test_fragment_preview_escapes_newlines() {
        assert_eq!(fragment_preview("a\nb", 100), "a\\nb");
        // The escape counts as two characters toward the limit.
        assert_eq!(fragment_preview("a\nbcd", 3), "a\\n...");
    }

    #[test]
    fn test_fragment_preview_limit() {
        let long = "x".repeat(150);
        let preview = fragment_preview(&long, 100);
        assert_eq!(preview.len(), 103);
        assert!(preview.ends_with("..."));
        assert_eq!(fragment_preview(&"y".repeat(100), 100), "y".repeat(100));
    }

    #[test]
    fn test_line_preview_trims() {
        assert_eq!(line_preview("    return x;  ", 80), "return x;");
        let long = format!("  {}", "z".repeat(90));
        assert_eq!(line_preview(&long, 80), format!("{}...", "z".repeat(80)));
    }
}
