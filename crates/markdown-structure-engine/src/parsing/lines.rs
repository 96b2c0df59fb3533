/// Splits source text into lines on `\n` only.
///
/// A `\r` before the newline stays on the line so `raw` spans reproduce the
/// input byte for byte. The empty string yields a single empty line.
pub fn source_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Joins consumed lines back into a `raw` span.
pub fn join_lines(lines: &[&str]) -> String {
    lines.join("\n")
}

/// True for empty and whitespace-only lines.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_text_is_one_blank_line() {
        assert_eq!(source_lines(""), vec![""]);
    }

    #[test]
    fn trailing_newline_yields_trailing_empty_line() {
        assert_eq!(source_lines("a\nb\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn carriage_returns_are_kept() {
        assert_eq!(source_lines("a\r\nb"), vec!["a\r", "b"]);
    }

    #[test]
    fn join_restores_split() {
        let text = "one\r\n\ntwo\n";
        assert_eq!(join_lines(&source_lines(text)), text);
    }

    #[test]
    fn whitespace_only_is_blank() {
        assert!(is_blank(" \t\r"));
        assert!(!is_blank(" x "));
    }
}
