use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Block, ListBlock};
use crate::parsing::blocks::types::Extraction;
use crate::parsing::lines::join_lines;

/// A run of bullet (`-`, `*`, `+`) and numbered (`1.`) items.
///
/// Bullet and numbered markers may be mixed within one run; indentation is
/// ignored, so there is no nesting.
pub struct List;

impl List {
    /// Whether the trimmed line starts with a marker followed by whitespace.
    pub fn opens(line: &str) -> bool {
        item_regex().is_match(line.trim())
    }

    /// Item text with the leading marker removed, or `None` if the line is not
    /// an item.
    pub fn item_text(line: &str) -> Option<&str> {
        item_regex()
            .find(line)
            .map(|marker| line[marker.end()..].trim())
    }

    /// Consumes items up to, but not including, the first blank or non-item
    /// line.
    pub fn extract(lines: &[&str]) -> Extraction {
        let items: Vec<String> = lines
            .iter()
            .map_while(|l| Self::item_text(l))
            .map(str::to_string)
            .collect();

        if items.is_empty() {
            log::debug!("dropping list candidate without items: {:?}", lines.first());
            return Extraction::skip();
        }

        let consumed = items.len();
        Extraction::emit(
            Block::List(ListBlock::new(items, join_lines(&lines[..consumed]))),
            consumed,
        )
    }
}

fn item_regex() -> &'static Regex {
    static ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
    ITEM_REGEX
        .get_or_init(|| Regex::new(r"^\s*(?:[-*+]|\d+\.)\s+").expect("Invalid list item regex"))
}
