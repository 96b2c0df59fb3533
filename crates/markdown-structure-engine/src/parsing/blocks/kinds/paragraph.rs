use crate::models::{self, Block};
use crate::parsing::blocks::types::Extraction;

/// Paragraph block type.
///
/// The fallback for any non-blank line no other opener claimed. Always a
/// single line; inline markup stays opaque text.
pub struct Paragraph;

impl Paragraph {
    pub fn extract(line: &str) -> Extraction {
        let content = line.trim();
        if content.is_empty() {
            return Extraction::skip();
        }
        Extraction::single(Block::Paragraph(models::Paragraph {
            content: content.to_string(),
            raw: line.to_string(),
        }))
    }
}
