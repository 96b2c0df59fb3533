use crate::models::{self, Block};
use crate::parsing::blocks::types::Extraction;

/// Single-line blockquote.
///
/// Consecutive `>` lines are separate blocks; there is no multi-line
/// accumulation and no nesting.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn opens(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips the single leading prefix and trims the rest.
    pub fn strip_prefix(line: &str) -> &str {
        line.strip_prefix(Self::PREFIX).unwrap_or(line).trim()
    }

    pub fn extract(line: &str) -> Extraction {
        Extraction::single(Block::Blockquote(models::Blockquote {
            content: Self::strip_prefix(line).to_string(),
            raw: line.to_string(),
        }))
    }
}
