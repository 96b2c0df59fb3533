use crate::models::{Block, CodeBlock};
use crate::parsing::blocks::types::Extraction;
use crate::parsing::lines::join_lines;

/// Backtick-fenced code block.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const DEFAULT_LANGUAGE: &'static str = "plaintext";

    /// Opening and closing fences are both any line starting with the marker.
    pub fn opens(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }

    pub fn language(opener: &str) -> String {
        let tag = opener
            .strip_prefix(Self::BACKTICKS)
            .unwrap_or_default()
            .trim();
        if tag.is_empty() {
            Self::DEFAULT_LANGUAGE.to_string()
        } else {
            tag.to_string()
        }
    }

    /// `lines[0]` is the opening fence. An unterminated fence emits nothing
    /// and only the opener is consumed.
    pub fn extract(lines: &[&str]) -> Extraction {
        let Some((opener, rest)) = lines.split_first() else {
            return Extraction::skip();
        };

        let Some(close) = rest.iter().position(|l| Self::opens(l)) else {
            log::debug!("dropping unterminated code fence: {opener:?}");
            return Extraction::skip();
        };

        let consumed = close + 2;
        Extraction::emit(
            Block::Code(CodeBlock {
                language: Self::language(opener),
                content: join_lines(&rest[..close]),
                raw: join_lines(&lines[..consumed]),
            }),
            consumed,
        )
    }
}
