//! Outline view of a parsed document.
//!
//! One line per block: `<indentation><icon> <label>`. Headers set the depth:
//! a level-L header is indented 2 × (L − 1) spaces and the blocks under it
//! 2 × L spaces. Blocks before the first header sit at column 0.
//!
//! Icons: header `§`, code `ƒ`, table `▦`, list `☰`, blockquote `❝`,
//! paragraph `¶`.
//!
//! ```text
//! § H1 Main Title
//!   ¶ Intro text
//!   § H2 Features
//!     ☰ List with 3 items
//!     ƒ rust (2 lines)
//! ```

use crate::models::{Block, BlockKind, Document};

const INDENT: &str = "  ";
const MAX_LABEL_CHARS: usize = 40;

pub fn icon(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Header => "§",
        BlockKind::Code => "ƒ",
        BlockKind::Table => "▦",
        BlockKind::List => "☰",
        BlockKind::Blockquote => "❝",
        BlockKind::Paragraph => "¶",
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn label(block: &Block) -> String {
    match block {
        Block::Header(h) => format!("H{} {}", h.level, h.content),
        Block::Code(c) => {
            let interior = c.raw.split('\n').count().saturating_sub(2);
            format!("{} ({} lines)", c.language, interior)
        }
        Block::Table(t) => t.summary.clone(),
        Block::List(l) => l.summary.clone(),
        Block::Blockquote(q) => truncate(&q.content, MAX_LABEL_CHARS),
        Block::Paragraph(p) => truncate(&p.content, MAX_LABEL_CHARS),
    }
}

pub fn to_tree(doc: &Document) -> String {
    let mut result = String::new();
    let mut depth = 0usize;

    for block in doc.structure() {
        let indent = match block {
            Block::Header(h) => {
                depth = usize::from(h.level);
                depth.saturating_sub(1)
            }
            _ => depth,
        };
        result.push_str(&format!(
            "{}{} {}\n",
            INDENT.repeat(indent),
            icon(block.kind()),
            label(block)
        ));
    }
    result
}
