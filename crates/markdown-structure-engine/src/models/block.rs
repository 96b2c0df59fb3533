use serde::{Deserialize, Serialize};

/// The fieldless tag of a [`Block`], used for counting and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Header,
    Code,
    Table,
    List,
    Blockquote,
    Paragraph,
}

impl BlockKind {
    /// All kinds, in the order statistics are reported.
    pub const ALL: [BlockKind; 6] = [
        BlockKind::Header,
        BlockKind::Table,
        BlockKind::Code,
        BlockKind::List,
        BlockKind::Blockquote,
        BlockKind::Paragraph,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Header => "header",
            BlockKind::Code => "code",
            BlockKind::Table => "table",
            BlockKind::List => "list",
            BlockKind::Blockquote => "blockquote",
            BlockKind::Paragraph => "paragraph",
        }
    }
}

/// A `#`-prefixed heading line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Number of leading `#` characters.
    pub level: u8,
    pub content: String,
    pub raw: String,
}

/// A fenced code block, fences included in `raw`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    /// Tag after the opening fence, `plaintext` when absent.
    pub language: String,
    /// Interior lines joined by `\n`.
    pub content: String,
    pub raw: String,
}

/// A pipe table. The separator row is part of `raw` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    #[serde(rename = "content")]
    pub summary: String,
    pub raw: String,
}

/// A contiguous run of bullet and/or numbered items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBlock {
    pub items: Vec<String>,
    #[serde(rename = "content")]
    pub summary: String,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blockquote {
    pub content: String,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub content: String,
    pub raw: String,
}

/// One structural unit extracted from the source text.
///
/// Every variant keeps `raw`, the verbatim source span it was built from, so
/// any block can be traced back to the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header(Header),
    Code(CodeBlock),
    Table(Table),
    List(ListBlock),
    Blockquote(Blockquote),
    Paragraph(Paragraph),
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Header(_) => BlockKind::Header,
            Block::Code(_) => BlockKind::Code,
            Block::Table(_) => BlockKind::Table,
            Block::List(_) => BlockKind::List,
            Block::Blockquote(_) => BlockKind::Blockquote,
            Block::Paragraph(_) => BlockKind::Paragraph,
        }
    }

    /// The verbatim source span this block was derived from.
    pub fn raw(&self) -> &str {
        match self {
            Block::Header(h) => &h.raw,
            Block::Code(c) => &c.raw,
            Block::Table(t) => &t.raw,
            Block::List(l) => &l.raw,
            Block::Blockquote(q) => &q.raw,
            Block::Paragraph(p) => &p.raw,
        }
    }
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, raw: String) -> Self {
        let summary = format!(
            "Table with {} columns and {} rows",
            headers.len(),
            rows.len()
        );
        Self {
            headers,
            rows,
            summary,
            raw,
        }
    }
}

impl ListBlock {
    pub fn new(items: Vec<String>, raw: String) -> Self {
        let summary = format!("List with {} items", items.len());
        Self {
            items,
            summary,
            raw,
        }
    }
}
