pub mod block;
pub mod document;

pub use block::{Block, BlockKind, Blockquote, CodeBlock, Header, ListBlock, Paragraph, Table};
pub use document::{Document, Metadata, Stats};
