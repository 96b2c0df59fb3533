pub mod blocks;
pub mod lines;
pub mod options;

#[cfg(test)]
mod tests;

use crate::models::Document;

use blocks::{BlockBuilder, MarkdownLineClassifier};
use lines::source_lines;
pub use options::ParserOptions;

/// Line-oriented structural parser.
///
/// Holds only its toggles; every call to [`StructuralParser::parse`] is
/// independent and never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructuralParser {
    options: ParserOptions,
}

impl StructuralParser {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    pub fn parse(&self, text: &str) -> Document {
        let lines = source_lines(text);
        let builder = BlockBuilder::new(MarkdownLineClassifier::new(self.options), &lines);
        let doc = Document::from_blocks(builder.finish());
        log::debug!(
            "parsed {} line(s) into {} block(s)",
            lines.len(),
            doc.structure().len()
        );
        doc
    }
}

/// Convenience: parse `text` with the given toggles.
pub fn parse_document(text: &str, options: ParserOptions) -> Document {
    StructuralParser::new(options).parse(text)
}
