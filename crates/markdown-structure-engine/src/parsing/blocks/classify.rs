use crate::parsing::lines::is_blank;
use crate::parsing::options::ParserOptions;

use super::kinds::{BlockQuote, CodeFence, Heading, List, PipeTable};

/// The block opener a line selects, before any lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Heading,
    CodeFence,
    TableRow,
    ListItem,
    BlockQuote,
    Paragraph,
    Blank,
}

/// Classifies the cursor line by prefix/pattern.
///
/// Openers are tried in a fixed priority order and the first match wins:
/// heading, code fence, table row, list item, blockquote, paragraph, blank.
/// Disabled toggles remove their opener from the order, so those lines fall
/// through to the later ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownLineClassifier {
    options: ParserOptions,
}

impl MarkdownLineClassifier {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn classify(&self, line: &str) -> LineClass {
        if Heading::opens(line) {
            LineClass::Heading
        } else if self.options.code && CodeFence::opens(line) {
            LineClass::CodeFence
        } else if self.options.tables && PipeTable::opens(line) {
            LineClass::TableRow
        } else if self.options.lists && List::opens(line) {
            LineClass::ListItem
        } else if BlockQuote::opens(line) {
            LineClass::BlockQuote
        } else if !is_blank(line) {
            LineClass::Paragraph
        } else {
            LineClass::Blank
        }
    }
}
