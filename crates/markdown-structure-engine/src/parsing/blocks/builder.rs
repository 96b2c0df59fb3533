use crate::models::Block;

use super::{classify::MarkdownLineClassifier, open::extract_at, types::Extraction};

/// Cursor-driven scan over the source lines.
///
/// Each step classifies the cursor line, runs the matching extractor, keeps
/// the block it produced (if any) and advances by the lines it consumed.
pub struct BlockBuilder<'a> {
    classifier: MarkdownLineClassifier,
    lines: &'a [&'a str],
    cursor: usize,
    out: Vec<Block>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new(classifier: MarkdownLineClassifier, lines: &'a [&'a str]) -> Self {
        Self {
            classifier,
            lines,
            cursor: 0,
            out: vec![],
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.lines.len()
    }

    /// Processes the block opener at the cursor. Returns false at end of input.
    pub fn step(&mut self) -> bool {
        let Some(&line) = self.lines.get(self.cursor) else {
            return false;
        };

        let class = self.classifier.classify(line);
        let Extraction { block, consumed } = extract_at(class, &self.lines[self.cursor..]);

        if let Some(block) = block {
            log::trace!(
                "line {}: {:?} spanning {consumed} line(s)",
                self.cursor + 1,
                block.kind()
            );
            self.out.push(block);
        }
        self.cursor = (self.cursor + consumed.max(1)).min(self.lines.len());
        true
    }

    pub fn finish(mut self) -> Vec<Block> {
        while self.step() {}
        self.out
    }
}
