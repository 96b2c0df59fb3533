use serde::{Deserialize, Serialize};

use super::block::{Block, BlockKind};

/// Per-kind block counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub headers: usize,
    pub tables: usize,
    pub code_blocks: usize,
    pub lists: usize,
    pub blockquotes: usize,
    pub paragraphs: usize,
}

impl Stats {
    pub fn record(&mut self, kind: BlockKind) {
        *self.counter_mut(kind) += 1;
    }

    pub fn count(&self, kind: BlockKind) -> usize {
        match kind {
            BlockKind::Header => self.headers,
            BlockKind::Table => self.tables,
            BlockKind::Code => self.code_blocks,
            BlockKind::List => self.lists,
            BlockKind::Blockquote => self.blockquotes,
            BlockKind::Paragraph => self.paragraphs,
        }
    }

    /// Sum of all counters.
    pub fn total(&self) -> usize {
        BlockKind::ALL.iter().map(|&k| self.count(k)).sum()
    }

    fn counter_mut(&mut self, kind: BlockKind) -> &mut usize {
        match kind {
            BlockKind::Header => &mut self.headers,
            BlockKind::Table => &mut self.tables,
            BlockKind::Code => &mut self.code_blocks,
            BlockKind::List => &mut self.lists,
            BlockKind::Blockquote => &mut self.blockquotes,
            BlockKind::Paragraph => &mut self.paragraphs,
        }
    }
}

/// Summary flags derived from [`Stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub total_elements: usize,
    pub has_tables: bool,
    pub has_code: bool,
    pub has_lists: bool,
}

impl Metadata {
    fn derive(stats: &Stats) -> Self {
        Self {
            total_elements: stats.total(),
            has_tables: stats.tables > 0,
            has_code: stats.code_blocks > 0,
            has_lists: stats.lists > 0,
        }
    }
}

/// The result of one parse: blocks in source order plus derived counters.
///
/// Only constructible from a block sequence, so `stats` and `metadata` always
/// agree with `structure`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SerializedDocument")]
pub struct Document {
    structure: Vec<Block>,
    stats: Stats,
    metadata: Metadata,
}

impl Document {
    pub fn from_blocks(structure: Vec<Block>) -> Self {
        let mut stats = Stats::default();
        for block in &structure {
            stats.record(block.kind());
        }
        let metadata = Metadata::derive(&stats);
        Self {
            structure,
            stats,
            metadata,
        }
    }

    pub fn structure(&self) -> &[Block] {
        &self.structure
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn is_empty(&self) -> bool {
        self.structure.is_empty()
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.structure
    }
}

impl FromIterator<Block> for Document {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self::from_blocks(iter.into_iter().collect())
    }
}

// Exported stats/metadata are recomputed on load rather than trusted.
#[derive(Deserialize)]
struct SerializedDocument {
    structure: Vec<Block>,
}

impl From<SerializedDocument> for Document {
    fn from(doc: SerializedDocument) -> Self {
        Self::from_blocks(doc.structure)
    }
}
