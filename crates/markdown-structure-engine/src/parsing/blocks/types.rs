use crate::models::Block;

/// What an extractor produced at the cursor, and how far the cursor moves.
///
/// `consumed` is always at least 1 so the scan makes progress on every step,
/// including when nothing was emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub block: Option<Block>,
    pub consumed: usize,
}

impl Extraction {
    /// A block spanning `consumed` lines.
    pub fn emit(block: Block, consumed: usize) -> Self {
        Self {
            block: Some(block),
            consumed: consumed.max(1),
        }
    }

    /// A block built from the cursor line alone.
    pub fn single(block: Block) -> Self {
        Self::emit(block, 1)
    }

    /// Nothing recognised: drop the cursor line and move on.
    pub fn skip() -> Self {
        Self {
            block: None,
            consumed: 1,
        }
    }
}
