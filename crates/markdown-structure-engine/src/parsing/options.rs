use serde::{Deserialize, Serialize};

/// Feature toggles for the multi-line extractors.
///
/// Headers, blockquotes and paragraphs are always recognised; these switches
/// only decide whether tables, fenced code and lists get their own blocks or
/// fall through to the single-line handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    pub tables: bool,
    pub code: bool,
    pub lists: bool,
}

impl ParserOptions {
    /// Every toggle off: only headers, blockquotes and paragraphs.
    pub const MINIMAL: Self = Self {
        tables: false,
        code: false,
        lists: false,
    };
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            tables: true,
            code: true,
            lists: true,
        }
    }
}
