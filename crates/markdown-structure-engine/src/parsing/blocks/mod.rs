//! # Block Parsing
//!
//! Cursor-driven, single-pass block extraction over source lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): the cursor line is mapped to a
//!    `LineClass` by prefix/pattern, in a fixed priority order that respects
//!    the parser toggles
//!
//! 2. **Extraction** (`open` + `kinds`): the extractor for that class reads the
//!    cursor line, plus lookahead lines for code fences, tables and lists, and
//!    returns an `Extraction` (optional block + lines consumed)
//!
//! 3. **Building** (`builder`): `BlockBuilder` collects emitted blocks and moves
//!    the cursor until the input is exhausted
//!
//! ## Modules
//!
//! - **`types`**: `Extraction`, the contract between the scan loop and extractors
//! - **`kinds`**: One type per block kind owning its syntax (Heading, CodeFence,
//!   PipeTable, List, BlockQuote, Paragraph)
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` for a line
//! - **`open`**: `extract_at` dispatch from class to extractor
//! - **`builder`**: `BlockBuilder` cursor loop
//!
//! ## Key Invariants
//!
//! - Every step consumes at least one line, so the scan always terminates
//! - Malformed constructs produce no block and consume exactly one line
//! - Code fence interiors are raw zones: no classification inside
//! - Blocks are emitted in order of their first source line

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::Extraction;
