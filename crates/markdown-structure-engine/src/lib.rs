pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use parsing::{ParserOptions, StructuralParser, parse_document};
pub use render::{OutputFormat, RenderError, render};
