//! Presentation of a parsed [`Document`]: pretty JSON, an outline tree and a
//! statistics report.

pub mod json;
pub mod stats;
pub mod tree;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Document;

pub use json::{from_json, to_json};
pub use stats::to_stats_report;
pub use tree::to_tree;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown output format '{0}' (expected tree, json or stats)")]
    UnknownFormat(String),
}

/// How a document is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Tree,
    Json,
    Stats,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Tree => "tree",
            OutputFormat::Json => "json",
            OutputFormat::Stats => "stats",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tree" => Ok(OutputFormat::Tree),
            "json" => Ok(OutputFormat::Json),
            "stats" => Ok(OutputFormat::Stats),
            _ => Err(RenderError::UnknownFormat(s.to_string())),
        }
    }
}

/// Renders `doc` in the requested format.
pub fn render(doc: &Document, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Tree => Ok(to_tree(doc)),
        OutputFormat::Json => to_json(doc),
        OutputFormat::Stats => Ok(to_stats_report(doc)),
    }
}
