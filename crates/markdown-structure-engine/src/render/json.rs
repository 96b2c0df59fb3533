use crate::models::Document;

use super::RenderError;

/// Pretty JSON export: `structure`, `stats` and `metadata` at the top level.
pub fn to_json(doc: &Document) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Reads an exported document back. Stats and metadata are recomputed from
/// `structure`.
pub fn from_json(json: &str) -> Result<Document, RenderError> {
    Ok(serde_json::from_str(json)?)
}
