use std::fmt::Write;

use crate::models::{BlockKind, Document};

fn counter_name(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Header => "headers",
        BlockKind::Table => "tables",
        BlockKind::Code => "code_blocks",
        BlockKind::List => "lists",
        BlockKind::Blockquote => "blockquotes",
        BlockKind::Paragraph => "paragraphs",
    }
}

/// One `name: value` line per counter, then the derived metadata.
pub fn to_stats_report(doc: &Document) -> String {
    let stats = doc.stats();
    let meta = doc.metadata();
    let mut out = String::new();

    for kind in BlockKind::ALL {
        let _ = writeln!(out, "{}: {}", counter_name(kind), stats.count(kind));
    }
    let _ = writeln!(out, "total_elements: {}", meta.total_elements);
    let _ = writeln!(out, "has_tables: {}", meta.has_tables);
    let _ = writeln!(out, "has_code: {}", meta.has_code);
    let _ = writeln!(out, "has_lists: {}", meta.has_lists);
    out
}
