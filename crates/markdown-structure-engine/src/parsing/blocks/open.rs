use super::{
    classify::LineClass,
    kinds::{BlockQuote, CodeFence, Heading, List, Paragraph, PipeTable},
    types::Extraction,
};

/// Runs the extractor for `class` on the lines starting at the cursor.
///
/// `rest[0]` is the classified cursor line; the multi-line extractors look
/// ahead into the remainder.
pub fn extract_at(class: LineClass, rest: &[&str]) -> Extraction {
    let Some(&line) = rest.first() else {
        return Extraction::skip();
    };
    match class {
        LineClass::Heading => Heading::extract(line),
        LineClass::CodeFence => CodeFence::extract(rest),
        LineClass::TableRow => PipeTable::extract(rest),
        LineClass::ListItem => List::extract(rest),
        LineClass::BlockQuote => BlockQuote::extract(line),
        LineClass::Paragraph => Paragraph::extract(line),
        LineClass::Blank => Extraction::skip(),
    }
}
