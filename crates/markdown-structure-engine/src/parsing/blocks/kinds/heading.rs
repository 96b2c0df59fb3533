use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Block, Header};
use crate::parsing::blocks::types::Extraction;

/// ATX-style heading: a run of `#`, whitespace, then text.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    pub fn opens(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    /// `#NoSpace` and a bare `#` do not match and are dropped.
    pub fn extract(line: &str) -> Extraction {
        let Some(caps) = heading_regex().captures(line) else {
            log::debug!("dropping malformed heading: {line:?}");
            return Extraction::skip();
        };

        let level = u8::try_from(caps[1].len()).unwrap_or(u8::MAX);
        Extraction::single(Block::Header(Header {
            level,
            content: caps[2].trim().to_string(),
            raw: line.to_string(),
        }))
    }
}

fn heading_regex() -> &'static Regex {
    static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADING_REGEX
        .get_or_init(|| Regex::new(r"^(#+)\s+(.+)$").expect("Invalid heading regex"))
}
