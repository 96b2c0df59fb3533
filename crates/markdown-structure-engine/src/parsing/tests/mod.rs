//! Fixture and invariant tests for the parsing module.
//!
//! Fixtures (.md) live in `fixtures/`; each is rendered as an outline tree and
//! compared against an inline `insta` snapshot.


use pretty_assertions::assert_eq;

use crate::models::{Block, BlockKind};
use crate::parsing::{ParserOptions, StructuralParser, parse_document};
use crate::render::to_tree;

fn fixture(name: &str) -> String {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap()
}

fn parse_fixture(name: &str, options: ParserOptions) -> String {
    let md = fixture(name);
    let doc = parse_document(&md, options);
    invariants::check(&md, &doc);
    to_tree(&doc)
}

fn kinds(text: &str, options: ParserOptions) -> Vec<BlockKind> {
    parse_document(text, options)
        .structure()
        .iter()
        .map(Block::kind)
        .collect()
}

// Fixture-based snapshot tests

#[test]
fn fixture_kitchen_sink() {
    insta::assert_snapshot!(parse_fixture("kitchen_sink", ParserOptions::default()), @r"
    § H1 Main Title
      § H2 Introduction
        ¶ This is a **sample** markdown document w...
        § H3 Features
          ☰ List with 3 items
      § H2 Table Example
        ▦ Table with 3 columns and 2 rows
      § H2 Code Example
        ƒ python (3 lines)
        ❝ Markdown is a lightweight markup languag...
        ☰ List with 2 items
    ");
}

#[test]
fn fixture_kitchen_sink_minimal() {
    insta::assert_snapshot!(parse_fixture("kitchen_sink", ParserOptions::MINIMAL), @r#"
    § H1 Main Title
      § H2 Introduction
        ¶ This is a **sample** markdown document w...
        § H3 Features
          ¶ - First item
          ¶ - Second item with *italic* text
          ¶ - Third item with `inline code`
      § H2 Table Example
        ¶ | Column 1 | Column 2 | Column 3 |
        ¶ |----------|----------|----------|
        ¶ | Data 1   | Data 2   | Data 3   |
        ¶ | Data 4   | Data 5   | Data 6   |
      § H2 Code Example
        ¶ ```python
        ¶ def hello_world():
        ¶ print("Hello, World!")
        ¶ return True
        ¶ ```
        ❝ Markdown is a lightweight markup languag...
        ¶ 1. Numbered one
        ¶ 2. Numbered two
    "#);
}

#[test]
fn fixture_malformed() {
    insta::assert_snapshot!(parse_fixture("malformed", ParserOptions::default()), @r"
    § H1 Valid heading
      ▦ Table with 1 columns and 0 rows
      ¶ fn main() {}
      ¶ ```
    ");
}

#[test]
fn fixture_mixed_list() {
    insta::assert_snapshot!(parse_fixture("mixed_list", ParserOptions::default()), @r"
    ☰ List with 3 items
    ☰ List with 2 items
    ¶ text ends it
    ☰ List with 1 items
    ");
}

// Invariant tests

/// Test empty document produces no blocks.
#[test]
fn empty_document() {
    let doc = parse_document("", ParserOptions::default());
    assert!(doc.is_empty());
    assert_eq!(doc.stats().total(), 0);
    assert!(!doc.metadata().has_tables);
}

/// Test blank lines don't produce blocks.
#[test]
fn blank_lines_only() {
    let doc = parse_document("\n \n\t\n\r\n", ParserOptions::default());
    assert!(doc.is_empty());
}

#[test]
fn order_follows_first_line() {
    let text = "> quote\n# Head\n- a\n- b\n| x |\n|---|\n```\ncode\n```\npara";
    assert_eq!(
        kinds(text, ParserOptions::default()),
        vec![
            BlockKind::Blockquote,
            BlockKind::Header,
            BlockKind::List,
            BlockKind::Table,
            BlockKind::Code,
            BlockKind::Paragraph,
        ]
    );
}

#[test]
fn unterminated_fence_drops_only_the_opener() {
    let doc = parse_document("```go\nx := 1", ParserOptions::default());
    assert_eq!(doc.structure().len(), 1);
    match &doc.structure()[0] {
        Block::Paragraph(p) => assert_eq!(p.content, "x := 1"),
        other => panic!("expected paragraph, got {other:?}"),
    }
}

#[test]
fn lone_pipe_line_is_dropped() {
    assert_eq!(
        kinds("a | b\nafter", ParserOptions::default()),
        vec![BlockKind::Paragraph]
    );
}

#[test]
fn malformed_header_is_not_a_paragraph() {
    assert!(kinds("#hashtag", ParserOptions::default()).is_empty());
}

#[test]
fn heading_ignores_toggles() {
    assert_eq!(kinds("# a | b", ParserOptions::default()), vec![BlockKind::Header]);
    assert_eq!(kinds("# a | b", ParserOptions::MINIMAL), vec![BlockKind::Header]);
}

#[test]
fn consecutive_quotes_are_separate_blocks() {
    assert_eq!(
        kinds("> one\n> two", ParserOptions::default()),
        vec![BlockKind::Blockquote, BlockKind::Blockquote]
    );
}

#[test]
fn crlf_input_keeps_raw_and_trims_content() {
    let text = "# Title\r\n- item\r\n```rs\r\nlet x = 1;\r\n```\r\n";
    let doc = parse_document(text, ParserOptions::default());
    invariants::check(text, &doc);

    let blocks = doc.structure();
    assert_eq!(blocks.len(), 3);
    match (&blocks[0], &blocks[1], &blocks[2]) {
        (Block::Header(h), Block::List(l), Block::Code(c)) => {
            assert_eq!(h.content, "Title");
            assert_eq!(h.raw, "# Title\r");
            assert_eq!(l.items, vec!["item"]);
            assert_eq!(c.language, "rs");
            assert_eq!(c.content, "let x = 1;\r");
            assert_eq!(c.raw, "```rs\r\nlet x = 1;\r\n```\r");
        }
        other => panic!("unexpected blocks: {other:?}"),
    }
}

#[test]
fn parser_is_reusable_across_calls() {
    let parser = StructuralParser::new(ParserOptions::default());
    let first = parser.parse("# One");
    let second = parser.parse("# One");
    assert_eq!(first, second);
    assert_eq!(parser.options(), ParserOptions::default());
}
