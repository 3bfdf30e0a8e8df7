//! Round-trip properties: paragraph splitting, fence round trips, checklist
//! nesting, and render/parse idempotence.

use docfmt::{Element, FormatOptions, Parser, Style};
use proptest::prelude::*;
use rstest::rstest;

fn render(parser: &Parser, text: &str) -> String {
    parser
        .format_source(text, &FormatOptions::text())
        .expect("parse failed")
}

#[rstest]
#[case(Style::Colon)]
#[case(Style::Underline)]
#[case(Style::AtSign)]
fn test_blank_line_splits_leading_paragraphs(#[case] style: Style) {
    let parser = Parser::new(style);
    let parsed = parser.parse("a\nb\n\nc").unwrap();

    let summary = parsed.section("SUMMARY").unwrap();
    assert_eq!(summary.elements.len(), 2);
    let Element::Paragraph(first) = &summary.elements[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(first.text(), "a\nb");
    let Element::Paragraph(second) = &summary.elements[1] else {
        panic!("expected paragraph");
    };
    assert_eq!(second.text(), "c");
}

#[rstest]
#[case(Style::Colon)]
#[case(Style::Underline)]
#[case(Style::AtSign)]
fn test_code_fence_round_trip(#[case] style: Style) {
    let parser = Parser::new(style);
    let doc = "Top\n\n```rust\none line\n```\n";

    let parsed = parser.parse(doc).unwrap();
    let summary = parsed.section("SUMMARY").unwrap();
    let Element::Code(code) = &summary.elements[1] else {
        panic!("expected code block");
    };
    assert_eq!(code.lang.as_deref(), Some("rust"));
    assert_eq!(code.body.len(), 1);
    assert_eq!(code.body[0].text(), "one line");

    let rendered = render(&parser, doc);
    assert!(rendered.contains("```rust\none line\n```"));
    assert_eq!(render(&parser, &rendered), rendered);
}

#[test]
fn test_checklist_nesting_restores_layout() {
    let parser = Parser::colon();
    let doc = "Top\n\n    Todo:\n        - entry\n            below\n";

    let parsed = parser.parse(doc).unwrap();
    let todo = parsed.section("Todo").unwrap();
    let Element::Checklist(entry) = &todo.elements[0] else {
        panic!("expected checklist entry");
    };
    let Element::Paragraph(child) = &entry.children[0] else {
        panic!("expected paragraph child");
    };
    assert_eq!(child.text(), "below");

    assert_eq!(
        render(&parser, doc),
        "Top\n\nTodo:\n    - entry\n        below\n"
    );
}

#[rstest]
#[case(Style::Colon, "Top\n\n    Args:\n        x (int): An x.\n\n    Todo:\n        - entry\n")]
#[case(Style::Underline, "Top\n\nArgs\n----\nx : int\n    An x.\n")]
#[case(Style::AtSign, "@API\nTop\n\n@Args:\n    x (int): An x.\n")]
fn test_render_is_idempotent(#[case] style: Style, #[case] doc: &str) {
    let parser = Parser::new(style);
    let once = render(&parser, doc);
    let twice = render(&parser, &once);
    assert_eq!(once, twice);
}

const WORDS: &[&str] = &["alpha", "beta", "gamma", "delta", "omega", "sigma"];
const NAMES: &[&str] = &["x", "y", "value", "count"];

fn words(range: std::ops::Range<usize>) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), range)
        .prop_map(|words| words.join(" "))
}

fn paragraph() -> impl Strategy<Value = String> {
    prop::collection::vec(words(1..5), 1..4).prop_map(|lines| lines.join("\n"))
}

fn colon_doc() -> impl Strategy<Value = String> {
    (
        paragraph(),
        prop::collection::vec((prop::sample::select(NAMES), words(1..4)), 0..3),
        prop::collection::vec(words(1..4), 0..3),
    )
        .prop_map(|(summary, items, entries)| {
            let mut doc = summary;
            if !items.is_empty() {
                doc.push_str("\n\nArgs:\n");
                for (name, desc) in &items {
                    doc.push_str(&format!("    {name}: {desc}\n"));
                }
            }
            if !entries.is_empty() {
                doc.push_str("\n\nTodo:\n");
                for entry in &entries {
                    doc.push_str(&format!("    - {entry}\n"));
                }
            }
            doc
        })
}

fn underline_doc() -> impl Strategy<Value = String> {
    (
        paragraph(),
        prop::collection::vec((prop::sample::select(NAMES), words(1..4)), 1..3),
    )
        .prop_map(|(summary, items)| {
            let mut doc = summary;
            doc.push_str("\n\nArgs\n----\n");
            for (name, desc) in &items {
                doc.push_str(&format!("{name} : int\n    {desc}\n"));
            }
            doc
        })
}

proptest! {
    #[test]
    fn prop_colon_render_is_idempotent(doc in colon_doc()) {
        let parser = Parser::colon();
        let once = render(&parser, &doc);
        let twice = render(&parser, &once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_underline_render_is_idempotent(doc in underline_doc()) {
        let parser = Parser::underline();
        let once = render(&parser, &doc);
        let twice = render(&parser, &once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_parse_never_panics_on_word_soup(doc in paragraph()) {
        // prose-only input parses under every convention
        for style in [Style::Colon, Style::Underline, Style::AtSign] {
            prop_assert!(Parser::new(style).parse(&doc).is_ok());
        }
    }
}
