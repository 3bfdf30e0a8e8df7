//! Markdown target: headings, backtick emphasis, hard line breaks.

use docfmt::{FormatOptions, Parser};

#[test]
fn test_headings_and_item_emphasis() {
    let doc = r#"Example function with types documented in the docstring.

    Args:
        param0: No type
        param1 (int): The first parameter.

    Returns:
        bool: The return value.
    "#;

    let parser = Parser::colon();
    let markdown = parser
        .format_source(doc, &FormatOptions::markdown())
        .unwrap();

    assert!(markdown
        .contains("# Example function with types documented in the docstring."));
    assert!(markdown.contains("# Args:"));
    assert!(markdown.contains("`param0`: No type"));
    assert!(markdown.contains("`param1` (`int`): The first parameter"));
    assert!(markdown.contains("# Returns:"));
    assert!(markdown.contains("`bool`: The return value."));
}

#[test]
fn test_checklist_indent_unit_is_two_spaces() {
    let doc = r#"Todo tree

    Todo:
        - Something todo
            Long description
    "#;

    let markdown = Parser::colon()
        .format_source(doc, &FormatOptions::markdown())
        .unwrap();

    assert!(markdown.contains("# Todo tree"));
    assert!(markdown.contains("# Todo:"));
    assert!(markdown.contains("  - Something todo"));
    assert!(markdown.contains("    Long description"));
}

#[test]
fn test_code_blocks_keep_fences_undecorated() {
    let doc = r#"Codeblock

    ```python
    def echo(s):
        print(s)
    ```

    ```
    another codeblock
    ```
    "#;

    let markdown = Parser::colon()
        .format_source(doc, &FormatOptions::markdown())
        .unwrap();

    assert!(markdown.contains("# Codeblock"));
    // body lines carry the hard-break suffix, fence lines do not
    assert!(markdown.contains("```python\ndef echo(s):  \n  print(s)  \n```"));
    assert!(markdown.contains("```\nanother codeblock  \n```"));
}

#[test]
fn test_heading_level() {
    let doc = "Top line\n\n    Args:\n        x: An x.\n";
    let markdown = Parser::colon()
        .format_source(doc, &FormatOptions::markdown().with_heading_level(3))
        .unwrap();

    assert!(markdown.starts_with("### Top line\n"));
    assert!(markdown.contains("### Args:"));
}

#[test]
fn test_paragraph_lines_get_hard_breaks() {
    let doc = "First line\n\nsecond wave one\nsecond wave two\n";
    let markdown = Parser::colon()
        .format_source(doc, &FormatOptions::markdown())
        .unwrap();

    assert_eq!(
        markdown,
        "# First line\n\nsecond wave one  \nsecond wave two  \n"
    );
}

#[test]
fn test_underline_sections_render_flush_headings() {
    let doc = r#"Top line

Args
----
x : int
    An x value.
"#;

    let markdown = Parser::underline()
        .format_source(doc, &FormatOptions::markdown())
        .unwrap();

    assert!(markdown.starts_with("# Top line\n"));
    assert!(markdown.contains("# Args\n"));
    assert!(markdown.contains("`x` : `int`  "));
    // flush bodies stay flush: the item line is unindented
    assert!(markdown.contains("\n`x` : `int`  \n"));
    assert!(markdown.contains("  An x value.  "));
}

#[test]
fn test_at_sign_marker_line_kept() {
    let doc = "@API\nTop line\n\n@Args:\n    x: An x.\n";
    let markdown = Parser::at_sign()
        .format_source(doc, &FormatOptions::markdown())
        .unwrap();

    assert!(markdown.starts_with("@API\n# Top line\n"));
    assert!(markdown.contains("# @Args:"));
    assert!(markdown.contains("`x`: An x."));
}
