//! Underline-headed convention: flush bodies, item trees under indented
//! blocks, the body-indentation asymmetry.

use std::sync::Arc;

use docfmt::{Element, Error, FormatOptions, ParaLine, Parser};

#[test]
fn test_module_comment() {
    let doc = r#"Example NumPy style docstrings.

This module demonstrates documentation as specified by the `NumPy
Documentation HOWTO`_. Docstrings may extend over multiple lines. Sections
are created with a section header followed by an underline of equal length.

Example
-------
Examples can be given using either the ``Example`` or ``Examples``
sections. Sections support any reStructuredText formatting, including
literal blocks::

    $ python example_numpy.py


Notes
-----
    This is an example of an indented section. It's like any other section,
    but the body is indented to help it stand out from surrounding text.

Attributes
----------
module_level_variable1 : int
    Module level variables may be documented in either the ``Attributes``
    section of the module docstring, or in an inline docstring immediately
    following the variable.

    Either form is acceptable, but the two should not be mixed. Choose
    one convention to document module level variables and be consistent
    with it.

"#;

    let parser = Parser::underline();
    let parsed = parser.parse(doc).unwrap();
    assert_eq!(parsed.len(), 4);

    let summary = parsed.section("SUMMARY").unwrap();
    assert_eq!(summary.elements.len(), 2);
    let Element::Paragraph(first) = &summary.elements[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(first.text(), "Example NumPy style docstrings.");
    let Element::Paragraph(second) = &summary.elements[1] else {
        panic!("expected paragraph");
    };
    assert_eq!(second.lines.len(), 3);

    let example = parsed.section("Example").unwrap();
    assert_eq!(example.elements.len(), 2);
    let Element::Paragraph(prose) = &example.elements[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(prose.lines.len(), 3);
    let Element::Paragraph(wrapper) = &example.elements[1] else {
        panic!("expected paragraph");
    };
    assert_eq!(wrapper.lines.len(), 1);

    // the indented Notes body parses like any other section body
    let notes = parsed.section("Notes").unwrap();
    assert_eq!(notes.elements.len(), 1);
    let Element::Paragraph(body) = &notes.elements[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(body.lines.len(), 2);

    let attributes = parsed.section("Attributes").unwrap();
    assert_eq!(attributes.elements.len(), 1);
    let Element::Item(item) = &attributes.elements[0] else {
        panic!("expected item");
    };
    assert_eq!(item.name, "module_level_variable1");
    assert_eq!(item.ty.as_deref(), Some("int"));
    assert_eq!(item.desc, "");
    assert_eq!(item.children.len(), 2);

    let formatted = parser.format(&parsed, &FormatOptions::text());
    assert_eq!(
        formatted,
        r#"Example NumPy style docstrings.

This module demonstrates documentation as specified by the `NumPy
Documentation HOWTO`_. Docstrings may extend over multiple lines. Sections
are created with a section header followed by an underline of equal length.

Example
-------
Examples can be given using either the ``Example`` or ``Examples``
sections. Sections support any reStructuredText formatting, including
literal blocks::
    $ python example_numpy.py

Notes
-----
This is an example of an indented section. It's like any other section,
but the body is indented to help it stand out from surrounding text.

Attributes
----------
module_level_variable1 : int
    Module level variables may be documented in either the ``Attributes``
    section of the module docstring, or in an inline docstring immediately
    following the variable.

    Either form is acceptable, but the two should not be mixed. Choose
    one convention to document module level variables and be consistent
    with it.
"#
    );
}

#[test]
fn test_function_comment_items() {
    let doc = r#"Example function with types documented in the docstring.

    `PEP 484`_ type annotations are supported. If attribute, parameter, and
    return types are annotated according to `PEP 484`_, they do not need to be
    included in the docstring:

    Args
    ----
    param0
        No type
    param1: int
        The first parameter.
    param2: str
        The second parameter.

    Returns
    -------
    bool
        The return value. True for success, False otherwise.

    "#;

    let parser = Parser::underline();
    let parsed = parser.parse(doc).unwrap();
    assert_eq!(parsed.len(), 4);

    let args = parsed.section("Args").unwrap();
    let parameters = parsed.section("Parameters").unwrap();
    assert!(Arc::ptr_eq(args, parameters));

    assert_eq!(args.elements.len(), 3);
    let Element::Item(item) = &args.elements[0] else {
        panic!("expected item");
    };
    assert_eq!((item.name.as_str(), item.ty.as_deref()), ("param0", None));
    assert_eq!(item.desc, "");
    let Element::Paragraph(child) = &item.children[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(child.text(), "No type");

    let Element::Item(item) = &args.elements[1] else {
        panic!("expected item");
    };
    assert_eq!(
        (item.name.as_str(), item.ty.as_deref()),
        ("param1", Some("int"))
    );

    let returns = parsed.section("Returns").unwrap();
    let Element::Item(item) = &returns.elements[0] else {
        panic!("expected item");
    };
    assert_eq!(item.name, "bool");
    assert_eq!(item.ty, None);
    let Element::Paragraph(child) = &item.children[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(child.text(), "The return value. True for success, False otherwise.");

    // the header line normalizes to `name : type`
    let formatted = parser.format(&parsed, &FormatOptions::text());
    assert_eq!(
        formatted,
        r#"Example function with types documented in the docstring.

`PEP 484`_ type annotations are supported. If attribute, parameter, and
return types are annotated according to `PEP 484`_, they do not need to be
included in the docstring:

Args
----
param0
    No type
param1 : int
    The first parameter.
param2 : str
    The second parameter.

Returns
-------
bool
    The return value. True for success, False otherwise.
"#
    );
}

#[test]
fn test_checklist_tree_with_nested_code_line() {
    let doc = r#"Todo tree

    Todo
    ----
    - Something todo
        Long description
            $ Code
    "#;

    let parser = Parser::underline();
    let parsed = parser.parse(doc).unwrap();

    let todo = parsed.section("Todo").unwrap();
    let Element::Checklist(entry) = &todo.elements[0] else {
        panic!("expected checklist entry");
    };
    assert_eq!(entry.text, "Something todo");
    assert_eq!(entry.children.len(), 2);
    let Element::Paragraph(child) = &entry.children[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(child.text(), "Long description");
    let Element::Paragraph(wrapper) = &entry.children[1] else {
        panic!("expected paragraph");
    };
    let ParaLine::Nested(inner) = &wrapper.lines[0] else {
        panic!("expected nested paragraph");
    };
    assert_eq!(inner.text(), "$ Code");

    let options = FormatOptions::text().with_indent("  ").with_indent_unit("  ");
    assert_eq!(
        parser.format(&parsed, &options),
        "Todo tree\n\n  Todo\n  ----\n  - Something todo\n    Long description\n      $ Code\n"
    );
}

#[test]
fn test_code_blocks() {
    let doc = r#"Codeblock

    ```python
    def echo(s):
        print(s)
    ```

    ```
    another codeblock
    ```
    "#;

    let parser = Parser::underline();
    let parsed = parser.parse(doc).unwrap();
    let summary = parsed.section("SUMMARY").unwrap();
    assert_eq!(summary.elements.len(), 3);

    let Element::Code(code) = &summary.elements[1] else {
        panic!("expected code block");
    };
    assert_eq!(code.lang.as_deref(), Some("python"));
    let Element::Code(code) = &summary.elements[2] else {
        panic!("expected code block");
    };
    assert_eq!(code.lang, None);

    let options = FormatOptions::text().with_indent("    ");
    assert_eq!(
        parser.format(&parsed, &options),
        r#"Codeblock

    ```python
    def echo(s):
        print(s)
    ```

    ```
    another codeblock
    ```
"#
    );
}

#[test]
fn test_empty_input() {
    let parser = Parser::underline();
    let first = parser.parse("").unwrap();
    let second = parser.parse("").unwrap();
    assert_eq!(first.len(), 0);
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_duplicated_section_is_an_error() {
    let doc = r#"Summary

    Args
    ----
    whatever
        Whatever item

    Arguments
    ---------
    whatever
        Whatever item
    "#;

    let err = Parser::underline().parse(doc).unwrap_err();
    assert!(matches!(err, Error::DuplicateSection(_)));
}

#[test]
fn test_indented_body_with_flush_continuation_fails() {
    let doc = "Top\n\nNotes\n-----\n    Indented body.\nFlush continuation.\n";
    let err = Parser::underline().parse(doc).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}
