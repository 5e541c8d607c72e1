// crates/tool-schema/tests/doc_parsing.rs
// ============================================================================
// Module: Documentation Parsing Tests
// Description: Function and parameter descriptions from doc text.
// Purpose: Pin tag splitting, whitespace collapsing, and precedence rules.
// ============================================================================

//! Doc comment extraction tests.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions are permitted."
)]

use tool_schema::DocComment;

#[test]
fn text_without_tags_is_the_description() {
    let doc = DocComment::parse("  Sends a\n   message.  ");
    assert_eq!(doc.description(), "Sends a message.");
    assert!(doc.parameters().is_empty());
}

#[test]
fn description_stops_at_first_param_tag() {
    let doc = DocComment::parse("Adds numbers.\n\n:param a: left operand\n:param b: right operand");
    assert_eq!(doc.description(), "Adds numbers.");
    assert_eq!(doc.parameter("a"), Some("left operand"));
    assert_eq!(doc.parameter("b"), Some("right operand"));
}

#[test]
fn parameter_text_spans_lines_until_next_tag() {
    let doc = DocComment::parse(
        "Sums.\n:param a: first\n    continued here\n:type a: int\n\
         :param b: second\n:return: total",
    );
    assert_eq!(doc.parameter("a"), Some("first continued here"));
    assert_eq!(doc.parameter("b"), Some("second"));
}

#[test]
fn rtype_tag_terminates_description() {
    let doc = DocComment::parse(":param a: value :rtype: int");
    assert_eq!(doc.parameter("a"), Some("value"));
    assert_eq!(doc.description(), "");
}

#[test]
fn empty_parameter_descriptions_are_ignored() {
    let doc = DocComment::parse("Doc. :param a: :param b: used");
    assert_eq!(doc.parameter("a"), None);
    assert_eq!(doc.parameter("b"), Some("used"));
}

#[test]
fn first_description_for_a_name_wins() {
    let doc = DocComment::parse(":param a: one :param a: two");
    assert_eq!(doc.parameter("a"), Some("one"));
}

#[test]
fn undocumented_parameter_has_no_description() {
    let doc = DocComment::parse("Doc. :param a: value");
    assert_eq!(doc.parameter("missing"), None);
}
