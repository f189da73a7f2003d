//! Tests for the full tokenizing pipeline.
//!
//! Each case runs `text_to_spans` and checks both the exact output and the
//! general span invariants.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    default_rules,
    inline::{DelimitedStyle, DelimiterRule, InlineError, Span, SpanKind},
    text_to_spans, text_to_spans_with,
};

fn bold(s: &str) -> Span {
    Span::new(s, SpanKind::Bold)
}

fn italic(s: &str) -> Span {
    Span::new(s, SpanKind::Italic)
}

fn code(s: &str) -> Span {
    Span::new(s, SpanKind::Code)
}

#[test]
fn every_inline_kind_in_one_paragraph() {
    let text = "This is **text** with an _italic_ word and a `code block` and an \
                ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)";

    let spans = text_to_spans(text).unwrap();
    invariants::check(&spans);

    assert_eq!(
        spans,
        vec![
            Span::plain("This is "),
            bold("text"),
            Span::plain(" with an "),
            italic("italic"),
            Span::plain(" word and a "),
            code("code block"),
            Span::plain(" and an "),
            Span::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
            Span::plain(" and a "),
            Span::link("link", "https://boot.dev"),
        ]
    );
}

#[rstest]
#[case("plain text", vec![Span::plain("plain text")])]
#[case("", vec![Span::plain("")])]
#[case("**all bold**", vec![bold("all bold")])]
#[case("`[a](u)` and [b](v)", vec![code("[a](u)"), Span::plain(" and "), Span::link("b", "v")])]
#[case("**`x`**", vec![bold("`x`")])]
#[case("![](a.png)[](b.com)", vec![Span::image("", "a.png"), Span::link("", "b.com")])]
#[case("a `` b", vec![Span::plain("a "), Span::plain(" b")])]
fn pipeline_cases(#[case] text: &str, #[case] expected: Vec<Span>) {
    let spans = text_to_spans(text).unwrap();
    invariants::check(&spans);
    assert_eq!(spans, expected);
}

#[rstest]
#[case("an **unclosed bold", "**")]
#[case("an _unclosed italic", "_")]
#[case("an `unclosed code", "`")]
fn pipeline_reports_unclosed_delimiters(#[case] text: &str, #[case] delimiter: &str) {
    let err = text_to_spans(text).unwrap_err();
    assert_eq!(
        err,
        InlineError::UnclosedDelimiter {
            text: text.to_string(),
            delimiter: delimiter.to_string(),
        }
    );
}

#[test]
fn unclosed_error_names_the_remaining_plain_piece() {
    // The bold pass runs first, so the code pass only sees the tail.
    let err = text_to_spans("**ok** then `oops").unwrap_err();
    assert_eq!(
        err,
        InlineError::UnclosedDelimiter {
            text: " then `oops".to_string(),
            delimiter: "`".to_string(),
        }
    );
}

#[test]
fn custom_rules_replace_defaults() {
    let rules = vec![
        DelimiterRule::new("**", DelimitedStyle::Bold),
        DelimiterRule::new("*", DelimitedStyle::Italic),
    ];
    let spans = text_to_spans_with("**b** and *i* and _raw_", &rules).unwrap();
    assert_eq!(
        spans,
        vec![
            bold("b"),
            Span::plain(" and "),
            italic("i"),
            Span::plain(" and _raw_"),
        ]
    );
}

#[test]
fn no_rules_only_splits_media() {
    let spans = text_to_spans_with("**x** [l](u)", &[]).unwrap();
    assert_eq!(spans, vec![Span::plain("**x** "), Span::link("l", "u")]);
}

#[test]
fn default_rules_order() {
    let markers: Vec<_> = default_rules().into_iter().map(|r| r.marker).collect();
    assert_eq!(markers, vec!["**", "_", "`"]);
}

#[test]
fn single_marker_inside_url_is_unclosed() {
    let err = text_to_spans("[docs](https://example.com/my_page)").unwrap_err();
    assert_eq!(
        err,
        InlineError::UnclosedDelimiter {
            text: "[docs](https://example.com/my_page)".to_string(),
            delimiter: "_".to_string(),
        }
    );
}

#[test]
fn paired_markers_inside_url_split_before_media() {
    let spans = text_to_spans("![pic](a_b_c.png)").unwrap();
    invariants::check(&spans);
    assert_eq!(
        spans,
        vec![
            Span::plain("![pic](a"),
            italic("b"),
            Span::plain("c.png)"),
        ]
    );
}
