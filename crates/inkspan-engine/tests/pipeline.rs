use inkspan_engine::{
    DelimitedStyle, InlineError, RenderError, Span, SpanKind, default_rules,
    extract_markdown_images, extract_markdown_links, markdown_to_html, split_delimiter,
    split_images, split_links, text_to_spans,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Images then links over the same text yield the four expected spans.
#[test]
fn images_then_links_compose() {
    let spans = split_links(&split_images(&[Span::plain(
        "Start ![img1](url1.png) then [link1](url2.com)",
    )]));
    assert_eq!(
        spans,
        vec![
            Span::plain("Start "),
            Span::image("img1", "url1.png"),
            Span::plain(" then "),
            Span::link("link1", "url2.com"),
        ]
    );
}

/// Extraction reports matches in order of appearance.
#[test]
fn extraction_order() {
    assert_eq!(
        extract_markdown_images("![a](u1) and ![b](u2)"),
        vec![("a", "u1"), ("b", "u2")]
    );
    assert!(extract_markdown_links("![a](u1) and ![b](u2)").is_empty());
}

/// Text without the delimiter comes back unchanged.
#[rstest]
#[case("no markers here")]
#[case("")]
#[case("a * b")]
fn split_without_delimiter_is_identity(#[case] text: &str) {
    let input = vec![Span::plain(text)];
    assert_eq!(
        split_delimiter(&input, "**", DelimitedStyle::Bold).unwrap(),
        input
    );
}

/// Balanced delimiters never fail; an even number of parts always does.
#[rstest]
#[case("`a`", true)]
#[case("`a` `b`", true)]
#[case("``", true)]
#[case("`a", false)]
#[case("`a` `b", false)]
#[case("```", false)]
fn parity_decides_failure(#[case] text: &str, #[case] ok: bool) {
    let result = split_delimiter(&[Span::plain(text)], "`", DelimitedStyle::Code);
    assert_eq!(result.is_ok(), ok, "{text:?} -> {result:?}");
}

/// No pass ever touches a span some earlier pass already styled.
#[test]
fn styled_spans_survive_every_pass() {
    let input = vec![
        Span::new("**b** _i_ `c`", SpanKind::Code),
        Span::link("![x](y)", "z"),
        Span::image("[l](m)", "n"),
    ];
    let mut spans = input.clone();
    for rule in default_rules() {
        spans = split_delimiter(&spans, &rule.marker, rule.style).unwrap();
    }
    spans = split_links(&split_images(&spans));
    assert_eq!(spans, input);
}

#[test]
fn every_pass_maps_empty_to_empty() {
    assert!(split_delimiter(&[], "_", DelimitedStyle::Italic).unwrap().is_empty());
    assert!(split_images(&[]).is_empty());
    assert!(split_links(&[]).is_empty());
}

#[test]
fn text_to_spans_reports_unclosed() {
    assert!(matches!(
        text_to_spans("half **open"),
        Err(InlineError::UnclosedDelimiter { .. })
    ));
}

#[test]
fn document_renders_to_html() {
    let md = "# Not a heading, just text\n\nA `snippet` and a [link](https://example.com).\n";
    let html = markdown_to_html(md, &default_rules()).unwrap();
    assert_eq!(
        html,
        "<div><p># Not a heading, just text</p>\
         <p>A <code>snippet</code> and a <a href=\"https://example.com\">link</a>.</p></div>"
    );
}

#[test]
fn document_error_is_reported_not_panicked() {
    let err = markdown_to_html("_unclosed", &default_rules()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid markdown syntax: unclosed delimiter '_' in text: _unclosed"
    );
    assert!(matches!(err, RenderError::Inline(_)));
}
