use thiserror::Error;

use crate::{
    html::{HtmlError, HtmlNode, LeafNode, ParentNode, span_to_html_node},
    parsing::{
        inline::{DelimiterRule, InlineError, Span},
        text_to_spans_with,
    },
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error(transparent)]
    Inline(#[from] InlineError),
    #[error(transparent)]
    Html(#[from] HtmlError),
}

/// Converts every span to a node, stopping at the first unsupported one.
pub fn spans_to_html_nodes(spans: &[Span]) -> Result<Vec<HtmlNode>, HtmlError> {
    spans
        .iter()
        .map(|span| span_to_html_node(span).map(HtmlNode::from))
        .collect()
}

/// Tokenizes one paragraph and wraps its spans in a `<p>` node.
///
/// A paragraph made only of delimiters (`****`) has no spans and renders as
/// `<p></p>`.
pub fn paragraph_to_html_node(
    text: &str,
    rules: &[DelimiterRule],
) -> Result<HtmlNode, RenderError> {
    let spans = text_to_spans_with(text, rules)?;
    let mut children = spans_to_html_nodes(&spans)?;
    if children.is_empty() {
        log::debug!("paragraph {text:?} has no spans");
        children.push(LeafNode::text("").into());
    }
    Ok(ParentNode::new("p", children).into())
}

/// Splits `text` into paragraphs on blank lines.
///
/// Lines inside a paragraph are joined with a single space. Only used to feed
/// paragraphs to the inline pipeline; no other block syntax is recognized.
pub fn paragraphs(text: &str) -> Vec<String> {
    let mut out = vec![];
    let mut current: Vec<&str> = vec![];

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                out.push(current.join(" "));
                current.clear();
            }
            continue;
        }
        current.push(line);
    }
    if !current.is_empty() {
        out.push(current.join(" "));
    }

    out
}

/// Renders a whole document as a `<div>` of paragraphs.
///
/// A document with no paragraphs renders as `<div></div>`.
pub fn markdown_to_html(text: &str, rules: &[DelimiterRule]) -> Result<String, RenderError> {
    let blocks = paragraphs(text);
    log::debug!("rendering {} paragraphs", blocks.len());
    if blocks.is_empty() {
        return Ok("<div></div>".to_string());
    }

    let children = blocks
        .iter()
        .map(|block| paragraph_to_html_node(block, rules))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new("div", children).to_html()?)
}
