use crate::parsing::inline::{Span, SpanKind};

use super::{HtmlError, LeafNode, Props};

/// Converts one inline span into a leaf node.
///
/// | Kind   | Node                      |
/// |--------|---------------------------|
/// | Plain  | bare text                 |
/// | Bold   | `<b>`                     |
/// | Italic | `<i>`                     |
/// | Code   | `<code>`                  |
/// | Link   | `<a href="url">`          |
/// | Image  | error                     |
pub fn span_to_html_node(span: &Span) -> Result<LeafNode, HtmlError> {
    let node = match &span.kind {
        SpanKind::Plain => LeafNode::text(&span.content),
        SpanKind::Bold => LeafNode::new(Some("b"), &span.content),
        SpanKind::Italic => LeafNode::new(Some("i"), &span.content),
        SpanKind::Code => LeafNode::new(Some("code"), &span.content),
        SpanKind::Link { url } => LeafNode::new(Some("a"), &span.content)
            .with_props([("href", url.as_str())].into_iter().collect::<Props>()),
        SpanKind::Image { .. } => {
            return Err(HtmlError::UnsupportedSpan {
                kind: span.kind.name(),
            });
        }
    };
    Ok(node)
}
