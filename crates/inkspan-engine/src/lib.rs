//! # inkspan-engine
//!
//! Turns paragraphs of constrained Markdown into typed inline spans and
//! renders them as HTML.
//!
//! ```text
//! text → delimiter passes → images → links → spans → HTML nodes → String
//! ```
//!
//! - [`parsing`]: the span pipeline (`text_to_spans`) and its passes
//! - [`html`]: the render tree and span-to-node mapping
//! - [`render`]: paragraph and document entry points

pub mod html;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use html::{HtmlError, HtmlNode, LeafNode, ParentNode, Props, span_to_html_node};
pub use parsing::{
    default_rules,
    inline::{
        DelimitedStyle, DelimiterRule, InlineError, Span, SpanKind, extract_markdown_images,
        extract_markdown_links, split_delimiter, split_images, split_links,
    },
    text_to_spans, text_to_spans_with,
};
pub use render::{
    RenderError, markdown_to_html, paragraph_to_html_node, paragraphs, spans_to_html_nodes,
};
