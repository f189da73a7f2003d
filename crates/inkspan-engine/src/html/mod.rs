//! # HTML Render Tree
//!
//! A minimal node tree that serializes to an HTML string, and the mapping
//! from inline spans to nodes.
//!
//! Text and attribute values are written verbatim. Callers that need escaping
//! must escape before building nodes.

pub mod convert;
pub mod node;

pub use convert::span_to_html_node;
pub use node::{HtmlNode, LeafNode, ParentNode, Props};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HtmlError {
    #[error("parent node <{tag}> has no children")]
    EmptyParent { tag: String },
    #[error("{kind} spans have no HTML node mapping")]
    UnsupportedSpan { kind: &'static str },
}
