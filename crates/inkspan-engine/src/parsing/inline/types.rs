use serde::{Deserialize, Serialize};

/// The style of an inline span.
///
/// Only `Link` and `Image` carry a URL, so a span can never hold a target
/// without being one of those two kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Text that isn't part of any special construct.
    Plain,
    Bold,
    Italic,
    Code,
    /// A markdown link `[label](url)`.
    Link { url: String },
    /// A markdown image `![alt](url)`.
    Image { url: String },
}

impl SpanKind {
    /// Short lowercase name, used in error messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            SpanKind::Plain => "plain",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link { .. } => "link",
            SpanKind::Image { .. } => "image",
        }
    }
}

/// A typed fragment of inline text.
///
/// `content` is the free text for plain and styled spans, the label for
/// links and the alt text for images.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    pub content: String,
    pub kind: SpanKind,
}

impl Span {
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            content: content.into(),
            kind,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(label, SpanKind::Link { url: url.into() })
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(alt, SpanKind::Image { url: url.into() })
    }

    /// Returns true if the span has not been claimed by any pass yet.
    pub fn is_plain(&self) -> bool {
        matches!(self.kind, SpanKind::Plain)
    }

    /// The URL of a link or image span, `None` for every other kind.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Link { url } | SpanKind::Image { url } => Some(url),
            _ => None,
        }
    }
}

/// The styles a delimiter pass can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelimitedStyle {
    Bold,
    Italic,
    Code,
}

impl From<DelimitedStyle> for SpanKind {
    fn from(style: DelimitedStyle) -> Self {
        match style {
            DelimitedStyle::Bold => SpanKind::Bold,
            DelimitedStyle::Italic => SpanKind::Italic,
            DelimitedStyle::Code => SpanKind::Code,
        }
    }
}

/// A literal marker paired with the style of the text it encloses,
/// e.g. `**` for bold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterRule {
    pub marker: String,
    pub style: DelimitedStyle,
}

impl DelimiterRule {
    pub fn new(marker: impl Into<String>, style: DelimitedStyle) -> Self {
        Self {
            marker: marker.into(),
            style,
        }
    }
}
