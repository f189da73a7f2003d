//! # Inline Parsing
//!
//! Span-splitting passes that turn one plain run of paragraph text into a
//! typed sequence of inline spans.
//!
//! ## Architecture
//!
//! Every pass takes a slice of spans and returns a new vector. Only plain
//! spans are ever split; anything an earlier pass styled is passed through
//! unchanged. Passes are chained by [`crate::parsing::text_to_spans`].
//!
//! ## Modules
//!
//! - **`types`**: `Span`, `SpanKind`, `DelimitedStyle`, `DelimiterRule`
//! - **`kinds`**: Link and image syntax bytes (`[`, `](`, `!`, ...)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`extract`**: `extract_markdown_images()` / `extract_markdown_links()`
//! - **`delimiter`**: `split_delimiter()` for `**bold**`, `_italic_`, `` `code` ``
//! - **`media`**: `split_images()` / `split_links()`
//!
//! ## Pass Order
//!
//! Delimiter passes run first, one per marker, then images, then links.
//! A span styled by an earlier pass is never revisited, so in `` **`x`** ``
//! the backticks stay literal text inside the bold span.

pub mod cursor;
pub mod delimiter;
pub mod error;
pub mod extract;
pub mod kinds;
pub mod media;
pub mod types;

pub use delimiter::split_delimiter;
pub use error::InlineError;
pub use extract::{extract_markdown_images, extract_markdown_links};
pub use media::{split_images, split_links};
pub use types::{DelimitedStyle, DelimiterRule, Span, SpanKind};
