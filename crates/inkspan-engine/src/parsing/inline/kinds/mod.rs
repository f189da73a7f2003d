//! # Inline Kinds
//!
//! Inline-specific types that own their syntax bytes.
//!
//! ## Types
//!
//! - **`Link`**: `LABEL_OPEN = b'['`, `LABEL_CLOSE = b']'`, `URL_OPEN = b'('`, `URL_CLOSE = b')'`
//! - **`Image`**: `BANG = b'!'` followed by link syntax
//!
//! ## Design Principle
//!
//! All syntax constants live here, not scattered in extractor or splitter code.
//! Callers use these constants and the `token` builders; they never hardcode
//! `](` or `![`.

pub mod image;
pub mod link;

pub use image::Image;
pub use link::Link;
