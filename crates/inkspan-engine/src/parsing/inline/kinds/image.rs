use super::Link;

/// Markdown image syntax: `![alt](url)`, a link prefixed with `!`.
pub struct Image;

impl Image {
    pub const BANG: u8 = b'!';

    /// Rebuilds the source text of an image.
    pub fn token(alt: &str, url: &str) -> String {
        format!("!{}", Link::token(alt, url))
    }
}
