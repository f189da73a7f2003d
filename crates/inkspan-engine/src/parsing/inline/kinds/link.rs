/// Markdown link syntax: `[label](url)`.
pub struct Link;

impl Link {
    pub const LABEL_OPEN: u8 = b'[';
    pub const LABEL_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';

    /// Rebuilds the source text of a link.
    pub fn token(label: &str, url: &str) -> String {
        format!("[{label}]({url})")
    }
}
