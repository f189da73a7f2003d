use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InlineError {
    #[error("invalid markdown syntax: unclosed delimiter '{delimiter}' in text: {text}")]
    UnclosedDelimiter { text: String, delimiter: String },

    #[error("delimiter must not be empty")]
    EmptyDelimiter,
}
