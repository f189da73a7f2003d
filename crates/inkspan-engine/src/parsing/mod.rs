pub mod inline;

#[cfg(test)]
mod tests;

use inline::{
    DelimitedStyle, DelimiterRule, InlineError, Span, split_delimiter, split_images, split_links,
};

/// The built-in delimiter passes: `**bold**`, `_italic_`, `` `code` ``, in
/// that order.
pub fn default_rules() -> Vec<DelimiterRule> {
    vec![
        DelimiterRule::new("**", DelimitedStyle::Bold),
        DelimiterRule::new("_", DelimitedStyle::Italic),
        DelimiterRule::new("`", DelimitedStyle::Code),
    ]
}

/// Tokenizes one paragraph of text using [`default_rules`].
pub fn text_to_spans(text: &str) -> Result<Vec<Span>, InlineError> {
    text_to_spans_with(text, &default_rules())
}

/// Tokenizes one paragraph of text into inline spans.
///
/// Runs one delimiter pass per rule in order, then splits out images, then
/// links.
///
/// Delimiter passes see image and link syntax as plain text, so a marker
/// inside a URL is still a marker: `[docs](a/my_page)` is an unclosed `_`,
/// and `![pic](a_b_c.png)` puts an italic `b` in the middle of the URL.
pub fn text_to_spans_with(text: &str, rules: &[DelimiterRule]) -> Result<Vec<Span>, InlineError> {
    let mut spans = vec![Span::plain(text)];
    for rule in rules {
        spans = split_delimiter(&spans, &rule.marker, rule.style)?;
        log::debug!("after {:?} pass: {} spans", rule.marker, spans.len());
    }
    let spans = split_links(&split_images(&spans));
    log::debug!("tokenized into {} spans", spans.len());
    Ok(spans)
}
