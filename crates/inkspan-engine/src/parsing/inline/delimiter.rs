use super::{
    error::InlineError,
    types::{DelimitedStyle, Span, SpanKind},
};

/// Splits plain spans on a paired `delimiter`, styling the enclosed text.
///
/// Text between an opening and closing delimiter becomes a `style` span, text
/// outside stays plain. Spans that are already styled are passed through
/// untouched, so a pass per style can be chained.
///
/// Empty pieces, such as the inside of `` `` `` or text before a leading
/// delimiter, produce no span.
///
/// # Errors
/// - [`InlineError::EmptyDelimiter`] if `delimiter` is empty.
/// - [`InlineError::UnclosedDelimiter`] if a span has an opening delimiter
///   with no matching close.
pub fn split_delimiter(
    spans: &[Span],
    delimiter: &str,
    style: DelimitedStyle,
) -> Result<Vec<Span>, InlineError> {
    if delimiter.is_empty() {
        return Err(InlineError::EmptyDelimiter);
    }

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span.clone());
            continue;
        }

        let parts: Vec<&str> = span.content.split(delimiter).collect();
        if parts.len() == 1 {
            out.push(span.clone());
            continue;
        }
        // Parts alternate outside/inside, so an even count means the last
        // section was opened and never closed.
        if parts.len() % 2 == 0 {
            return Err(InlineError::UnclosedDelimiter {
                text: span.content.clone(),
                delimiter: delimiter.to_string(),
            });
        }

        log::trace!(
            "split {:?} on {delimiter:?} into {} parts",
            span.content,
            parts.len()
        );
        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let kind = if i % 2 == 0 {
                SpanKind::Plain
            } else {
                SpanKind::from(style)
            };
            out.push(Span::new(part, kind));
        }
    }

    Ok(out)
}
