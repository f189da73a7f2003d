use super::{
    extract::{extract_markdown_images, extract_markdown_links},
    kinds::{Image, Link},
    types::Span,
};

/// Splits plain spans around markdown images into plain and image spans.
///
/// Spans that are not plain, or contain no image, are passed through.
pub fn split_images(spans: &[Span]) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span.clone());
            continue;
        }
        let images = extract_markdown_images(&span.content);
        if images.is_empty() {
            out.push(span.clone());
            continue;
        }

        let mut rest = span.content.as_str();
        for (alt, url) in images {
            let token = Image::token(alt, url);
            let Some(at) = rest.find(&token) else {
                continue;
            };
            log::trace!("image {alt:?} at byte {at} -> {url:?}");
            push_plain(&mut out, &rest[..at]);
            out.push(Span::image(alt, url));
            rest = &rest[at + token.len()..];
        }
        push_plain(&mut out, rest);
    }
    out
}

/// Splits plain spans around markdown links into plain and link spans.
///
/// Image syntax is left alone: a `[label](url)` directly after `!` is never
/// taken as a link, so this pass is correct before or after [`split_images`].
pub fn split_links(spans: &[Span]) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span.clone());
            continue;
        }
        let links = extract_markdown_links(&span.content);
        if links.is_empty() {
            out.push(span.clone());
            continue;
        }

        let mut rest = span.content.as_str();
        for (label, url) in links {
            let token = Link::token(label, url);
            let Some(at) = find_link_token(rest, &token) else {
                continue;
            };
            log::trace!("link {label:?} at byte {at} -> {url:?}");
            push_plain(&mut out, &rest[..at]);
            out.push(Span::link(label, url));
            rest = &rest[at + token.len()..];
        }
        push_plain(&mut out, rest);
    }
    out
}

/// Finds the first occurrence of `token` in `haystack` that is not the tail
/// of an image.
fn find_link_token(haystack: &str, token: &str) -> Option<usize> {
    haystack
        .match_indices(token)
        .map(|(at, _)| at)
        .find(|&at| at == 0 || haystack.as_bytes()[at - 1] != Image::BANG)
}

fn push_plain(out: &mut Vec<Span>, text: &str) {
    if !text.is_empty() {
        out.push(Span::plain(text));
    }
}
