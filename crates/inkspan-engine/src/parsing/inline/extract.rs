use super::{
    cursor::Cursor,
    kinds::{Image, Link},
};

/// Finds every markdown image `![alt](url)` in `text`, left to right.
///
/// Returns `(alt, url)` pairs borrowed from `text`. The alt text may be
/// empty; the URL may not.
pub fn extract_markdown_images(text: &str) -> Vec<(&str, &str)> {
    scan(text, try_parse_image)
}

/// Finds every markdown link `[label](url)` in `text`, left to right.
///
/// A `[` directly after `!` opens an image, not a link, so images are never
/// reported here.
pub fn extract_markdown_links(text: &str) -> Vec<(&str, &str)> {
    scan(text, try_parse_link)
}

fn scan<'a>(
    text: &'a str,
    try_parse: fn(&mut Cursor<'a>) -> Option<(&'a str, &'a str)>,
) -> Vec<(&'a str, &'a str)> {
    let mut cur = Cursor::new(text);
    let mut out = vec![];

    while !cur.eof() {
        if let Some(pair) = try_parse(&mut cur) {
            out.push(pair);
            continue;
        }
        cur.bump();
    }

    out
}

/// Attempts to parse `![alt](url)` at the current position.
///
/// On failure, cursor position is restored.
fn try_parse_image<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
    if cur.peek() != Some(Image::BANG) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // !
    let pair = try_parse_label_and_url(cur);
    if pair.is_none() {
        *cur = saved;
    }
    pair
}

/// Attempts to parse `[label](url)` at the current position, refusing the
/// tail of an image.
fn try_parse_link<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
    if cur.prev() == Some(Image::BANG) {
        return None;
    }
    try_parse_label_and_url(cur)
}

/// Parses the `[label](url)` part shared by links and images.
///
/// The label runs to the first `]`, which must be followed directly by `(`.
/// The URL runs to the first `)` and must not be empty.
/// On failure, cursor position is restored.
fn try_parse_label_and_url<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
    if cur.peek() != Some(Link::LABEL_OPEN) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // [
    let label_start = cur.pos();

    if !cur.bump_until(Link::LABEL_CLOSE) {
        *cur = saved;
        return None;
    }
    let label_end = cur.pos();
    cur.bump(); // ]

    if cur.peek() != Some(Link::URL_OPEN) {
        *cur = saved;
        return None;
    }
    cur.bump(); // (
    let url_start = cur.pos();

    if !cur.bump_until(Link::URL_CLOSE) || cur.pos() == url_start {
        *cur = saved;
        return None;
    }
    let url_end = cur.pos();
    cur.bump(); // )

    Some((
        cur.slice(label_start, label_end),
        cur.slice(url_start, url_end),
    ))
}
