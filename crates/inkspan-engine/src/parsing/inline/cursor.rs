/// A byte cursor over inline text.
///
/// Every syntax byte the extractors look for is ASCII, so positions the
/// cursor stops on to slice are always on `char` boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// The byte just before the cursor, `None` at the start.
    pub fn prev(&self) -> Option<u8> {
        self.i
            .checked_sub(1)
            .and_then(|j| self.s.as_bytes().get(j).copied())
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances until `stop` is under the cursor or input ends.
    ///
    /// Returns true if `stop` was found.
    pub fn bump_until(&mut self, stop: u8) -> bool {
        while let Some(b) = self.peek() {
            if b == stop {
                return true;
            }
            self.i += 1;
        }
        false
    }

    /// Returns `s[start..end]`.
    ///
    /// Both bounds must sit next to ASCII bytes the cursor matched.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
        assert_eq!(cur.prev(), Some(b'h'));
    }

    #[test]
    fn prev_at_start_is_none() {
        let cur = Cursor::new("abc");
        assert_eq!(cur.prev(), None);
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn bump_until_stops_on_byte() {
        let mut cur = Cursor::new("label](url)");
        assert!(cur.bump_until(b']'));
        assert_eq!(cur.pos(), 5);
        assert_eq!(cur.slice(0, cur.pos()), "label");
    }

    #[test]
    fn bump_until_runs_to_eof_when_missing() {
        let mut cur = Cursor::new("no close");
        assert!(!cur.bump_until(b')'));
        assert!(cur.eof());
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn slices_around_multibyte_text() {
        let mut cur = Cursor::new("héllo](ü)");
        assert!(cur.bump_until(b']'));
        assert_eq!(cur.slice(0, cur.pos()), "héllo");
    }
}
