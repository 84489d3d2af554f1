/// A byte cursor for left-to-right inline scanning.
///
/// All delimiters are ASCII, so every index the scanners stop at is a char
/// boundary and can be used to slice `s`.
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

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances until `target` is under the cursor.
    ///
    /// Stops without consuming at a line terminator or end of input and
    /// returns false; delimited constructs never span lines.
    pub fn seek(&mut self, target: u8) -> bool {
        while let Some(b) = self.peek() {
            if b == target {
                return true;
            }
            if matches!(b, b'\n' | b'\r') {
                return false;
            }
            self.i += 1;
        }
        false
    }

    /// Advances past a run of `b`, returning how many bytes were skipped.
    pub fn skip_run(&mut self, b: u8) -> usize {
        let start = self.i;
        while self.peek() == Some(b) {
            self.i += 1;
        }
        self.i - start
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
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn seek_finds_target() {
        let mut cur = Cursor::new("abc*def");
        assert!(cur.seek(b'*'));
        assert_eq!(cur.pos(), 3);
        assert_eq!(cur.peek(), Some(b'*'));
    }

    #[test]
    fn seek_stops_at_line_terminator() {
        let mut cur = Cursor::new("ab\ncd*");
        assert!(!cur.seek(b'*'));
        assert_eq!(cur.pos(), 2);
    }

    #[test]
    fn seek_missing_target_ends_at_eof() {
        let mut cur = Cursor::new("abc");
        assert!(!cur.seek(b'*'));
        assert!(cur.eof());
    }

    #[test]
    fn skip_run_counts_bytes() {
        let mut cur = Cursor::new(")))[");
        assert_eq!(cur.skip_run(b')'), 3);
        assert_eq!(cur.peek(), Some(b'['));
        assert_eq!(cur.skip_run(b')'), 0);
    }
}
