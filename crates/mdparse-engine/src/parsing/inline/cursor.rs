/// A cursor for character-by-character inline parsing.
///
/// Operates over a string slice by byte index; every movement keeps the index
/// on a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The unconsumed remainder.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The char `n` chars ahead of the current one.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// The char immediately before the cursor.
    pub fn prev(&self) -> Option<char> {
        self.s[..self.i].chars().next_back()
    }

    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// Advances by one char, returning it.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes. Callers pass lengths of matched ASCII or slices.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances while `pred` holds, returning the consumed slice.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.i;
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
        &self.s[start..self.i]
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
        assert_eq!(cur.peek(), Some('h'));
        assert_eq!(cur.bump(), Some('h'));
        assert_eq!(cur.pos(), 1);
        assert_eq!(cur.prev(), Some('h'));
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("**strong**");
        assert!(cur.starts_with("**"));
        assert!(!cur.starts_with("__"));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.prev(), None);
    }

    #[test]
    fn multibyte_chars_advance_whole() {
        let mut cur = Cursor::new("éa");
        assert_eq!(cur.bump(), Some('é'));
        assert_eq!(cur.pos(), 2);
        assert_eq!(cur.peek(), Some('a'));
        assert_eq!(cur.prev(), Some('é'));
    }

    #[test]
    fn peek_nth_and_eat_while() {
        let mut cur = Cursor::new("```code");
        assert_eq!(cur.peek_nth(3), Some('c'));
        assert_eq!(cur.eat_while(|c| c == '`'), "```");
        assert_eq!(cur.rest(), "code");
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some('x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }
}
