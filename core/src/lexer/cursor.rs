/// Character-level reader over the source string.
///
/// The position is a byte offset that always sits on a `char` boundary, so any
/// slice taken between two positions is valid UTF-8.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    /// Current byte position in the source.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The unread remainder of the source.
    pub fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    /// Peek at the current character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance one character and return it.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Advance by `n` bytes. Callers only pass lengths of ASCII runs they have
    /// already matched.
    pub fn advance_by(&mut self, n: usize) {
        let target = self.pos.saturating_add(n).min(self.source.len());
        debug_assert!(self.source.is_char_boundary(target));
        self.pos = target;
    }

    /// Whether the unread remainder starts with `pat`.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// Advance while `pred` holds. Returns the number of bytes consumed.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        self.pos - start
    }

    /// Advance past the next occurrence of `pat`, inclusive. When `pat` never
    /// occurs the cursor moves to the end and `false` is returned.
    pub fn eat_through(&mut self, pat: &str) -> bool {
        match self.rest().find(pat) {
            Some(idx) => {
                self.pos += idx + pat.len();
                true
            }
            None => {
                self.pos = self.source.len();
                false
            }
        }
    }

    /// Return a slice of the source from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.pos]
    }

    /// Whether the cursor has reached the end.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }
}
