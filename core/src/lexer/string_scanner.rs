use super::scanner::Scanner;
use super::token::TokenKind;

impl Scanner<'_> {
    /// A `"` or `'` string where a backslash escapes the next character.
    pub(super) fn scan_quoted_string(&mut self) -> bool {
        match self.cursor.peek() {
            Some(quote @ ('"' | '\'')) => {
                let start = self.cursor.pos();
                self.cursor.advance();
                self.eat_string_body(quote, true);
                self.push(TokenKind::String, start);
                true
            }
            _ => false,
        }
    }

    /// A quoted string with no escape handling, as found in markup attributes.
    pub(super) fn scan_raw_string(&mut self) -> bool {
        match self.cursor.peek() {
            Some(quote @ ('"' | '\'')) => {
                let start = self.cursor.pos();
                self.cursor.advance();
                self.eat_string_body(quote, false);
                self.push(TokenKind::String, start);
                true
            }
            _ => false,
        }
    }

    /// `"""..."""` or `'''...'''`. Escapes are not interpreted; the string
    /// ends at the first closing triple.
    pub(super) fn scan_triple_quoted_string(&mut self) -> bool {
        let delimiter = if self.cursor.starts_with("\"\"\"") {
            "\"\"\""
        } else if self.cursor.starts_with("'''") {
            "'''"
        } else {
            return false;
        };

        let start = self.cursor.pos();
        self.cursor.advance_by(delimiter.len());
        self.cursor.eat_through(delimiter);
        self.push(TokenKind::String, start);
        true
    }

    /// Consume up to and including the closing `quote`, or to end of input.
    fn eat_string_body(&mut self, quote: char, escapes: bool) {
        let mut escaped = false;
        while let Some(c) = self.cursor.advance() {
            if escaped {
                escaped = false;
            } else if c == '\\' && escapes {
                escaped = true;
            } else if c == quote {
                return;
            }
        }
    }
}
