use super::scanner::Scanner;
use super::token::{Token, TokenKind};

impl<'src> Scanner<'src> {
    pub fn scan_html(mut self) -> Vec<Token<'src>> {
        while let Some(ch) = self.cursor.peek() {
            let start = self.cursor.pos();

            if ch == '<' {
                // Quotes are not tracked: a `>` inside an attribute value
                // closes the tag early.
                self.cursor.advance();
                self.cursor.eat_through(">");
                self.push(TokenKind::Tag, start);
                continue;
            }

            if is_attribute_char(ch) && self.follows_tag() {
                self.cursor.eat_while(is_attribute_char);
                self.push(TokenKind::Attribute, start);
                continue;
            }

            if self.scan_raw_string() || self.scan_whitespace() {
                continue;
            }

            self.cursor.advance();
            self.push(TokenKind::Text, start);
        }
        self.finish()
    }

    fn follows_tag(&self) -> bool {
        self.last_token()
            .is_some_and(|token| token.kind == TokenKind::Tag)
    }
}

fn is_attribute_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '-'
}
