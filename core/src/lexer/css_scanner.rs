use super::keywords::CSS_PROPERTIES;
use super::scanner::Scanner;
use super::token::{Token, TokenKind};

impl<'src> Scanner<'src> {
    pub fn scan_css(mut self) -> Vec<Token<'src>> {
        while let Some(ch) = self.cursor.peek() {
            let start = self.cursor.pos();

            // Checked before selectors, which would otherwise claim every
            // property name.
            if is_property_char(ch) && self.inside_block() {
                self.cursor.eat_while(is_property_char);
                let kind = if CSS_PROPERTIES.contains(self.cursor.slice_from(start)) {
                    TokenKind::Property
                } else {
                    TokenKind::Unknown
                };
                self.push(kind, start);
                continue;
            }

            if matches!(ch, '.' | '#' | '*') || ch.is_ascii_alphabetic() {
                self.cursor.advance();
                self.cursor.eat_while(|c| c != '{' && !c.is_whitespace());
                self.push(TokenKind::Selector, start);
                continue;
            }

            if ch == ':' {
                self.cursor.advance();
                self.push(TokenKind::Operator, start);
                self.scan_css_value();
                continue;
            }

            if self.scan_block_comment() || self.scan_whitespace() {
                continue;
            }

            self.cursor.advance();
            self.push(TokenKind::Delimiter, start);
        }
        self.finish()
    }

    /// Everything up to the next `;`. The value token covers the trimmed text
    /// and the whitespace around it becomes separate tokens.
    fn scan_css_value(&mut self) {
        let start = self.cursor.pos();
        self.cursor.eat_while(|c| c != ';');
        let raw = self.cursor.slice_from(start);
        let end = self.cursor.pos();

        let value_start = start + (raw.len() - raw.trim_start().len());
        let value_end = value_start + raw.trim().len();

        if start < value_start {
            self.push_span(TokenKind::Whitespace, start, value_start);
        }
        if value_start < value_end {
            self.push_span(TokenKind::Value, value_start, value_end);
        }
        if value_end < end {
            self.push_span(TokenKind::Whitespace, value_end, end);
        }
    }

    /// Whether the last non-whitespace token contains a `{` anywhere in its
    /// text. This is a substring test, not brace-depth tracking.
    fn inside_block(&self) -> bool {
        self.last_significant_token()
            .is_some_and(|token| token.value.contains('{'))
    }
}

fn is_property_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '-'
}
