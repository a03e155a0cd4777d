use super::keywords::KeywordSet;
use super::scanner::Scanner;
use super::token::TokenKind;

impl Scanner<'_> {
    /// A run of digits and dots starting at a digit. `1.2.3` is one number;
    /// this only classifies text, it does not validate literals.
    pub(super) fn scan_number(&mut self, start: usize) {
        self.cursor.eat_while(|c| c.is_ascii_digit() || c == '.');
        self.push(TokenKind::Number, start);
    }

    pub(super) fn scan_word(&mut self, start: usize, keywords: &KeywordSet) {
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start);
        let kind = if keywords.contains(text) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.push(kind, start);
    }
}

pub(super) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}
