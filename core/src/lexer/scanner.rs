use super::cursor::Cursor;
use super::keywords::KeywordSet;
use super::number_ident_scanner::is_ident_start;
use super::punctuation::{is_delimiter, operator_len};
use super::token::{Span, Token, TokenKind};

/// Scans source code into a contiguous sequence of tokens.
///
/// Every rule that matches consumes at least one character and pushes exactly
/// one token for it, so the scan always makes progress and the produced tokens
/// cover the whole input without gaps.
pub struct Scanner<'src> {
    pub(super) cursor: Cursor<'src>,
    source: &'src str,
    tokens: Vec<Token<'src>>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            source,
            tokens: Vec::new(),
        }
    }

    /// Generic scan used for JavaScript and plain text.
    pub fn scan_generic(mut self, keywords: &KeywordSet) -> Vec<Token<'src>> {
        while !self.cursor.is_at_end() {
            let matched = self.scan_whitespace()
                || self.scan_line_comment("//")
                || self.scan_block_comment()
                || self.scan_quoted_string();
            if !matched {
                self.scan_common(keywords);
            }
        }
        self.finish()
    }

    pub(super) fn finish(self) -> Vec<Token<'src>> {
        self.tokens
    }

    /// Rules shared by every code-like language once whitespace, comments and
    /// strings have been ruled out: numbers, words, operators, delimiters, and
    /// finally a single unknown character.
    pub(super) fn scan_common(&mut self, keywords: &KeywordSet) {
        let start = self.cursor.pos();
        let Some(ch) = self.cursor.peek() else {
            return;
        };

        if ch.is_ascii_digit() {
            self.scan_number(start);
        } else if is_ident_start(ch) {
            self.scan_word(start, keywords);
        } else if let Some(len) = operator_len(self.cursor.rest()) {
            self.cursor.advance_by(len);
            self.push(TokenKind::Operator, start);
        } else {
            self.cursor.advance();
            let kind = if is_delimiter(ch) {
                TokenKind::Delimiter
            } else {
                TokenKind::Unknown
            };
            self.push(kind, start);
        }
    }

    pub(super) fn scan_whitespace(&mut self) -> bool {
        let start = self.cursor.pos();
        if self.cursor.eat_while(char::is_whitespace) == 0 {
            return false;
        }
        self.push(TokenKind::Whitespace, start);
        true
    }

    /// Comment from `prefix` up to, not including, the next newline.
    pub(super) fn scan_line_comment(&mut self, prefix: &str) -> bool {
        if !self.cursor.starts_with(prefix) {
            return false;
        }
        let start = self.cursor.pos();
        self.cursor.eat_while(|c| c != '\n');
        self.push(TokenKind::Comment, start);
        true
    }

    /// `/* ... */`, running to the end of input when unterminated.
    pub(super) fn scan_block_comment(&mut self) -> bool {
        if !self.cursor.starts_with("/*") {
            return false;
        }
        let start = self.cursor.pos();
        self.cursor.advance_by(2);
        self.cursor.eat_through("*/");
        self.push(TokenKind::Comment, start);
        true
    }

    /// Push a token covering `start` up to the cursor.
    pub(super) fn push(&mut self, kind: TokenKind, start: usize) {
        let end = self.cursor.pos();
        self.push_span(kind, start, end);
    }

    pub(super) fn push_span(&mut self, kind: TokenKind, start: usize, end: usize) {
        debug_assert!(start < end, "empty {kind} token at {start}");
        debug_assert_eq!(self.tokens.last().map_or(0, Token::end), start);
        let value = &self.source[start..end];
        self.tokens.push(Token::new(kind, value, Span::new(start, end)));
    }

    pub(super) fn last_token(&self) -> Option<&Token<'src>> {
        self.tokens.last()
    }

    /// The most recent token that is not whitespace.
    pub(super) fn last_significant_token(&self) -> Option<&Token<'src>> {
        self.tokens
            .iter()
            .rev()
            .find(|token| token.kind != TokenKind::Whitespace)
    }
}
