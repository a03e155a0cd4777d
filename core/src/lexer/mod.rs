pub mod cursor;
mod css_scanner;
mod html_scanner;
pub mod keywords;
mod number_ident_scanner;
mod punctuation;
mod python_scanner;
pub mod scanner;
mod string_scanner;
pub mod token;

use crate::language::Language;
use keywords::KeywordSet;
use scanner::Scanner;
use token::Token;

/// Tokenize source code for highlighting.
///
/// Never fails: unterminated strings, comments and tags widen to the end of
/// input, and unrecognized characters become single-character tokens. The
/// result always covers `source` exactly, in order.
pub fn tokenize(source: &str, language: Language) -> Vec<Token<'_>> {
    let scanner = Scanner::new(source);
    let tokens = match language {
        Language::Python => scanner.scan_python(),
        Language::JavaScript | Language::PlainText => scanner.scan_generic(language.keywords()),
        Language::Html => scanner.scan_html(),
        Language::Css => scanner.scan_css(),
    };
    tracing::debug!(
        language = language.id(),
        bytes = source.len(),
        tokens = tokens.len(),
        "tokenized source"
    );
    tokens
}

/// Run the generic scanner with an arbitrary keyword set.
pub fn scan_generic<'src>(source: &'src str, keywords: &KeywordSet) -> Vec<Token<'src>> {
    Scanner::new(source).scan_generic(keywords)
}
