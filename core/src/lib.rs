pub mod diagnostics;
pub mod errors;
pub mod language;
pub mod lexer;
pub mod render;

pub use language::Language;
pub use lexer::token::{Span, Token, TokenKind};

/// Tokenize `source` for the language named by `language_id`.
///
/// The id is matched case-insensitively against `python`, `javascript`/`js`,
/// `html` and `css`; anything else is scanned as plain text.
pub fn tokenize<'src>(source: &'src str, language_id: &str) -> Vec<Token<'src>> {
    lexer::tokenize(source, Language::from_id(language_id))
}
