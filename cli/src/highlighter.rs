use std::borrow::Cow;

use glint::{Token, TokenKind};
use owo_colors::OwoColorize;

/// Paint a token's text for a terminal. Whitespace and plain text pass
/// through untouched.
pub fn paint<'a>(token: &Token<'a>) -> Cow<'a, str> {
    let text = token.value;
    let painted = match token.kind {
        TokenKind::Whitespace | TokenKind::Text => return Cow::Borrowed(text),
        TokenKind::Keyword => text.blue().bold().to_string(),
        TokenKind::String | TokenKind::Value => text.yellow().to_string(),
        TokenKind::Comment => text.bright_black().italic().to_string(),
        TokenKind::Number => text.bright_green().to_string(),
        TokenKind::Operator => text.magenta().to_string(),
        TokenKind::Delimiter => text.white().to_string(),
        TokenKind::Identifier | TokenKind::Attribute | TokenKind::Property => {
            text.bright_cyan().to_string()
        }
        TokenKind::Tag => text.blue().to_string(),
        TokenKind::Selector => text.bright_yellow().to_string(),
        TokenKind::Unknown => text.red().to_string(),
    };
    Cow::Owned(painted)
}

pub fn highlight(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(paint).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint::Language;

    #[test]
    fn whitespace_is_left_alone() {
        let tokens = glint::lexer::tokenize("  ", Language::JavaScript);
        assert!(matches!(paint(&tokens[0]), Cow::Borrowed("  ")));
    }

    #[test]
    fn keywords_are_colored() {
        let tokens = glint::lexer::tokenize("return", Language::JavaScript);
        let painted = paint(&tokens[0]);
        assert!(painted.contains("return"));
        assert_ne!(painted, "return");
    }

    #[test]
    fn highlight_keeps_every_token_text() {
        let source = "def f(): return 1";
        let tokens = glint::lexer::tokenize(source, Language::Python);
        let out = highlight(&tokens);
        for token in &tokens {
            assert!(out.contains(token.value));
        }
    }
}
