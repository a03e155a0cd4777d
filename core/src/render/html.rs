use std::borrow::Cow;

use super::RenderOptions;
use crate::lexer::token::Token;

/// One `<span>` per token, classed by kind, with the value escaped.
pub fn render(tokens: &[Token<'_>], options: &RenderOptions) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.value.len() + 32).sum());
    for token in tokens {
        out.push_str(&format!(
            "<span class=\"{}{}\">{}</span>",
            options.class_prefix,
            token.kind,
            escape(token.value)
        ));
    }
    out
}

/// Escape `&`, `<` and `>`. Borrows when there is nothing to escape.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::lexer::tokenize;

    #[test]
    fn escape_borrows_plain_text() {
        assert!(matches!(escape("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn escape_handles_ampersand_first() {
        assert_eq!(escape("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape("&lt;"), "&amp;lt;");
    }

    #[test]
    fn renders_one_span_per_token() {
        let tokens = tokenize("x<1", Language::JavaScript);
        let html = render(&tokens, &RenderOptions::default());
        assert_eq!(
            html,
            "<span class=\"token-identifier\">x</span>\
             <span class=\"token-operator\">&lt;</span>\
             <span class=\"token-number\">1</span>"
        );
    }

    #[test]
    fn uses_configured_class_prefix() {
        let tokens = tokenize("<b>", Language::Html);
        let options = RenderOptions {
            class_prefix: "hl-".to_string(),
        };
        assert_eq!(
            render(&tokens, &options),
            "<span class=\"hl-tag\">&lt;b&gt;</span>"
        );
    }
}
