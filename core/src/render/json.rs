use crate::errors::GlintError;
use crate::lexer::token::Token;

/// Serialize tokens as a pretty-printed JSON array.
pub fn render(tokens: &[Token<'_>]) -> Result<String, GlintError> {
    Ok(serde_json::to_string_pretty(tokens)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::lexer::tokenize;

    #[test]
    fn emits_kind_value_and_span() {
        let tokens = tokenize("if", Language::JavaScript);
        let json: serde_json::Value =
            serde_json::from_str(&render(&tokens).expect("serialize")).expect("parse");
        assert_eq!(
            json,
            serde_json::json!([
                { "kind": "keyword", "value": "if", "span": { "start": 0, "end": 2 } }
            ])
        );
    }
}
