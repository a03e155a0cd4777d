use glint::lexer::tokenize;
use glint::{Language, TokenKind};

fn tokens(source: &str) -> Vec<(TokenKind, &str)> {
    tokenize(source, Language::Html)
        .into_iter()
        .map(|t| (t.kind, t.value))
        .collect()
}

#[test]
fn lex_element_with_attributes() {
    assert_eq!(
        tokens("<div class=\"a\">hi</div>"),
        vec![
            (TokenKind::Tag, "<div class=\"a\">"),
            (TokenKind::Attribute, "hi"),
            (TokenKind::Tag, "</div>"),
        ]
    );
}

#[test]
fn lex_text_after_first_word() {
    assert_eq!(
        tokens("<p>Hi you</p>"),
        vec![
            (TokenKind::Tag, "<p>"),
            (TokenKind::Attribute, "Hi"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Text, "y"),
            (TokenKind::Text, "o"),
            (TokenKind::Text, "u"),
            (TokenKind::Tag, "</p>"),
        ]
    );
}

#[test]
fn lex_attribute_run_allows_hyphens_only() {
    assert_eq!(
        tokens("<br>data-x1"),
        vec![
            (TokenKind::Tag, "<br>"),
            (TokenKind::Attribute, "data-x"),
            (TokenKind::Text, "1"),
        ]
    );
}

#[test]
fn lex_whitespace_breaks_tag_adjacency() {
    assert_eq!(
        tokens("<br> x"),
        vec![
            (TokenKind::Tag, "<br>"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Text, "x"),
        ]
    );
}

#[test]
fn lex_quoted_angle_bracket_closes_tag_early() {
    assert_eq!(
        tokens("<a title=\"x>y\">z"),
        vec![
            (TokenKind::Tag, "<a title=\"x>"),
            (TokenKind::Attribute, "y"),
            (TokenKind::String, "\">z"),
        ]
    );
}

#[test]
fn lex_unterminated_tag_to_end() {
    assert_eq!(
        tokens("text <div class"),
        vec![
            (TokenKind::Text, "t"),
            (TokenKind::Text, "e"),
            (TokenKind::Text, "x"),
            (TokenKind::Text, "t"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Tag, "<div class"),
        ]
    );
}

#[test]
fn lex_strings_outside_tags() {
    assert_eq!(
        tokens("'a\\' b"),
        vec![
            (TokenKind::String, "'a\\'"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Text, "b"),
        ]
    );
}

#[test]
fn lex_comment_is_scanned_as_tag() {
    let tokens = tokens("<!-- a > b -->");
    assert_eq!(tokens[0], (TokenKind::Tag, "<!-- a >"));
    assert_eq!(tokens.last(), Some(&(TokenKind::Text, ">")));
}
