use std::fmt;

use serde::Serialize;

/// A single classified slice of the source.
///
/// `value` is exactly `&source[span.start..span.end]`; nothing is normalized
/// or unescaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub value: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, value: &'src str, span: Span) -> Self {
        Self { kind, value, span }
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }
}

/// Byte offset span in the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Whitespace,
    Comment,
    String,
    Number,
    Keyword,
    Identifier,
    Operator,
    Delimiter,
    Unknown,

    // Markup and stylesheet
    Tag,
    Attribute,
    Selector,
    Property,
    Value,
    Text,
}

impl TokenKind {
    /// Lower-case name, used for CSS class names and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Operator => "operator",
            TokenKind::Delimiter => "delimiter",
            TokenKind::Unknown => "unknown",
            TokenKind::Tag => "tag",
            TokenKind::Attribute => "attribute",
            TokenKind::Selector => "selector",
            TokenKind::Property => "property",
            TokenKind::Value => "value",
            TokenKind::Text => "text",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
