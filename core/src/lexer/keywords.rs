/// A fixed vocabulary of reserved words.
#[derive(Debug, Clone, Copy)]
pub struct KeywordSet {
    words: &'static [&'static str],
}

impl KeywordSet {
    /// Used for plain text: every word scans as an identifier.
    pub const EMPTY: KeywordSet = KeywordSet::new(&[]);

    pub const fn new(words: &'static [&'static str]) -> Self {
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

pub static PYTHON_KEYWORDS: KeywordSet = KeywordSet::new(&[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
]);

pub static JAVASCRIPT_KEYWORDS: KeywordSet = KeywordSet::new(&[
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "export",
    "extends",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "new",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
    "let",
    "static",
    "enum",
    "await",
    "async",
    "true",
    "false",
    "null",
    "undefined",
]);

/// Property names that classify as `property` inside a rule block. Any other
/// name in that position is `unknown`.
pub static CSS_PROPERTIES: KeywordSet = KeywordSet::new(&[
    "color",
    "background",
    "margin",
    "padding",
    "border",
    "font-size",
    "font-family",
    "display",
    "position",
    "width",
    "height",
    "top",
    "right",
    "bottom",
    "left",
    "flex",
    "grid",
    "transition",
    "transform",
    "animation",
    "box-shadow",
    "text-align",
    "line-height",
    "opacity",
]);
