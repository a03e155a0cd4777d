use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::lexer::keywords::{JAVASCRIPT_KEYWORDS, KeywordSet, PYTHON_KEYWORDS};

/// Languages the tokenizer knows how to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Editors open unrecognized files as Python.
    #[default]
    Python,
    JavaScript,
    Html,
    Css,
    PlainText,
}

impl Language {
    /// Resolve a language id case-insensitively. Unrecognized ids fall back
    /// to plain text rather than failing.
    pub fn from_id(id: &str) -> Self {
        match id.to_ascii_lowercase().as_str() {
            "python" => Language::Python,
            "javascript" | "js" => Language::JavaScript,
            "html" => Language::Html,
            "css" => Language::Css,
            _ => Language::PlainText,
        }
    }

    /// Map a file extension (with or without the leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        match ext.to_ascii_lowercase().as_str() {
            "py" => Some(Language::Python),
            "js" => Some(Language::JavaScript),
            "html" => Some(Language::Html),
            "css" => Some(Language::Css),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Canonical id; `Language::from_id(lang.id()) == lang`.
    pub fn id(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Html => "html",
            Language::Css => "css",
            Language::PlainText => "plaintext",
        }
    }

    /// Label shown in an editor's language-mode indicator.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::PlainText => "Plain Text",
        }
    }

    /// Reserved words for the code-like scanners. Markup and stylesheet
    /// languages have none.
    pub fn keywords(self) -> &'static KeywordSet {
        match self {
            Language::Python => &PYTHON_KEYWORDS,
            Language::JavaScript => &JAVASCRIPT_KEYWORDS,
            Language::Html | Language::Css | Language::PlainText => &KeywordSet::EMPTY,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_case_insensitively() {
        assert_eq!(Language::from_id("PYTHON"), Language::Python);
        assert_eq!(Language::from_id("Js"), Language::JavaScript);
        assert_eq!(Language::from_id("JavaScript"), Language::JavaScript);
        assert_eq!(Language::from_id("HTML"), Language::Html);
        assert_eq!(Language::from_id("css"), Language::Css);
    }

    #[test]
    fn unknown_ids_fall_back_to_plain_text() {
        assert_eq!(Language::from_id("cobol"), Language::PlainText);
        assert_eq!(Language::from_id(""), Language::PlainText);
        assert_eq!(Language::from_id(" python"), Language::PlainText);
    }

    #[test]
    fn ids_round_trip() {
        for lang in [
            Language::Python,
            Language::JavaScript,
            Language::Html,
            Language::Css,
            Language::PlainText,
        ] {
            assert_eq!(Language::from_id(lang.id()), lang);
        }
    }

    #[test]
    fn extensions_map_to_languages() {
        assert_eq!(Language::from_extension("py"), Some(Language::Python));
        assert_eq!(Language::from_extension(".js"), Some(Language::JavaScript));
        assert_eq!(Language::from_extension("HTML"), Some(Language::Html));
        assert_eq!(Language::from_extension("rs"), None);
        assert_eq!(
            Language::from_path(Path::new("static/site.css")),
            Some(Language::Css)
        );
        assert_eq!(Language::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn display_names_follow_editor_labels() {
        assert_eq!(Language::Html.to_string(), "HTML");
        assert_eq!(Language::PlainText.display_name(), "Plain Text");
        assert_eq!(Language::default(), Language::Python);
    }

    #[test]
    fn only_code_languages_have_keywords() {
        assert!(Language::Python.keywords().contains("lambda"));
        assert!(Language::JavaScript.keywords().contains("typeof"));
        assert!(!Language::JavaScript.keywords().contains("lambda"));
        assert!(Language::Css.keywords().is_empty());
    }
}
