use super::keywords::PYTHON_KEYWORDS;
use super::scanner::Scanner;
use super::token::Token;

impl<'src> Scanner<'src> {
    /// Python rules are tried at every position: whitespace, `#` comments and
    /// single or triple quoted strings. Anything else goes through the shared
    /// rules with the Python keyword set, so `//` is floor division here.
    pub fn scan_python(mut self) -> Vec<Token<'src>> {
        while !self.cursor.is_at_end() {
            let matched = self.scan_whitespace()
                || self.scan_line_comment("#")
                || self.scan_triple_quoted_string()
                || self.scan_quoted_string();
            if !matched {
                self.scan_common(&PYTHON_KEYWORDS);
            }
        }
        self.finish()
    }
}
