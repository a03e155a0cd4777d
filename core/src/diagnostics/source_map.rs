/// A 1-based line and column. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePos {
    pub line: usize,
    pub col: usize,
}

/// Maps byte offsets back to line/column positions.
#[derive(Debug, Clone)]
pub struct SourceMap<'src> {
    source: &'src str,
    line_offsets: Vec<usize>,
}

impl<'src> SourceMap<'src> {
    pub fn from_source(source: &'src str) -> Self {
        let mut line_offsets = vec![0];
        line_offsets.extend(
            source
                .char_indices()
                .filter(|&(_, ch)| ch == '\n')
                .map(|(idx, _)| idx + 1),
        );
        Self {
            source,
            line_offsets,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    /// Offsets past the end clamp to the end of the source.
    pub fn byte_to_pos(&self, byte: usize) -> SourcePos {
        let byte = byte.min(self.source.len());
        let line_idx = match self.line_offsets.binary_search(&byte) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let line_start = self.line_offsets.get(line_idx).copied().unwrap_or(0);
        let col = self
            .source
            .get(line_start..byte)
            .map_or(byte - line_start, |prefix| prefix.chars().count());
        SourcePos {
            line: line_idx + 1,
            col: col + 1,
        }
    }

    /// Text of a 1-based line without its trailing newline.
    pub fn line_text(&self, line: usize) -> Option<&'src str> {
        let start = *self.line_offsets.get(line.checked_sub(1)?)?;
        let end = self
            .line_offsets
            .get(line)
            .map_or(self.source.len(), |next| next - 1);
        self.source.get(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_offsets_to_lines_and_columns() {
        let map = SourceMap::from_source("ab\ncd\n");
        assert_eq!(map.line_count(), 3);
        assert_eq!(map.byte_to_pos(0), SourcePos { line: 1, col: 1 });
        assert_eq!(map.byte_to_pos(2), SourcePos { line: 1, col: 3 });
        assert_eq!(map.byte_to_pos(3), SourcePos { line: 2, col: 1 });
        assert_eq!(map.byte_to_pos(99), SourcePos { line: 3, col: 1 });
    }

    #[test]
    fn columns_count_characters() {
        let map = SourceMap::from_source("é = 1");
        assert_eq!(map.byte_to_pos(3), SourcePos { line: 1, col: 3 });
    }

    #[test]
    fn line_text_strips_newline() {
        let map = SourceMap::from_source("first\nsecond");
        assert_eq!(map.line_text(1), Some("first"));
        assert_eq!(map.line_text(2), Some("second"));
        assert_eq!(map.line_text(0), None);
        assert_eq!(map.line_text(3), None);
    }
}
