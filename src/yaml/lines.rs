//! Line and column bookkeeping over a source text.
//!
//! All offsets in this crate are character indices, matching the positions
//! reported by the YAML parser. Byte positions only appear here, when a
//! character range has to be turned into a string slice.

/// Index of line starts and char-to-byte positions for one source text.
///
/// Lines are 0-based. A trailing newline opens a final empty line, so
/// `line_count()` is always at least 1.
pub struct LineIndex<'t> {
    text: &'t str,
    line_starts: Vec<usize>,
    char_to_byte: Vec<usize>,
}

impl<'t> LineIndex<'t> {
    pub fn new(text: &'t str) -> Self {
        let mut line_starts = vec![0];
        for (i, c) in text.chars().enumerate() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }
        let mut char_to_byte: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        char_to_byte.push(text.len());
        LineIndex {
            text,
            line_starts,
            char_to_byte,
        }
    }

    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.char_to_byte.len() - 1
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte position of a char offset, clamped to the end of the text.
    pub fn byte_of(&self, offset: usize) -> usize {
        if offset >= self.char_to_byte.len() {
            self.text.len()
        } else {
            self.char_to_byte[offset]
        }
    }

    /// Line containing the given char offset.
    pub fn line_of(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        }
    }

    /// Char offset of the first character of a line, or the end of the
    /// text when the line does not exist.
    pub fn line_start(&self, line: usize) -> usize {
        if line >= self.line_starts.len() {
            self.char_len()
        } else {
            self.line_starts[line]
        }
    }

    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = self.line_of(offset);
        (line, offset - self.line_start(line))
    }

    /// Char offset of `line`:`col`, with `col` clamped to the line end.
    pub fn offset_at(&self, line: usize, col: usize) -> usize {
        let start = self.line_start(line);
        let end = if line + 1 < self.line_starts.len() {
            self.line_starts[line + 1] - 1
        } else {
            self.char_len()
        };
        start + col.min(end - start)
    }

    /// Content of a line, without its newline.
    pub fn line_text(&self, line: usize) -> &'t str {
        let start = self.line_start(line);
        let end = if line + 1 < self.line_starts.len() {
            self.line_starts[line + 1] - 1
        } else {
            self.char_len()
        };
        self.slice(start, end)
    }

    /// Leading whitespace of a line.
    pub fn line_indent(&self, line: usize) -> &'t str {
        let text = self.line_text(line);
        let trimmed = text.trim_start_matches(|c: char| c == ' ' || c == '\t');
        &text[..text.len() - trimmed.len()]
    }

    /// Slice of the text between two char offsets.
    pub fn slice(&self, start: usize, end: usize) -> &'t str {
        &self.text[self.byte_of(start)..self.byte_of(end)]
    }
}
