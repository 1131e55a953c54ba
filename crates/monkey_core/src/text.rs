//! Source location types.
//!
//! Tokens and diagnostics carry a [`TextSpan`] pointing back into the text
//! they were scanned from. [`LineMap`] turns those byte offsets into
//! line/column pairs for display.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// A position in source text, measured as a byte offset from the start.
pub type TextPos = usize;

/// A span in source text, defined by a start position and a length in bytes.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Serialize)]
pub struct TextSpan {
    /// The byte offset where this span starts.
    pub start: TextPos,
    /// The length of this span in bytes.
    pub length: TextPos,
}

impl TextSpan {
    /// Create a new text span.
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    /// Create a span from start and end positions.
    #[inline]
    pub fn from_bounds(start: TextPos, end: TextPos) -> Self {
        debug_assert!(end >= start);
        Self {
            start,
            length: end - start,
        }
    }

    /// Create an empty span at a position.
    #[inline]
    pub fn empty(pos: TextPos) -> Self {
        Self {
            start: pos,
            length: 0,
        }
    }

    /// The end position of this span (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Convert to a byte range, suitable for slicing the source text.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

/// Line and column of a byte offset.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LineAndColumn {
    /// 0-based line number.
    pub line: usize,
    /// 0-based column, in bytes from the start of the line.
    pub character: usize,
}

impl LineAndColumn {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// Displays as 1-based `line:column`, the way editors show positions.
impl fmt::Display for LineAndColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.character + 1)
    }
}

/// A map from byte offsets to line numbers, built from source text.
#[derive(Debug, Clone)]
pub struct LineMap {
    /// Byte offsets of the start of each line.
    line_starts: Vec<TextPos>,
}

impl LineMap {
    /// Build a line map from source text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Get the line number (0-based) for a byte offset.
    pub fn line_of(&self, pos: TextPos) -> usize {
        match self.line_starts.binary_search(&pos) {
            Ok(line) => line,
            Err(line) => line - 1,
        }
    }

    /// Get the line and column for a byte offset.
    pub fn line_and_column_of(&self, pos: TextPos) -> LineAndColumn {
        let line = self.line_of(pos);
        let line_start = self.line_starts[line];
        LineAndColumn {
            line,
            character: pos - line_start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_span() {
        let span = TextSpan::new(5, 10);
        assert_eq!(span.start, 5);
        assert_eq!(span.length, 10);
        assert_eq!(span.end(), 15);
        assert_eq!(span.to_range(), 5..15);
    }

    #[test]
    fn test_text_span_from_bounds() {
        let span = TextSpan::from_bounds(5, 15);
        assert_eq!(span.start, 5);
        assert_eq!(span.length, 10);
        assert_eq!(format!("{}", span), "5..15");
    }

    #[test]
    fn test_empty_span() {
        let span = TextSpan::empty(7);
        assert!(span.is_empty());
        assert_eq!(span.end(), 7);
    }

    #[test]
    fn test_line_map() {
        let text = "let a = 1;\nlet b = 2;\n@";
        let map = LineMap::new(text);
        assert_eq!(map.line_of(0), 0);
        assert_eq!(map.line_of(10), 0); // newline char
        assert_eq!(map.line_of(11), 1);
        assert_eq!(map.line_of(22), 2);

        let lc = map.line_and_column_of(15);
        assert_eq!(lc, LineAndColumn::new(1, 4));
        assert_eq!(lc.to_string(), "2:5");
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_offsets_past_u32_range() {
        let start = u32::MAX as usize + 1;
        let span = TextSpan::from_bounds(start, start + 3);
        assert_eq!(span.length, 3);
        assert_eq!(span.to_range(), start..start + 3);

        let map = LineMap::new("a\nb");
        assert_eq!(map.line_and_column_of(start), LineAndColumn::new(1, start - 2));
    }
}
