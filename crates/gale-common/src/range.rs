use serde::{Deserialize, Serialize};

/// A 1-based line/column position in the original Swift source.
///
/// The frontend records positions as the user sees them in an editor, so
/// both fields start at 1. Positions are carried through the lowered AST
/// purely for diagnostics; the emitter never inspects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePosition {
    pub line: u32,
    pub column: u32,
}

impl SourcePosition {
    /// Create a new position from 1-based line and column numbers.
    pub fn new(line: u32, column: u32) -> Self {
        debug_assert!(line >= 1 && column >= 1, "positions are 1-based");
        Self { line, column }
    }
}

/// A source range covering `start` (inclusive) to `end` (exclusive).
///
/// Every lowered AST node carries an optional range. Node equality ignores
/// ranges entirely, so two nodes produced from different source locations
/// still compare equal when they have the same shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRange {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl SourceRange {
    /// Create a new range from start and end positions.
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self { start, end }
    }

    /// Merge two ranges into one that covers both.
    pub fn merge(self, other: SourceRange) -> SourceRange {
        let start = if (self.start.line, self.start.column) <= (other.start.line, other.start.column)
        {
            self.start
        } else {
            other.start
        };
        let end = if (self.end.line, self.end.column) >= (other.end.line, other.end.column) {
            self.end
        } else {
            other.end
        };
        SourceRange { start, end }
    }
}

/// Pre-computed index of line start offsets for line/column-to-byte lookup.
///
/// Constructed once per source file when diagnostics need to be rendered
/// against the original source. The AST carries line/column pairs, but the
/// report renderer works on byte ranges, so this converts between the two.
#[derive(Debug)]
pub struct LineOffsets {
    /// Byte offset of the start of each line. The first entry is always 0.
    line_starts: Vec<usize>,
    /// Total length of the source in bytes.
    len: usize,
}

impl LineOffsets {
    /// Build a line offset table by scanning the source for newlines.
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0usize];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self {
            line_starts,
            len: source.len(),
        }
    }

    /// Convert a 1-based (line, column) pair to a byte offset, clamped to
    /// the source bounds. Columns are measured in bytes from line start.
    pub fn offset(&self, position: SourcePosition) -> usize {
        let line_idx = (position.line.saturating_sub(1)) as usize;
        let line_start = match self.line_starts.get(line_idx) {
            Some(&start) => start,
            None => return self.len,
        };
        let offset = line_start + (position.column.saturating_sub(1)) as usize;
        offset.min(self.len)
    }

    /// Convert a source range to a byte range, clamped to the source bounds.
    pub fn byte_range(&self, range: SourceRange) -> std::ops::Range<usize> {
        let start = self.offset(range.start);
        let end = self.offset(range.end).max(start);
        start..end
    }
}
