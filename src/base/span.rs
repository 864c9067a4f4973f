//! Source positions: byte ranges and line/column conversion.

use std::fmt;

pub use text_size::{TextRange, TextSize};

/// A zero-based line and column, as editors address positions.
///
/// Columns count bytes within the line. Display is one-based.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl LineCol {
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

impl fmt::Debug for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

/// Line start table for one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let starts = std::iter::once(TextSize::from(0))
            .chain(
                text.match_indices('\n')
                    .map(|(at, _)| TextSize::from(at as u32 + 1)),
            )
            .collect();
        Self {
            starts,
            len: TextSize::of(text),
        }
    }

    /// Position of `offset`. Offsets past the end clamp to the end of the text.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(self.len);
        let line = self.starts.partition_point(|&s| s <= offset) - 1;
        LineCol::new(line as u32, u32::from(offset - self.starts[line]))
    }

    /// Byte offset of `pos`, or `None` when it lies outside its line.
    ///
    /// The newline ending a line is its last addressable column.
    pub fn offset(&self, pos: LineCol) -> Option<TextSize> {
        let line = pos.line as usize;
        let start = *self.starts.get(line)?;
        let end = self
            .starts
            .get(line + 1)
            .map_or(self.len, |&next| next - TextSize::from(1));
        let offset = TextSize::from(u32::from(start).checked_add(pos.col)?);
        (offset <= end).then_some(offset)
    }

    /// Start and end positions of `range`.
    pub fn line_range(&self, range: TextRange) -> (LineCol, LineCol) {
        (self.line_col(range.start()), self.line_col(range.end()))
    }

    pub fn line_count(&self) -> usize {
        self.starts.len()
    }
}
