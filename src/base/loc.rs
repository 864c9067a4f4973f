//! File-qualified source ranges.

use std::fmt;

use super::{FileId, TextRange, TextSize};

/// A half-open byte range inside one file.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Loc {
    pub file: FileId,
    pub range: TextRange,
}

impl Loc {
    #[inline]
    pub const fn new(file: FileId, range: TextRange) -> Self {
        Self { file, range }
    }

    /// Convenience constructor from raw offsets.
    pub fn from_offsets(file: FileId, start: u32, end: u32) -> Self {
        Self::new(file, TextRange::new(TextSize::from(start), TextSize::from(end)))
    }

    /// An empty range at `offset`, the shape of an editor cursor.
    pub fn point(file: FileId, offset: TextSize) -> Self {
        Self::new(file, TextRange::empty(offset))
    }

    /// A location synthesized for code with no backing file.
    pub fn detached() -> Self {
        Self::new(FileId::DETACHED, TextRange::default())
    }

    /// Whether the owning file exists.
    #[inline]
    pub const fn exists(&self) -> bool {
        self.file.exists()
    }

    /// Whether `other` lies entirely within `self`, both ends inclusive.
    ///
    /// A cursor placed right after the last character of a name still counts
    /// as being on that name.
    pub fn contains(&self, other: &Loc) -> bool {
        self.file == other.file && self.range.contains_range(other.range)
    }
}

impl fmt::Debug for Loc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:?}", self.file, self.range)
    }
}
