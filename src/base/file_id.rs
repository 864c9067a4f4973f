//! File identifiers for tracking source files.

use std::fmt;

/// An interned identifier for a source file.
///
/// `FileId` is a 4-byte handle; the path lives in [`SourceRoot`](crate::hir::SourceRoot).
/// [`FileId::DETACHED`] marks locations synthesized by the type checker for
/// generated code that has no file on disk.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FileId(pub u32);

impl FileId {
    /// Sentinel for code that is not backed by a real file.
    pub const DETACHED: FileId = FileId(u32::MAX);

    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Whether this id names a real file.
    #[inline]
    pub const fn exists(self) -> bool {
        self.0 != Self::DETACHED.0
    }
}

impl fmt::Debug for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exists() {
            write!(f, "FileId({})", self.0)
        } else {
            f.write_str("FileId(<detached>)")
        }
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file#{}", self.0)
    }
}

impl From<u32> for FileId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}
