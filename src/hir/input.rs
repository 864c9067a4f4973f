//! The set of real source files known to the host.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::base::{FileId, LineIndex};

/// Path and line table of one source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub path: Arc<str>,
    pub line_index: LineIndex,
}

/// Map from [`FileId`] to the file behind it.
///
/// Generated code is never registered here, so a location in a file that is
/// absent from the root cannot be rendered for the editor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceRoot {
    files: IndexMap<FileId, SourceFile>,
}

impl SourceRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a file and index its lines.
    pub fn insert(&mut self, file: FileId, path: impl Into<Arc<str>>, text: &str) {
        self.files.insert(
            file,
            SourceFile {
                path: path.into(),
                line_index: LineIndex::new(text),
            },
        );
    }

    pub fn remove(&mut self, file: FileId) -> Option<SourceFile> {
        self.files.shift_remove(&file)
    }

    pub fn get(&self, file: FileId) -> Option<&SourceFile> {
        self.files.get(&file)
    }

    pub fn path(&self, file: FileId) -> Option<&str> {
        self.get(file).map(|f| f.path.as_ref())
    }

    /// The id registered for `path`, if any.
    pub fn file_for_path(&self, path: &str) -> Option<FileId> {
        self.files
            .iter()
            .find(|(_, f)| f.path.as_ref() == path)
            .map(|(&id, _)| id)
    }

    /// Whether `file` is a registered, real file.
    pub fn contains(&self, file: FileId) -> bool {
        file.exists() && self.files.contains_key(&file)
    }

    /// Registered files in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (FileId, &SourceFile)> + '_ {
        self.files.iter().map(|(&id, f)| (id, f))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
