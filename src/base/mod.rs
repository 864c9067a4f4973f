//! Foundation types shared by the symbol table, the typed tree and the IDE layer:
//! - [`FileId`] - file handles, with a sentinel for generated code
//! - [`Loc`] - file-qualified byte ranges
//! - [`LineCol`], [`LineIndex`] - editor position conversion
//! - [`Name`], [`Interner`] - identifier interning
//!
//! Nothing in here depends on other strata modules.

mod file_id;
mod intern;
mod loc;
mod span;

pub use file_id::FileId;
pub use intern::{Interner, Name};
pub use loc::Loc;
pub use span::{LineCol, LineIndex, TextRange, TextSize};

pub use text_size;
