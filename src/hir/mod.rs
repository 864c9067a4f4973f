//! High-level IR: what the type checker hands to the query layer.
//!
//! - [`SymbolTable`] - arena of declared entities, read-only during queries
//! - [`Node`] - the fully resolved, typed syntax tree of one file
//! - [`Type`], [`TypeAndOrigins`] - static types and their justifying locations
//! - [`SourceRoot`] - which files are real and where they live

mod ids;
mod input;
mod symbols;
mod tree;
mod types;

pub use ids::{LocalVariable, SymbolRef};
pub use input::{SourceFile, SourceRoot};
pub use symbols::{AliasCycle, ArgInfo, SymbolData, SymbolKind, SymbolTable};
pub use tree::{
    Assign, Call, ClassDef, ConstantLit, IdentKind, Literal, LiteralValue, Local, MethodArg,
    MethodDef, Node, Seq, UnresolvedConstant, UnresolvedIdent,
};
pub use types::{Type, TypeAndOrigins};
