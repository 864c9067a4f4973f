//! # strata-base
//!
//! Query resolution for the language server of a gradual type checker:
//! goto-definition, find-references and hover, answered over the fully
//! typed trees and symbol table the checker produces.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide     → queries, the resolution walk, editor features
//!   ↓
//! hir     → symbol table, typed tree, types, source root
//!   ↓
//! base    → primitives (FileId, Loc, LineIndex, Name interning)
//! ```

/// Foundation types: FileId, Loc, line/column conversion, Name interning
pub mod base;

/// High-level IR: the checker's symbol table and typed trees
pub mod hir;

/// IDE features: goto-definition, hover, find-references
pub mod ide;

// Re-export commonly needed items
pub use base::{FileId, Interner, LineCol, LineIndex, Loc, Name, TextRange, TextSize};
pub use hir::{Node, SymbolRef, SymbolTable};
pub use ide::{Analysis, AnalysisHost, Query, QueryError, QueryResponse, QueryResponses};
