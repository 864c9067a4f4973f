//! Faults that abort a query.
//!
//! Each one means the typed tree and the symbol table disagree. The request
//! is abandoned with no partial answer. Finding nothing is not an error and
//! never shows up here.

use thiserror::Error;

use crate::base::{Loc, Name};
use crate::hir::{AliasCycle, SymbolRef};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("method {method:?} has {nodes} argument node(s) but {declared} declared argument type(s)")]
    ArgumentCountMismatch {
        method: SymbolRef,
        nodes: usize,
        declared: usize,
    },

    #[error("instance variable {name:?} referenced outside of a method at {loc:?}")]
    InstanceVariableOutsideMethod { name: Name, loc: Loc },

    #[error(transparent)]
    AliasCycle(#[from] AliasCycle),

    #[error("symbol {0:?} is not in the symbol table")]
    UnknownSymbol(SymbolRef),
}
