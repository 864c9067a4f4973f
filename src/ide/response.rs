//! Typed answers produced while walking a tree for a [`Query`](super::Query).

use crate::base::{Loc, Name};
use crate::hir::{LocalVariable, SymbolRef, Type, TypeAndOrigins};

/// A method's own declaration matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefinitionResponse {
    pub symbol: SymbolRef,
    pub term_loc: Loc,
    pub name: Name,
    pub ret_type: TypeAndOrigins,
}

/// A formal argument binding matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentResponse {
    pub term_loc: Loc,
    pub variable: LocalVariable,
    pub ret_type: TypeAndOrigins,
    pub enclosing_method: SymbolRef,
}

/// An instance or class variable access matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldResponse {
    pub symbol: SymbolRef,
    pub term_loc: Loc,
    pub name: Name,
    pub ret_type: TypeAndOrigins,
}

/// One segment of a constant reference matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstantResponse {
    pub symbol: SymbolRef,
    pub term_loc: Loc,
    pub name: Name,
    pub ret_type: TypeAndOrigins,
}

/// One possible implementation a call may dispatch to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchComponent {
    pub receiver: Type,
    /// [`SymbolRef::NONE`] when the receiver was too dynamic to pick a method.
    pub method: SymbolRef,
}

/// A call site matched. Produced by the call-dispatch pass, not by the
/// walker in this crate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchResponse {
    pub term_loc: Loc,
    pub components: Vec<DispatchComponent>,
    pub ret_type: TypeAndOrigins,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryResponse {
    Definition(DefinitionResponse),
    Ident(IdentResponse),
    Field(FieldResponse),
    Constant(ConstantResponse),
    Dispatch(DispatchResponse),
}

impl QueryResponse {
    /// The source span the match happened on.
    pub fn term_loc(&self) -> Loc {
        match self {
            QueryResponse::Definition(r) => r.term_loc,
            QueryResponse::Ident(r) => r.term_loc,
            QueryResponse::Field(r) => r.term_loc,
            QueryResponse::Constant(r) => r.term_loc,
            QueryResponse::Dispatch(r) => r.term_loc,
        }
    }

    pub fn ret_type(&self) -> &TypeAndOrigins {
        match self {
            QueryResponse::Definition(r) => &r.ret_type,
            QueryResponse::Ident(r) => &r.ret_type,
            QueryResponse::Field(r) => &r.ret_type,
            QueryResponse::Constant(r) => &r.ret_type,
            QueryResponse::Dispatch(r) => &r.ret_type,
        }
    }

    /// The entity this response is about. `Ident` responses are about a
    /// local, and `Dispatch` responses about a call, so neither has one.
    pub fn symbol(&self) -> Option<SymbolRef> {
        match self {
            QueryResponse::Definition(r) => Some(r.symbol),
            QueryResponse::Field(r) => Some(r.symbol),
            QueryResponse::Constant(r) => Some(r.symbol),
            QueryResponse::Ident(_) | QueryResponse::Dispatch(_) => None,
        }
    }

    pub fn as_ident(&self) -> Option<&IdentResponse> {
        match self {
            QueryResponse::Ident(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_definition(&self) -> Option<&DefinitionResponse> {
        match self {
            QueryResponse::Definition(r) => Some(r),
            _ => None,
        }
    }
}

/// Append-only, ordered collection of the responses for one request.
///
/// Order is visitation order; nothing is sorted or deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryResponses {
    responses: Vec<QueryResponse>,
}

impl QueryResponses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, response: QueryResponse) {
        tracing::trace!("query response #{}: {:?}", self.responses.len(), response);
        self.responses.push(response);
    }

    pub fn first(&self) -> Option<&QueryResponse> {
        self.responses.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QueryResponse> {
        self.responses.iter()
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

impl IntoIterator for QueryResponses {
    type Item = QueryResponse;
    type IntoIter = std::vec::IntoIter<QueryResponse>;

    fn into_iter(self) -> Self::IntoIter {
        self.responses.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryResponses {
    type Item = &'a QueryResponse;
    type IntoIter = std::slice::Iter<'a, QueryResponse>;

    fn into_iter(self) -> Self::IntoIter {
        self.responses.iter()
    }
}
