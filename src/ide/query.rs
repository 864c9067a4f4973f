//! The per-request predicate the walker tests nodes against.

use crate::base::Loc;
use crate::hir::SymbolRef;

/// What a request is asking about: a source position, an entity, or both.
///
/// With both set, a node matches when either test passes. That lets one
/// walk answer "what is under the cursor" and "where else is this entity"
/// together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Query {
    loc: Option<Loc>,
    symbol: Option<SymbolRef>,
}

impl Query {
    /// Match nodes whose location contains `loc` (usually a cursor).
    pub fn by_loc(loc: Loc) -> Self {
        Self {
            loc: Some(loc),
            symbol: None,
        }
    }

    /// Match nodes that resolve to `symbol`.
    pub fn by_symbol(symbol: SymbolRef) -> Self {
        Self {
            loc: None,
            symbol: Some(symbol),
        }
    }

    pub fn with_loc(mut self, loc: Loc) -> Self {
        self.loc = Some(loc);
        self
    }

    pub fn with_symbol(mut self, symbol: SymbolRef) -> Self {
        self.symbol = Some(symbol);
        self
    }

    pub fn loc(&self) -> Option<Loc> {
        self.loc
    }

    pub fn symbol(&self) -> Option<SymbolRef> {
        self.symbol
    }

    /// Whether neither a location nor a symbol is set. Such a query matches
    /// nothing.
    pub fn is_empty(&self) -> bool {
        self.loc.is_none() && self.symbol.is_none()
    }

    /// True iff `loc` contains the query's location.
    pub fn matches_loc(&self, loc: Loc) -> bool {
        self.loc.is_some_and(|target| loc.contains(&target))
    }

    /// True iff the query targets exactly `symbol`. Identity, not name.
    pub fn matches_symbol(&self, symbol: SymbolRef) -> bool {
        symbol.exists() && self.symbol == Some(symbol)
    }
}
