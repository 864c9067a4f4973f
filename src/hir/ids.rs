//! Entity identifiers.

use std::fmt;

use crate::base::Name;

/// Identity of a declared entity (class, module, method, field, constant).
///
/// An index into the [`SymbolTable`](super::SymbolTable) arena. Index 0 is
/// reserved for [`SymbolRef::NONE`], which never exists; every other id
/// handed out by the table names exactly one entity for the lifetime of the
/// table. Comparison is by identity, never by name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SymbolRef(pub(crate) u32);

impl SymbolRef {
    /// The "no symbol" sentinel.
    pub const NONE: SymbolRef = SymbolRef(0);

    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// False only for [`SymbolRef::NONE`]. Whether the id is actually in a
    /// given table is answered by [`SymbolTable::get`](super::SymbolTable::get).
    #[inline]
    pub const fn exists(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Debug for SymbolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exists() {
            write!(f, "SymbolRef({})", self.0)
        } else {
            f.write_str("SymbolRef(<none>)")
        }
    }
}

/// A method-local variable: its name plus a disambiguator for shadowed
/// bindings of the same name within one method.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct LocalVariable {
    pub name: Name,
    pub unique: u32,
}

impl LocalVariable {
    pub const fn new(name: Name, unique: u32) -> Self {
        Self { name, unique }
    }
}
