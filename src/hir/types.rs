//! Static types as recorded by the type checker.

use crate::base::Loc;

use super::ids::SymbolRef;

/// A resolved static type.
///
/// Only the shapes the query layer reports on are modelled; the checker's
/// richer type language collapses onto these.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    /// The dynamic type. `blame` is the entity whose missing signature
    /// produced it, or [`SymbolRef::NONE`].
    Untyped { blame: SymbolRef },
    /// An instance of a class. When the class is a singleton class this is
    /// the class object itself (`T.class_of(Foo)`).
    Class(SymbolRef),
    /// `nil`.
    Nil,
    /// `T.nilable(inner)`.
    Nilable(Box<Type>),
    /// `T.any(..)`, two or more members.
    Union(Vec<Type>),
}

impl Type {
    pub fn untyped() -> Self {
        Type::Untyped {
            blame: SymbolRef::NONE,
        }
    }

    /// The dynamic type, blamed on `symbol`.
    pub fn untyped_for(symbol: SymbolRef) -> Self {
        Type::Untyped { blame: symbol }
    }

    pub fn is_untyped(&self) -> bool {
        matches!(self, Type::Untyped { .. })
    }
}

/// A type together with the source locations that justify it, e.g. every
/// assignment that contributed to a variable's inferred type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeAndOrigins {
    pub ty: Type,
    pub origins: Vec<Loc>,
}

impl TypeAndOrigins {
    pub fn new(ty: Type, origin: Loc) -> Self {
        Self {
            ty,
            origins: vec![origin],
        }
    }

    pub fn with_origin(mut self, origin: Loc) -> Self {
        self.origins.push(origin);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::FileId;

    #[test]
    fn test_untyped_blame() {
        assert!(Type::untyped().is_untyped());
        assert_eq!(
            Type::untyped_for(SymbolRef(7)),
            Type::Untyped {
                blame: SymbolRef(7)
            }
        );
        assert!(!Type::Nil.is_untyped());
    }

    #[test]
    fn test_origins_keep_order() {
        let a = Loc::from_offsets(FileId::new(0), 0, 1);
        let b = Loc::from_offsets(FileId::new(0), 5, 6);
        let tp = TypeAndOrigins::new(Type::Nil, a).with_origin(b);
        assert_eq!(tp.origins, vec![a, b]);
    }
}
