//! Name interning for identifiers, constants and instance/class variables.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use std::fmt;

/// An interned name such as `foo`, `@count`, `@@registry` or `Foo`.
///
/// Comparing two `Name`s is comparing two `u32`s. A `Name` is only meaningful
/// together with the [`Interner`] that produced it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Name(u32);

impl Name {
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

/// Thread-safe string interner.
///
/// Interning takes `&self`, so a symbol table shared behind an `Arc` can still
/// hand out names to whoever builds trees against it.
#[derive(Default)]
pub struct Interner {
    inner: RwLock<Strings>,
}

#[derive(Default)]
struct Strings {
    ids: FxHashMap<SmolStr, Name>,
    text: Vec<SmolStr>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `s`, returning the existing handle if it was seen before.
    pub fn intern(&self, s: &str) -> Name {
        if let Some(name) = self.find(s) {
            return name;
        }

        let mut inner = self.inner.write();
        // Another writer may have won the race between the two locks.
        if let Some(&name) = inner.ids.get(s) {
            return name;
        }
        let name = Name(inner.text.len() as u32);
        let text = SmolStr::new(s);
        inner.text.push(text.clone());
        inner.ids.insert(text, name);
        name
    }

    /// Look up `s` without interning it.
    pub fn find(&self, s: &str) -> Option<Name> {
        self.inner.read().ids.get(s).copied()
    }

    /// The text of `name`, or `None` for a handle from another interner.
    pub fn resolve(&self, name: Name) -> Option<SmolStr> {
        self.inner.read().text.get(name.0 as usize).cloned()
    }

    /// The text of `name`, with a placeholder for foreign handles.
    pub fn display(&self, name: Name) -> SmolStr {
        self.resolve(name)
            .unwrap_or_else(|| SmolStr::new_static("<unknown>"))
    }

    pub fn len(&self) -> usize {
        self.inner.read().text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Interner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interner").field("len", &self.len()).finish()
    }
}
