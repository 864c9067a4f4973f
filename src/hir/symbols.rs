//! The symbol table: an arena of every entity the type checker declared.
//!
//! Entities reference each other (owner, superclass, alias target, singleton
//! and attached class) by [`SymbolRef`] index, never by pointer. The table is
//! populated once by the resolver and is read-only while queries run, so a
//! shared `&SymbolTable` can serve any number of concurrent queries.
//!
//! # Singleton classes
//!
//! Every class and module `Foo` has a singleton class `<Class:Foo>` whose
//! single instance is the class object `Foo` itself. The singleton's
//! *attached class* is `Foo`. Singletons can themselves have singletons
//! (`<Class:<Class:Foo>>`), so walking attached classes may take several steps.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use thiserror::Error;

use crate::base::{Interner, Loc, Name};

use super::ids::SymbolRef;
use super::types::Type;

/// What kind of entity a symbol is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Class,
    Module,
    Method,
    /// An instance variable, owned by the class whose instances carry it.
    Field,
    /// A constant or a class variable, owned by the class it is declared in.
    StaticField,
}

impl SymbolKind {
    pub fn is_class_or_module(self) -> bool {
        matches!(self, SymbolKind::Class | SymbolKind::Module)
    }
}

/// A declared formal parameter of a method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgInfo {
    pub name: Name,
    pub loc: Loc,
    /// Declared type; [`Type::Untyped`] when the method has no signature.
    pub ty: Type,
}

/// Everything the table records about one entity.
#[derive(Clone, Debug)]
pub struct SymbolData {
    pub name: Name,
    pub kind: SymbolKind,
    pub owner: SymbolRef,
    /// Declaration location.
    pub loc: Loc,
    /// Declared or inferred result type, when one was recorded.
    pub result_type: Option<Type>,
    /// Formal parameters, methods only.
    pub arguments: Vec<ArgInfo>,
    pub superclass: SymbolRef,
    /// Included modules in inclusion order.
    pub mixins: Vec<SymbolRef>,
    /// For a constant that stands for another entity, the entity it names.
    pub alias_target: SymbolRef,
    pub singleton_class: SymbolRef,
    pub attached_class: SymbolRef,
    members: IndexMap<Name, SymbolRef>,
}

impl SymbolData {
    fn new(name: Name, kind: SymbolKind, owner: SymbolRef, loc: Loc) -> Self {
        Self {
            name,
            kind,
            owner,
            loc,
            result_type: None,
            arguments: Vec::new(),
            superclass: SymbolRef::NONE,
            mixins: Vec::new(),
            alias_target: SymbolRef::NONE,
            singleton_class: SymbolRef::NONE,
            attached_class: SymbolRef::NONE,
            members: IndexMap::new(),
        }
    }

    pub fn is_class_or_module(&self) -> bool {
        self.kind.is_class_or_module()
    }

    pub fn is_method(&self) -> bool {
        self.kind == SymbolKind::Method
    }

    /// Whether this constant stands for another entity.
    pub fn is_alias(&self) -> bool {
        self.kind == SymbolKind::StaticField && self.alias_target.exists()
    }

    /// Members declared directly on this entity, in declaration order.
    pub fn members(&self) -> impl Iterator<Item = (Name, SymbolRef)> + '_ {
        self.members.iter().map(|(&name, &sym)| (name, sym))
    }
}

/// Following alias targets from `symbol` never reached a non-alias entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("alias chain starting at {symbol:?} is cyclic")]
pub struct AliasCycle {
    pub symbol: SymbolRef,
}

/// Arena of all entities.
#[derive(Debug)]
pub struct SymbolTable {
    symbols: Vec<SymbolData>,
    names: Interner,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// The root namespace, owner of all top-level constants.
    pub const ROOT: SymbolRef = SymbolRef(1);

    /// A table holding only the sentinel and the root namespace.
    pub fn new() -> Self {
        let names = Interner::new();
        let none = names.intern("<none>");
        let root = names.intern("<root>");
        let mut table = Self {
            symbols: vec![
                SymbolData::new(none, SymbolKind::Module, SymbolRef::NONE, Loc::detached()),
                SymbolData::new(root, SymbolKind::Module, SymbolRef::NONE, Loc::detached()),
            ],
            names,
        };
        table.enter_singleton_class(Self::ROOT);
        table
    }

    // ========================================================================
    // READ CONTRACT
    // ========================================================================

    /// The data for `sym`, or `None` for [`SymbolRef::NONE`] and ids this
    /// table never handed out.
    pub fn get(&self, sym: SymbolRef) -> Option<&SymbolData> {
        if sym.exists() {
            self.symbols.get(sym.0 as usize)
        } else {
            None
        }
    }

    pub fn exists(&self, sym: SymbolRef) -> bool {
        self.get(sym).is_some()
    }

    pub fn names(&self) -> &Interner {
        &self.names
    }

    pub fn intern(&self, s: &str) -> Name {
        self.names.intern(s)
    }

    /// The simple name of `sym`.
    pub fn name(&self, sym: SymbolRef) -> SmolStr {
        match self.get(sym) {
            Some(data) => self.names.display(data.name),
            None => SmolStr::new_static("<none>"),
        }
    }

    /// `A::B::C` for nested constants; singleton classes render as
    /// `<Class:A::B>`.
    pub fn full_name(&self, sym: SymbolRef) -> String {
        let Some(data) = self.get(sym) else {
            return "<none>".to_string();
        };
        if data.attached_class.exists() {
            return format!("<Class:{}>", self.full_name(data.attached_class));
        }
        let name = self.names.display(data.name);
        match self.get(data.owner) {
            Some(owner) if data.owner != Self::ROOT && owner.is_class_or_module() => {
                let sep = if data.is_method() { "#" } else { "::" };
                format!("{}{}{}", self.full_name(data.owner), sep, name)
            }
            _ => name.to_string(),
        }
    }

    pub fn is_class_or_module(&self, sym: SymbolRef) -> bool {
        self.get(sym).is_some_and(SymbolData::is_class_or_module)
    }

    pub fn owner(&self, sym: SymbolRef) -> SymbolRef {
        self.get(sym).map_or(SymbolRef::NONE, |data| data.owner)
    }

    /// The nearest class or module at or above `sym` in the ownership chain.
    pub fn enclosing_class(&self, sym: SymbolRef) -> SymbolRef {
        let mut current = sym;
        while let Some(data) = self.get(current) {
            if data.is_class_or_module() {
                return current;
            }
            current = data.owner;
        }
        SymbolRef::NONE
    }

    /// The instance-level class `sym` is the singleton of, or
    /// [`SymbolRef::NONE`] when `sym` is not a singleton class.
    pub fn attached_class(&self, sym: SymbolRef) -> SymbolRef {
        self.get(sym).map_or(SymbolRef::NONE, |data| data.attached_class)
    }

    /// The singleton class of `sym`, without creating one.
    pub fn lookup_singleton_class(&self, sym: SymbolRef) -> SymbolRef {
        self.get(sym).map_or(SymbolRef::NONE, |data| data.singleton_class)
    }

    /// The type of values whose class is `sym`. For a singleton class this is
    /// the class object of its attached class.
    pub fn external_type(&self, sym: SymbolRef) -> Type {
        if self.is_class_or_module(sym) {
            Type::Class(sym)
        } else {
            Type::untyped_for(sym)
        }
    }

    /// A member declared directly on `owner`.
    pub fn find_member(&self, owner: SymbolRef, name: Name) -> SymbolRef {
        self.get(owner)
            .and_then(|data| data.members.get(&name).copied())
            .unwrap_or(SymbolRef::NONE)
    }

    /// Ancestor linearization of `class`: the class itself, then its mixins
    /// (most recently included first) with their own ancestors, then the
    /// superclass chain. Each ancestor appears once.
    pub fn ancestors(&self, class: SymbolRef) -> Vec<SymbolRef> {
        let mut out = Vec::new();
        let mut seen = FxHashSet::default();
        self.collect_ancestors(class, &mut seen, &mut out);
        out
    }

    fn collect_ancestors(
        &self,
        class: SymbolRef,
        seen: &mut FxHashSet<SymbolRef>,
        out: &mut Vec<SymbolRef>,
    ) {
        let Some(data) = self.get(class) else {
            return;
        };
        if !seen.insert(class) {
            return;
        }
        out.push(class);
        for &mixin in data.mixins.iter().rev() {
            self.collect_ancestors(mixin, seen, out);
        }
        self.collect_ancestors(data.superclass, seen, out);
    }

    /// Look `name` up on `class` and then along its ancestors.
    pub fn find_member_transitive(&self, class: SymbolRef, name: Name) -> SymbolRef {
        let found = self
            .ancestors(class)
            .into_iter()
            .map(|ancestor| self.find_member(ancestor, name))
            .find(|member| member.exists())
            .unwrap_or(SymbolRef::NONE);
        tracing::trace!(
            "find_member_transitive({}, {}) -> {:?}",
            self.full_name(class),
            self.names.display(name),
            found
        );
        found
    }

    /// Follow alias targets from `sym` to the first entity that is not an
    /// alias. Non-alias symbols come back unchanged.
    pub fn dealias(&self, sym: SymbolRef) -> Result<SymbolRef, AliasCycle> {
        let mut current = sym;
        let mut steps = 0;
        while let Some(data) = self.get(current) {
            if !data.is_alias() {
                break;
            }
            steps += 1;
            if steps > self.symbols.len() {
                return Err(AliasCycle { symbol: sym });
            }
            current = data.alias_target;
        }
        Ok(current)
    }

    /// Number of real entities (excluding the sentinel).
    pub fn len(&self) -> usize {
        self.symbols.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    pub fn get_mut(&mut self, sym: SymbolRef) -> Option<&mut SymbolData> {
        if sym.exists() {
            self.symbols.get_mut(sym.0 as usize)
        } else {
            None
        }
    }

    fn push(&mut self, data: SymbolData) -> SymbolRef {
        let sym = SymbolRef(self.symbols.len() as u32);
        let (owner, name) = (data.owner, data.name);
        self.symbols.push(data);
        if let Some(owner) = self.get_mut(owner) {
            owner.members.insert(name, sym);
        }
        sym
    }

    fn enter(&mut self, owner: SymbolRef, name: &str, kind: SymbolKind, loc: Loc) -> SymbolRef {
        let name = self.names.intern(name);
        let existing = self.find_member(owner, name);
        if self.get(existing).is_some_and(|data| data.kind == kind) {
            return existing;
        }
        self.push(SymbolData::new(name, kind, owner, loc))
    }

    /// Declare a class under `owner`, with its singleton class.
    /// Re-entering an existing class returns it unchanged.
    pub fn enter_class(&mut self, owner: SymbolRef, name: &str, loc: Loc) -> SymbolRef {
        let class = self.enter(owner, name, SymbolKind::Class, loc);
        self.enter_singleton_class(class);
        class
    }

    pub fn enter_module(&mut self, owner: SymbolRef, name: &str, loc: Loc) -> SymbolRef {
        let module = self.enter(owner, name, SymbolKind::Module, loc);
        self.enter_singleton_class(module);
        module
    }

    /// The singleton class of `class`, created on first request.
    pub fn enter_singleton_class(&mut self, class: SymbolRef) -> SymbolRef {
        let Some(data) = self.get(class) else {
            return SymbolRef::NONE;
        };
        if data.singleton_class.exists() {
            return data.singleton_class;
        }
        let (owner, loc) = (data.owner, data.loc);
        let name = format!("<Class:{}>", self.names.display(data.name));
        let name = self.names.intern(&name);
        // Singletons are not members of their owner: `Foo` names the class,
        // never its metaclass.
        let singleton = SymbolRef(self.symbols.len() as u32);
        let mut singleton_data = SymbolData::new(name, SymbolKind::Class, owner, loc);
        singleton_data.attached_class = class;
        self.symbols.push(singleton_data);
        if let Some(data) = self.get_mut(class) {
            data.singleton_class = singleton;
        }
        singleton
    }

    pub fn enter_method(&mut self, owner: SymbolRef, name: &str, loc: Loc) -> SymbolRef {
        self.enter(owner, name, SymbolKind::Method, loc)
    }

    /// Append a formal parameter to `method`.
    pub fn add_argument(&mut self, method: SymbolRef, name: &str, loc: Loc, ty: Type) {
        let name = self.names.intern(name);
        if let Some(data) = self.get_mut(method) {
            data.arguments.push(ArgInfo { name, loc, ty });
        }
    }

    /// Declare an instance variable on `class`.
    pub fn enter_field(&mut self, class: SymbolRef, name: &str, loc: Loc) -> SymbolRef {
        self.enter(class, name, SymbolKind::Field, loc)
    }

    /// Declare a constant or class variable on `owner`.
    pub fn enter_static_field(&mut self, owner: SymbolRef, name: &str, loc: Loc) -> SymbolRef {
        self.enter(owner, name, SymbolKind::StaticField, loc)
    }

    pub fn set_result_type(&mut self, sym: SymbolRef, ty: Type) {
        if let Some(data) = self.get_mut(sym) {
            data.result_type = Some(ty);
        }
    }

    /// Make the constant `alias` stand for `target`.
    pub fn set_alias_target(&mut self, alias: SymbolRef, target: SymbolRef) {
        if let Some(data) = self.get_mut(alias) {
            data.alias_target = target;
        }
    }

    pub fn set_superclass(&mut self, class: SymbolRef, superclass: SymbolRef) {
        if let Some(data) = self.get_mut(class) {
            data.superclass = superclass;
        }
    }

    pub fn add_mixin(&mut self, class: SymbolRef, module: SymbolRef) {
        if let Some(data) = self.get_mut(class) {
            if !data.mixins.contains(&module) {
                data.mixins.push(module);
            }
        }
    }
}
