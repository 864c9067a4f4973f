//! The typed syntax tree handed over by the type checker.
//!
//! By the time a tree reaches the query layer every class, method and
//! constant node already carries the [`SymbolRef`] the resolver assigned it.
//! Node shapes are closed; consumers match on [`Node`] exhaustively.

use crate::base::{Loc, Name};

use super::ids::{LocalVariable, SymbolRef};

/// One node of the typed tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    ClassDef(ClassDef),
    MethodDef(MethodDef),
    /// A method call `recv.name(args)`.
    Call(Call),
    Assign(Assign),
    /// A sequence of statements; the value is the last expression.
    Seq(Seq),
    Local(Local),
    /// An instance or class variable access, left unresolved by the checker.
    UnresolvedIdent(UnresolvedIdent),
    ConstantLit(ConstantLit),
    Literal(Literal),
    Empty,
}

impl Node {
    /// Source location of the node; [`Loc::detached`] for `Empty`.
    pub fn loc(&self) -> Loc {
        match self {
            Node::ClassDef(class) => class.loc,
            Node::MethodDef(method) => method.loc,
            Node::Call(call) => call.loc,
            Node::Assign(assign) => assign.loc,
            Node::Seq(seq) => seq.loc,
            Node::Local(local) => local.loc,
            Node::UnresolvedIdent(ident) => ident.loc,
            Node::ConstantLit(lit) => lit.loc,
            Node::Literal(lit) => lit.loc,
            Node::Empty => Loc::detached(),
        }
    }

    pub fn as_constant(&self) -> Option<&ConstantLit> {
        match self {
            Node::ConstantLit(lit) => Some(lit),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClassDef {
    pub loc: Loc,
    /// Location of the `class Foo` header.
    pub decl_loc: Loc,
    pub symbol: SymbolRef,
    /// The written name, e.g. the `A::B` in `class A::B`.
    pub name: Box<Node>,
    pub ancestors: Vec<Node>,
    pub body: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MethodDef {
    pub loc: Loc,
    /// Location of the `def name(args)` header.
    pub decl_loc: Loc,
    pub symbol: SymbolRef,
    pub name: Name,
    pub args: Vec<MethodArg>,
    pub body: Box<Node>,
}

/// A formal parameter as written. Every shape wraps the local it binds.
#[derive(Clone, Debug, PartialEq)]
pub enum MethodArg {
    Required(Local),
    Optional { local: Local, default: Box<Node> },
    Rest(Local),
    Keyword(Local),
    OptionalKeyword { local: Local, default: Box<Node> },
    KeywordRest(Local),
    Block(Local),
}

impl MethodArg {
    /// The local variable this parameter binds.
    pub fn local(&self) -> &Local {
        match self {
            MethodArg::Required(local)
            | MethodArg::Optional { local, .. }
            | MethodArg::Rest(local)
            | MethodArg::Keyword(local)
            | MethodArg::OptionalKeyword { local, .. }
            | MethodArg::KeywordRest(local)
            | MethodArg::Block(local) => local,
        }
    }

    pub fn default_value(&self) -> Option<&Node> {
        match self {
            MethodArg::Optional { default, .. } | MethodArg::OptionalKeyword { default, .. } => {
                Some(default.as_ref())
            }
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    pub loc: Loc,
    pub recv: Box<Node>,
    pub method: Name,
    pub args: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Assign {
    pub loc: Loc,
    pub lhs: Box<Node>,
    pub rhs: Box<Node>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Seq {
    pub loc: Loc,
    pub stmts: Vec<Node>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Local {
    pub loc: Loc,
    pub variable: LocalVariable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdentKind {
    Local,
    Instance,
    Class,
    Global,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnresolvedIdent {
    pub loc: Loc,
    pub kind: IdentKind,
    pub name: Name,
}

/// A resolved constant reference.
///
/// `original` is the reference as written, present when the constant came
/// from source text rather than being synthesized by the checker. For
/// `A::B::C` the node for `C` has an original whose scope is the node for
/// `A::B`, and so on outward.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstantLit {
    /// Span of this segment's own name: the `C` of `A::B::C`.
    pub loc: Loc,
    pub symbol: SymbolRef,
    pub original: Option<Box<UnresolvedConstant>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnresolvedConstant {
    /// Span of the whole written reference, qualifiers included.
    pub loc: Loc,
    /// The qualifying scope, [`Node::Empty`] for a bare name.
    pub scope: Node,
    pub name: Name,
}

impl ConstantLit {
    /// The constant node qualifying this one, if any.
    pub fn scope(&self) -> Option<&ConstantLit> {
        self.original.as_ref().and_then(|orig| orig.scope.as_constant())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Literal {
    pub loc: Loc,
    pub value: LiteralValue,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    Nil,
    True,
    False,
    Integer(i64),
    String(smol_str::SmolStr),
    Symbol(Name),
}
