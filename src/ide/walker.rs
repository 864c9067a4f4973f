//! The resolution walk: one read-only pass over a typed tree that records a
//! [`QueryResponse`] for every node matching a [`Query`].
//!
//! Three node shapes can match:
//!
//! - **Method definitions** match on their header location or their symbol.
//!   A formal argument under the cursor is more specific than the method, so
//!   it is reported instead of the method, never alongside it.
//! - **Instance and class variable accesses** are resolved to a field by
//!   member lookup on the owning class. Class variables live on the
//!   instance-level class, so singleton contexts are unwound first.
//! - **Constant references** are matched segment by segment from the
//!   innermost name outward. A chain like `A::B::C` can produce up to three
//!   responses for a single query.
//!
//! Children are visited before their parent, and responses are recorded in
//! visitation order.

use crate::hir::{
    ConstantLit, IdentKind, MethodDef, Node, SymbolData, SymbolRef, SymbolTable, Type,
    TypeAndOrigins, UnresolvedIdent,
};

use super::error::QueryError;
use super::query::Query;
use super::response::{
    ConstantResponse, DefinitionResponse, FieldResponse, IdentResponse, QueryResponse,
    QueryResponses,
};

/// Walk `tree` and collect every response matching `query`.
///
/// An internal-consistency fault aborts the walk and discards whatever was
/// collected so far.
pub fn walk(table: &SymbolTable, tree: &Node, query: &Query) -> Result<QueryResponses, QueryError> {
    let mut walker = Walker {
        table,
        query,
        responses: QueryResponses::new(),
    };
    walker.visit(tree, SymbolTable::ROOT)?;
    tracing::debug!(
        "walk: {} response(s) for query {:?}",
        walker.responses.len(),
        query
    );
    Ok(walker.responses)
}

struct Walker<'a> {
    table: &'a SymbolTable,
    query: &'a Query,
    responses: QueryResponses,
}

impl<'a> Walker<'a> {
    /// `owner` is the innermost enclosing method or class.
    fn visit(&mut self, node: &Node, owner: SymbolRef) -> Result<(), QueryError> {
        match node {
            Node::ClassDef(class) => {
                self.visit(&class.name, owner)?;
                for ancestor in &class.ancestors {
                    self.visit(ancestor, class.symbol)?;
                }
                for stmt in &class.body {
                    self.visit(stmt, class.symbol)?;
                }
                Ok(())
            }
            Node::MethodDef(method) => {
                for default in method.args.iter().filter_map(|arg| arg.default_value()) {
                    self.visit(default, method.symbol)?;
                }
                self.visit(&method.body, method.symbol)?;
                self.method_def(method)
            }
            Node::Call(call) => {
                self.visit(&call.recv, owner)?;
                for arg in &call.args {
                    self.visit(arg, owner)?;
                }
                Ok(())
            }
            Node::Assign(assign) => {
                self.visit(&assign.lhs, owner)?;
                self.visit(&assign.rhs, owner)
            }
            Node::Seq(seq) => {
                for stmt in &seq.stmts {
                    self.visit(stmt, owner)?;
                }
                Ok(())
            }
            Node::UnresolvedIdent(ident) => self.unresolved_ident(ident, owner),
            // The qualifying scopes of a constant are reached through
            // `original`, never visited as nodes of their own.
            Node::ConstantLit(lit) => self.constant_lit(lit),
            Node::Local(_) | Node::Literal(_) | Node::Empty => Ok(()),
        }
    }

    fn data(&self, sym: SymbolRef) -> Result<&'a SymbolData, QueryError> {
        self.table.get(sym).ok_or(QueryError::UnknownSymbol(sym))
    }

    fn result_type(data: &SymbolData, sym: SymbolRef) -> Type {
        data.result_type
            .clone()
            .unwrap_or_else(|| Type::untyped_for(sym))
    }

    fn method_def(&mut self, method: &MethodDef) -> Result<(), QueryError> {
        if !(self.query.matches_loc(method.decl_loc) || self.query.matches_symbol(method.symbol)) {
            return Ok(());
        }

        let data = self.data(method.symbol)?;
        if method.args.len() != data.arguments.len() {
            return Err(QueryError::ArgumentCountMismatch {
                method: method.symbol,
                nodes: method.args.len(),
                declared: data.arguments.len(),
            });
        }

        for (arg, declared) in method.args.iter().zip(&data.arguments) {
            let local = arg.local();
            if self.query.matches_loc(local.loc) {
                self.responses.push(QueryResponse::Ident(IdentResponse {
                    term_loc: local.loc,
                    variable: local.variable,
                    ret_type: TypeAndOrigins::new(declared.ty.clone(), local.loc),
                    enclosing_method: method.symbol,
                }));
                return Ok(());
            }
        }

        self.responses.push(QueryResponse::Definition(DefinitionResponse {
            symbol: method.symbol,
            term_loc: method.decl_loc,
            name: method.name,
            ret_type: TypeAndOrigins::new(Self::result_type(data, method.symbol), method.decl_loc),
        }));
        Ok(())
    }

    fn unresolved_ident(&mut self, ident: &UnresolvedIdent, owner: SymbolRef) -> Result<(), QueryError> {
        let class = match ident.kind {
            IdentKind::Instance => match self.table.get(owner) {
                Some(data) if data.is_method() => data.owner,
                _ => {
                    return Err(QueryError::InstanceVariableOutsideMethod {
                        name: ident.name,
                        loc: ident.loc,
                    });
                }
            },
            IdentKind::Class => {
                let mut class = self.table.enclosing_class(owner);
                loop {
                    let attached = self.table.attached_class(class);
                    if !attached.exists() {
                        break class;
                    }
                    class = attached;
                }
            }
            IdentKind::Local | IdentKind::Global => return Ok(()),
        };

        let field = self.table.find_member_transitive(class, ident.name);
        if !field.exists() {
            return Ok(());
        }
        if self.query.matches_symbol(field) || self.query.matches_loc(ident.loc) {
            let data = self.data(field)?;
            self.responses.push(QueryResponse::Field(FieldResponse {
                symbol: field,
                term_loc: ident.loc,
                name: ident.name,
                ret_type: TypeAndOrigins::new(Self::result_type(data, field), data.loc),
            }));
        }
        Ok(())
    }

    fn constant_lit(&mut self, lit: &ConstantLit) -> Result<(), QueryError> {
        let mut current = Some(lit);
        let mut symbol = self.table.dealias(lit.symbol)?;

        while let Some(lit) = current {
            if !symbol.exists() || lit.original.is_none() {
                break;
            }
            if self.query.matches_loc(lit.loc) || self.query.matches_symbol(symbol) {
                let data = self.data(symbol)?;
                let ty = if data.is_class_or_module() {
                    self.table
                        .external_type(self.table.lookup_singleton_class(symbol))
                } else {
                    Self::result_type(data, symbol)
                };
                self.responses.push(QueryResponse::Constant(ConstantResponse {
                    symbol,
                    term_loc: lit.loc,
                    name: data.name,
                    ret_type: TypeAndOrigins::new(ty, data.loc),
                }));
            }

            current = lit.scope();
            if let Some(scope) = current {
                symbol = self.table.dealias(scope.symbol)?;
            }
        }
        Ok(())
    }
}
