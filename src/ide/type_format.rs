//! Type formatting for hover text.

use crate::hir::{SymbolTable, Type};

/// Renders types the way signatures are written in source.
pub struct TypeFormatter<'a> {
    table: &'a SymbolTable,
}

impl<'a> TypeFormatter<'a> {
    pub fn new(table: &'a SymbolTable) -> Self {
        Self { table }
    }

    pub fn format(&self, ty: &Type) -> String {
        match ty {
            Type::Untyped { .. } => "T.untyped".to_string(),
            Type::Nil => "NilClass".to_string(),
            Type::Class(sym) => {
                let attached = self.table.attached_class(*sym);
                if attached.exists() {
                    format!("T.class_of({})", self.table.full_name(attached))
                } else {
                    self.table.full_name(*sym)
                }
            }
            Type::Nilable(inner) => format!("T.nilable({})", self.format(inner)),
            Type::Union(members) => {
                let members = members
                    .iter()
                    .map(|t| self.format(t))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("T.any({})", members)
            }
        }
    }
}
