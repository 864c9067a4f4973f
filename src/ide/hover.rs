//! Hover: a one-line type summary of whatever is under the cursor.

use crate::base::Loc;
use crate::hir::SymbolTable;

use super::response::{QueryResponse, QueryResponses};
use super::type_format::TypeFormatter;

/// Hover text and the span it applies to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverResult {
    pub term_loc: Loc,
    pub contents: String,
}

/// Hover for the first response of a request, if there is one.
pub fn hover(table: &SymbolTable, responses: &QueryResponses) -> Option<HoverResult> {
    let first = responses.first()?;
    let names = table.names();
    let ty = TypeFormatter::new(table).format(&first.ret_type().ty);

    let contents = match first {
        QueryResponse::Definition(def) => format!("def {}: {}", names.display(def.name), ty),
        QueryResponse::Ident(ident) => format!("{}: {}", names.display(ident.variable.name), ty),
        QueryResponse::Field(field) => format!("{}: {}", names.display(field.name), ty),
        QueryResponse::Constant(constant) => {
            format!("{}: {}", table.full_name(constant.symbol), ty)
        }
        QueryResponse::Dispatch(_) => ty,
    };

    Some(HoverResult {
        term_loc: first.term_loc(),
        contents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::FileId;
    use crate::hir::{Type, TypeAndOrigins};
    use crate::ide::response::ConstantResponse;

    #[test]
    fn test_hover_nothing() {
        let table = SymbolTable::new();
        assert_eq!(hover(&table, &QueryResponses::new()), None);
    }

    #[test]
    fn test_hover_constant_shows_class_object() {
        let mut table = SymbolTable::new();
        let decl = Loc::from_offsets(FileId::new(0), 0, 9);
        let foo = table.enter_class(SymbolTable::ROOT, "Foo", decl);
        let singleton = table.lookup_singleton_class(foo);
        let use_site = Loc::from_offsets(FileId::new(0), 40, 43);

        let mut responses = QueryResponses::new();
        responses.push(QueryResponse::Constant(ConstantResponse {
            symbol: foo,
            term_loc: use_site,
            name: table.intern("Foo"),
            ret_type: TypeAndOrigins::new(Type::Class(singleton), decl),
        }));

        assert_eq!(
            hover(&table, &responses),
            Some(HoverResult {
                term_loc: use_site,
                contents: "Foo: T.class_of(Foo)".to_string(),
            })
        );
    }
}
