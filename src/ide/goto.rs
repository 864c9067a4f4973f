//! Goto-definition: turning a request's responses into locations.

use crate::base::Loc;
use crate::hir::{Node, SymbolTable};

use super::error::QueryError;
use super::query::Query;
use super::response::{QueryResponse, QueryResponses};
use super::walker::walk;

/// Definition locations for one request's responses.
///
/// Only the first response is consulted; when several nodes matched, the
/// one visited first wins. Locations in files that do not exist (generated
/// code) are dropped, and an empty sequence yields an empty list.
pub fn definition_locations(table: &SymbolTable, responses: &QueryResponses) -> Vec<Loc> {
    let Some(first) = responses.first() else {
        return Vec::new();
    };
    if responses.len() > 1 {
        tracing::debug!(
            "goto: {} responses, answering from the first at {:?}",
            responses.len(),
            first.term_loc()
        );
    }

    let candidates = match first {
        QueryResponse::Ident(ident) => ident.ret_type.origins.clone(),
        QueryResponse::Definition(def) => vec![def.term_loc],
        QueryResponse::Field(field) => field.ret_type.origins.clone(),
        QueryResponse::Constant(constant) => constant.ret_type.origins.clone(),
        QueryResponse::Dispatch(dispatch) => dispatch
            .components
            .iter()
            .filter_map(|component| table.get(component.method))
            .map(|method| method.loc)
            .collect(),
    };

    candidates.into_iter().filter(Loc::exists).collect()
}

/// Walk `tree` for `query` and answer with definition locations.
pub fn goto_definition(
    table: &SymbolTable,
    tree: &Node,
    query: &Query,
) -> Result<Vec<Loc>, QueryError> {
    let responses = walk(table, tree, query)?;
    Ok(definition_locations(table, &responses))
}
