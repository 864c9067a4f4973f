//! Find references: every place in the workspace an entity appears.

use rayon::prelude::*;

use crate::base::Loc;
use crate::hir::{Node, SymbolRef, SymbolTable};

use super::error::QueryError;
use super::query::Query;
use super::walker::walk;

/// Options for a references request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReferenceOptions {
    /// Also report the entity's own declaration.
    pub include_declaration: bool,
}

impl Default for ReferenceOptions {
    fn default() -> Self {
        Self {
            include_declaration: true,
        }
    }
}

/// A reference to an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reference {
    pub loc: Loc,
    /// Whether this is the entity's declaration rather than a use.
    pub is_declaration: bool,
}

/// Walk every tree for `symbol` and collect where it appears.
///
/// Trees are walked in parallel; results come back in tree order, and in
/// visitation order within a tree. Locations in files that do not exist
/// are dropped.
pub fn find_references(
    table: &SymbolTable,
    trees: &[&Node],
    symbol: SymbolRef,
    options: ReferenceOptions,
) -> Result<Vec<Reference>, QueryError> {
    let declaration = table
        .get(symbol)
        .ok_or(QueryError::UnknownSymbol(symbol))?
        .loc;
    let query = Query::by_symbol(symbol);

    let per_tree = trees
        .par_iter()
        .map(|tree| walk(table, tree, &query))
        .collect::<Result<Vec<_>, _>>()?;

    let references: Vec<Reference> = per_tree
        .into_iter()
        .flatten()
        .map(|response| {
            let loc = response.term_loc();
            Reference {
                loc,
                is_declaration: loc == declaration,
            }
        })
        .filter(|reference| reference.loc.exists())
        .filter(|reference| options.include_declaration || !reference.is_declaration)
        .collect();

    tracing::debug!(
        "references to {}: {} across {} tree(s)",
        table.full_name(symbol),
        references.len(),
        trees.len()
    );
    Ok(references)
}
