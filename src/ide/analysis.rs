//! `AnalysisHost` owns the checker's output; `Analysis` is an immutable
//! snapshot of it that answers editor requests.
//!
//! Editor positions come in as (file, line/column); answers go out as
//! [`NavigationTarget`]s carrying a path and a line/column range. Between
//! the two everything is byte offsets and [`Loc`]s.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::base::{FileId, LineCol, Loc};
use crate::hir::{Node, SourceRoot, SymbolTable};

use super::error::QueryError;
use super::goto::definition_locations;
use super::hover::{hover, HoverResult};
use super::query::Query;
use super::references::{find_references, ReferenceOptions};
use super::response::{QueryResponse, QueryResponses};
use super::walker::walk;

/// A location rendered for the editor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NavigationTarget {
    #[cfg_attr(feature = "serde", serde(skip))]
    pub file: FileId,
    pub path: String,
    pub start: LineCol,
    pub end: LineCol,
}

/// Mutable owner of the symbol table, the typed trees and the source root.
///
/// Writes copy-on-write; snapshots taken earlier keep seeing the state they
/// were taken from.
#[derive(Debug, Default)]
pub struct AnalysisHost {
    symbols: Arc<SymbolTable>,
    source_root: Arc<SourceRoot>,
    trees: Arc<IndexMap<FileId, Node>>,
}

impl AnalysisHost {
    pub fn new(symbols: SymbolTable) -> Self {
        Self {
            symbols: Arc::new(symbols),
            ..Self::default()
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Replace the symbol table after a new type-checking run.
    pub fn set_symbols(&mut self, symbols: SymbolTable) {
        self.symbols = Arc::new(symbols);
    }

    /// Register a file and its typed tree. Files registered here are the
    /// only ones locations can be rendered for.
    pub fn set_file(&mut self, file: FileId, path: impl Into<Arc<str>>, text: &str, tree: Node) {
        Arc::make_mut(&mut self.source_root).insert(file, path, text);
        Arc::make_mut(&mut self.trees).insert(file, tree);
    }

    pub fn remove_file(&mut self, file: FileId) {
        Arc::make_mut(&mut self.source_root).remove(file);
        Arc::make_mut(&mut self.trees).shift_remove(&file);
    }

    pub fn analysis(&self) -> Analysis {
        Analysis {
            symbols: Arc::clone(&self.symbols),
            source_root: Arc::clone(&self.source_root),
            trees: Arc::clone(&self.trees),
        }
    }
}

/// Read-only snapshot. Cheap to clone and safe to share across threads.
#[derive(Clone, Debug)]
pub struct Analysis {
    symbols: Arc<SymbolTable>,
    source_root: Arc<SourceRoot>,
    trees: Arc<IndexMap<FileId, Node>>,
}

impl Analysis {
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn source_root(&self) -> &SourceRoot {
        &self.source_root
    }

    /// A cursor query at `pos`, or `None` if the position is not in the file.
    pub fn query_at(&self, file: FileId, pos: LineCol) -> Option<Query> {
        let offset = self.source_root.get(file)?.line_index.offset(pos)?;
        Some(Query::by_loc(Loc::point(file, offset)))
    }

    /// Everything the cursor at `pos` matches, in visitation order.
    pub fn responses_at(&self, file: FileId, pos: LineCol) -> Result<QueryResponses, QueryError> {
        let (Some(query), Some(tree)) = (self.query_at(file, pos), self.trees.get(&file)) else {
            return Ok(QueryResponses::new());
        };
        walk(&self.symbols, tree, &query).inspect_err(|err| {
            tracing::warn!("query at {}:{} aborted: {}", file, pos, err);
        })
    }

    pub fn goto_definition(&self, file: FileId, pos: LineCol) -> Result<Vec<NavigationTarget>, QueryError> {
        let responses = self.responses_at(file, pos)?;
        Ok(definition_locations(&self.symbols, &responses)
            .into_iter()
            .filter_map(|loc| self.navigation_target(loc))
            .collect())
    }

    pub fn hover(&self, file: FileId, pos: LineCol) -> Result<Option<HoverResult>, QueryError> {
        let responses = self.responses_at(file, pos)?;
        Ok(hover(&self.symbols, &responses))
    }

    /// Every place the entity under the cursor appears, across all files.
    pub fn references(
        &self,
        file: FileId,
        pos: LineCol,
        options: ReferenceOptions,
    ) -> Result<Vec<NavigationTarget>, QueryError> {
        let responses = self.responses_at(file, pos)?;
        let Some(first) = responses.first() else {
            return Ok(Vec::new());
        };

        let target = match first {
            QueryResponse::Dispatch(dispatch) => dispatch
                .components
                .iter()
                .map(|component| component.method)
                .find(|method| self.symbols.exists(*method)),
            other => other.symbol(),
        };

        let locs: Vec<Loc> = match (target, first) {
            (Some(symbol), _) => {
                let trees: Vec<&Node> = self.trees.values().collect();
                find_references(&self.symbols, &trees, symbol, options)?
                    .into_iter()
                    .map(|reference| reference.loc)
                    .collect()
            }
            // A formal argument is local to its method; its binding is all
            // there is to report.
            (None, QueryResponse::Ident(ident)) if options.include_declaration => {
                ident.ret_type.origins.clone()
            }
            (None, _) => Vec::new(),
        };

        Ok(locs
            .into_iter()
            .filter_map(|loc| self.navigation_target(loc))
            .collect())
    }

    /// Render `loc` for the editor. `None` for files the host does not know.
    pub fn navigation_target(&self, loc: Loc) -> Option<NavigationTarget> {
        if !self.source_root.contains(loc.file) {
            return None;
        }
        let source = self.source_root.get(loc.file)?;
        let (start, end) = source.line_index.line_range(loc.range);
        Some(NavigationTarget {
            file: loc.file,
            path: source.path.to_string(),
            start,
            end,
        })
    }
}
