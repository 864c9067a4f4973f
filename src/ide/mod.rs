//! IDE features: high-level APIs for language-server handlers.
//!
//! This module sits between the checker's output (HIR) and the LSP server.
//! Everything here reads a [`SymbolTable`](crate::hir::SymbolTable) and typed
//! trees and returns plain data; protocol types are built at the server.
//!
//! A request flows through three stages:
//!
//! 1. a [`Query`] names a cursor location, an entity, or both;
//! 2. [`walk`] visits one typed tree and records a [`QueryResponse`] for
//!    every node that matches;
//! 3. a feature ([`definition_locations`], [`hover`], [`find_references`])
//!    turns those responses into an answer.
//!
//! ## Usage
//!
//! ```ignore
//! use strata::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new(symbols);
//! host.set_file(file_id, "lib/foo.rb", &text, tree);
//!
//! let analysis = host.analysis();
//! let targets = analysis.goto_definition(file_id, LineCol::new(3, 8))?;
//! ```

mod analysis;
mod error;
mod goto;
mod hover;
mod query;
mod references;
mod response;
mod type_format;
mod walker;

pub use analysis::{Analysis, AnalysisHost, NavigationTarget};
pub use error::QueryError;
pub use goto::{definition_locations, goto_definition};
pub use hover::{hover, HoverResult};
pub use query::Query;
pub use references::{find_references, Reference, ReferenceOptions};
pub use response::{
    ConstantResponse, DefinitionResponse, DispatchComponent, DispatchResponse, FieldResponse,
    IdentResponse, QueryResponse, QueryResponses,
};
pub use type_format::TypeFormatter;
pub use walker::walk;
