//! Core data model for the `modlint` module structure ruleset.
//!
//! This crate holds the plain data exchanged between a configuration host
//! and the rules that inspect a module: source positions and ranges,
//! declaration blocks and the schema used to request them, the module
//! context a rule evaluates, and the diagnostics a rule produces.
//!
//! # Core types
//!
//! - [`Position`] and [`SourceRange`] — 1-based source locations
//! - [`BlockKind`], [`DeclarationBlock`], [`BlockSchema`] — declarations
//! - [`ModulePath`], [`SourceFile`], [`ModuleContext`] — the unit under evaluation
//! - [`Severity`], [`Diagnostic`], [`Issue`] — reported problems
//! - [`ConventionalFile`] — the fixed set of conventional file names
//!
//! # Example
//!
//! ```
//! use modlint_core::{Position, SourceRange};
//!
//! let range = SourceRange::file_start("modules/net/main.tf");
//! assert_eq!(range.start(), Position::INITIAL);
//! assert_eq!(range.end(), Position::INITIAL);
//! ```

mod block;
mod conventional;
mod diagnostic;
mod module;
mod span;

pub use block::{BlockKind, BlockSchema, BlockSchemaEntry, DeclarationBlock, ExpandMode};
pub use conventional::ConventionalFile;
pub use diagnostic::{Diagnostic, Issue, Severity};
pub use module::{ModuleContext, ModulePath, SourceFile};
pub use span::{Position, SourceRange};

#[cfg(test)]
mod tests;
