//! Declaration blocks and the schema used to request them from a host.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::span::SourceRange;

/// The top-level block types a structure rule cares about.
///
/// # Example
///
/// ```
/// use modlint_core::BlockKind;
///
/// assert_eq!(BlockKind::Variable.to_string(), "variable");
/// assert_eq!(BlockKind::Output.as_str(), "output");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// An input `variable` declaration.
    Variable,
    /// An `output` declaration.
    Output,
}

impl BlockKind {
    /// Returns the block type keyword as written in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Variable => "variable",
            Self::Output => "output",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named top-level declaration found in one of the module's files.
///
/// The name is the block's single label, so `variable "region" {}` yields a
/// block named `region`. The definition range covers the block header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationBlock {
    kind: BlockKind,
    name: String,
    def_range: SourceRange,
}

impl DeclarationBlock {
    /// Creates a declaration block.
    #[must_use]
    pub fn new(kind: BlockKind, name: impl Into<String>, def_range: SourceRange) -> Self {
        Self {
            kind,
            name: name.into(),
            def_range,
        }
    }

    /// Returns the block type.
    #[must_use]
    pub const fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Returns the declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the range of the block definition.
    #[must_use]
    pub const fn def_range(&self) -> &SourceRange {
        &self.def_range
    }
}

/// Controls whether the host expands called modules when collecting blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpandMode {
    /// Only blocks physically present in the module's own files.
    #[default]
    None,
    /// Blocks from called modules are expanded in place.
    Expand,
}

/// One requested block type and the positional labels it must carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSchemaEntry {
    kind: BlockKind,
    label_names: Vec<String>,
}

impl BlockSchemaEntry {
    /// Requests blocks of `kind` carrying the given labels.
    #[must_use]
    pub fn new(kind: BlockKind, label_names: Vec<String>) -> Self {
        Self { kind, label_names }
    }

    /// Returns the requested block type.
    #[must_use]
    pub const fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Returns the names of the positional labels.
    #[must_use]
    pub fn label_names(&self) -> &[String] {
        &self.label_names
    }
}

/// The set of block types a rule asks the host for.
///
/// # Example
///
/// ```
/// use modlint_core::{BlockKind, BlockSchema, BlockSchemaEntry};
///
/// let schema = BlockSchema::new(vec![BlockSchemaEntry::new(
///     BlockKind::Variable,
///     vec![String::from("name")],
/// )]);
/// assert!(schema.requests(BlockKind::Variable));
/// assert!(!schema.requests(BlockKind::Output));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSchema {
    blocks: Vec<BlockSchemaEntry>,
}

impl BlockSchema {
    /// Creates a schema from its entries.
    #[must_use]
    pub const fn new(blocks: Vec<BlockSchemaEntry>) -> Self {
        Self { blocks }
    }

    /// Returns the requested entries.
    #[must_use]
    pub fn blocks(&self) -> &[BlockSchemaEntry] {
        &self.blocks
    }

    /// Returns `true` when the schema requests blocks of `kind`.
    #[must_use]
    pub fn requests(&self, kind: BlockKind) -> bool {
        self.blocks.iter().any(|entry| entry.kind == kind)
    }
}
