//! The module under evaluation and its address.

use std::collections::BTreeMap;
use std::fmt;

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::block::{BlockKind, DeclarationBlock};

/// Address of a module within the configuration tree.
///
/// The address lists the names of the `module` calls leading to it. The
/// root module, the one a user authors directly, has an empty address.
///
/// # Example
///
/// ```
/// use modlint_core::ModulePath;
///
/// assert!(ModulePath::root().is_root());
/// let child = ModulePath::new(vec![String::from("network")]);
/// assert!(!child.is_root());
/// assert_eq!(child.to_string(), "module.network");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModulePath {
    calls: Vec<String>,
}

impl ModulePath {
    /// Creates a path from the chain of module call names.
    #[must_use]
    pub const fn new(calls: Vec<String>) -> Self {
        Self { calls }
    }

    /// Returns the root module's path.
    #[must_use]
    pub const fn root() -> Self {
        Self { calls: Vec::new() }
    }

    /// Returns `true` for the root module.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.calls.is_empty()
    }

    /// Returns the module call names from the root.
    #[must_use]
    pub fn calls(&self) -> &[String] {
        &self.calls
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.calls.is_empty() {
            return f.write_str("root");
        }
        let mut first = true;
        for call in &self.calls {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "module.{call}")?;
            first = false;
        }
        Ok(())
    }
}

/// A configuration file handle supplied by the host.
///
/// Rules only look at the file's path; the text is carried for hosts that
/// need it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceFile {
    content: String,
}

impl SourceFile {
    /// Wraps the file text.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Returns the file text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Everything a structure rule needs to know about one module.
///
/// A context is assembled fresh for each evaluation and is not modified by
/// the rules that read it. Files are keyed by their path relative to the
/// working directory; blocks keep the order the host discovered them in.
///
/// # Example
///
/// ```
/// use modlint_core::{BlockKind, DeclarationBlock, ModuleContext, SourceRange};
///
/// let context = ModuleContext::new(true)
///     .with_file("main.tf", "")
///     .with_block(DeclarationBlock::new(
///         BlockKind::Variable,
///         "region",
///         SourceRange::file_start("main.tf"),
///     ));
/// assert_eq!(context.files().len(), 1);
/// assert!(context.has_blocks(BlockKind::Variable));
/// assert!(!context.has_blocks(BlockKind::Output));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleContext {
    is_root: bool,
    files: BTreeMap<Utf8PathBuf, SourceFile>,
    blocks: Vec<DeclarationBlock>,
}

impl ModuleContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new(is_root: bool) -> Self {
        Self {
            is_root,
            files: BTreeMap::new(),
            blocks: Vec::new(),
        }
    }

    /// Creates a context from parts already fetched from a host.
    #[must_use]
    pub const fn from_parts(
        is_root: bool,
        files: BTreeMap<Utf8PathBuf, SourceFile>,
        blocks: Vec<DeclarationBlock>,
    ) -> Self {
        Self {
            is_root,
            files,
            blocks,
        }
    }

    /// Adds a file.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<Utf8PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), SourceFile::new(content));
        self
    }

    /// Appends a declaration block.
    #[must_use]
    pub fn with_block(mut self, block: DeclarationBlock) -> Self {
        self.blocks.push(block);
        self
    }

    /// Returns `true` for the root module.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.is_root
    }

    /// Returns the module's files keyed by path.
    #[must_use]
    pub const fn files(&self) -> &BTreeMap<Utf8PathBuf, SourceFile> {
        &self.files
    }

    /// Returns all declaration blocks in discovery order.
    #[must_use]
    pub fn blocks(&self) -> &[DeclarationBlock] {
        &self.blocks
    }

    /// Iterates over the blocks of one kind in discovery order.
    pub fn blocks_of(&self, kind: BlockKind) -> impl Iterator<Item = &DeclarationBlock> {
        self.blocks.iter().filter(move |block| block.kind() == kind)
    }

    /// Returns `true` when at least one block of `kind` exists.
    #[must_use]
    pub fn has_blocks(&self, kind: BlockKind) -> bool {
        self.blocks_of(kind).next().is_some()
    }
}
