//! The configuration host interface consumed by rules.
//!
//! A host owns everything a rule must not do itself: discovering the
//! module, parsing its files, and delivering issues to the user. Rules reach
//! it only through [`ConfigurationHost`], so any transport can sit behind
//! the trait. [`InMemoryHost`] is the implementation used when the whole
//! module arrives in a single request.

use std::collections::BTreeMap;

use camino::Utf8PathBuf;
use modlint_core::{
    BlockSchema, DeclarationBlock, ExpandMode, Issue, ModuleContext, ModulePath, SourceFile,
};

use crate::error::HostError;

/// Accessors a rule uses to inspect a module and report issues.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
///
/// use camino::Utf8PathBuf;
/// use modlint_core::{BlockSchema, DeclarationBlock, ExpandMode, Issue, ModulePath, SourceFile};
/// use modlint_rules::{ConfigurationHost, HostError};
///
/// struct ClosedHost;
///
/// impl ConfigurationHost for ClosedHost {
///     fn module_path(&self) -> Result<ModulePath, HostError> {
///         Err(HostError::ModulePath { message: String::from("host closed") })
///     }
///
///     fn files(&self) -> Result<BTreeMap<Utf8PathBuf, SourceFile>, HostError> {
///         Ok(BTreeMap::new())
///     }
///
///     fn declaration_blocks(
///         &self,
///         _schema: &BlockSchema,
///         _mode: ExpandMode,
///     ) -> Result<Vec<DeclarationBlock>, HostError> {
///         Ok(Vec::new())
///     }
///
///     fn emit_issue(&mut self, _issue: Issue) -> Result<(), HostError> {
///         Ok(())
///     }
/// }
///
/// assert!(ClosedHost.module_path().is_err());
/// ```
pub trait ConfigurationHost {
    /// Returns the address of the module being evaluated.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::ModulePath`] when the host cannot resolve it.
    fn module_path(&self) -> Result<ModulePath, HostError>;

    /// Returns the module's files keyed by path.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Files`] when the host cannot list them.
    fn files(&self) -> Result<BTreeMap<Utf8PathBuf, SourceFile>, HostError>;

    /// Returns the top-level blocks matching `schema`, in discovery order.
    ///
    /// With [`ExpandMode::None`] only blocks physically present in the
    /// module's own files are returned.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Content`] when the blocks cannot be produced.
    fn declaration_blocks(
        &self,
        schema: &BlockSchema,
        mode: ExpandMode,
    ) -> Result<Vec<DeclarationBlock>, HostError>;

    /// Reports one issue.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::EmitIssue`] when the host rejects the issue.
    fn emit_issue(&mut self, issue: Issue) -> Result<(), HostError>;
}

/// A host serving a module that is already fully in memory.
///
/// Issues emitted by rules are collected in emission order. The module
/// carries no calls to expand, so both [`ExpandMode`]s serve the same
/// blocks. Blocks with an empty name label are refused.
///
/// # Example
///
/// ```
/// use modlint_core::{ModuleContext, ModulePath};
/// use modlint_rules::{ConfigurationHost, InMemoryHost};
///
/// let host = InMemoryHost::from_context(&ModuleContext::new(true).with_file("main.tf", ""));
/// assert!(host.module_path().expect("path").is_root());
/// assert!(host.issues().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryHost {
    path: ModulePath,
    files: BTreeMap<Utf8PathBuf, SourceFile>,
    blocks: Vec<DeclarationBlock>,
    issues: Vec<Issue>,
}

impl InMemoryHost {
    /// Creates a host for the module at `path`.
    #[must_use]
    pub const fn new(
        path: ModulePath,
        files: BTreeMap<Utf8PathBuf, SourceFile>,
        blocks: Vec<DeclarationBlock>,
    ) -> Self {
        Self {
            path,
            files,
            blocks,
            issues: Vec::new(),
        }
    }

    /// Creates a host serving a copy of `context`.
    ///
    /// A non-root context is given a placeholder child address.
    #[must_use]
    pub fn from_context(context: &ModuleContext) -> Self {
        let path = if context.is_root() {
            ModulePath::root()
        } else {
            ModulePath::new(vec![String::from("child")])
        };
        Self::new(path, context.files().clone(), context.blocks().to_vec())
    }

    /// Returns the issues emitted so far.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Consumes the host and returns the emitted issues.
    #[must_use]
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }
}

impl ConfigurationHost for InMemoryHost {
    fn module_path(&self) -> Result<ModulePath, HostError> {
        Ok(self.path.clone())
    }

    fn files(&self) -> Result<BTreeMap<Utf8PathBuf, SourceFile>, HostError> {
        Ok(self.files.clone())
    }

    fn declaration_blocks(
        &self,
        schema: &BlockSchema,
        _mode: ExpandMode,
    ) -> Result<Vec<DeclarationBlock>, HostError> {
        if let Some(entry) = schema
            .blocks()
            .iter()
            .find(|entry| entry.label_names().len() != 1)
        {
            return Err(HostError::Content {
                message: format!(
                    "schema for '{}' blocks must request exactly one label, got {}",
                    entry.kind(),
                    entry.label_names().len()
                ),
            });
        }

        let blocks: Vec<DeclarationBlock> = self
            .blocks
            .iter()
            .filter(|block| schema.requests(block.kind()))
            .cloned()
            .collect();

        if let Some(block) = blocks.iter().find(|block| block.name().is_empty()) {
            let start = block.def_range().start();
            return Err(HostError::Content {
                message: format!(
                    "'{}' block at {}:{}:{} has an empty name label",
                    block.kind(),
                    block.def_range().filename(),
                    start.line(),
                    start.column()
                ),
            });
        }

        Ok(blocks)
    }

    fn emit_issue(&mut self, issue: Issue) -> Result<(), HostError> {
        self.issues.push(issue);
        Ok(())
    }
}
