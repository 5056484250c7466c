//! Crate-level test doubles and behaviour tests.

use std::collections::BTreeMap;

use camino::Utf8PathBuf;
use mockall::mock;
use modlint_core::{BlockSchema, DeclarationBlock, ExpandMode, Issue, ModulePath, SourceFile};

use crate::error::HostError;
use crate::host::ConfigurationHost;


mock! {
    pub(crate) Host {}
    impl ConfigurationHost for Host {
        fn module_path(&self) -> Result<ModulePath, HostError>;
        fn files(&self) -> Result<BTreeMap<Utf8PathBuf, SourceFile>, HostError>;
        fn declaration_blocks(
            &self,
            schema: &BlockSchema,
            mode: ExpandMode,
        ) -> Result<Vec<DeclarationBlock>, HostError>;
        fn emit_issue(&mut self, issue: Issue) -> Result<(), HostError>;
    }
}

/// Builds the file map of a root module from bare paths.
pub(crate) fn files_named(paths: &[&str]) -> BTreeMap<Utf8PathBuf, SourceFile> {
    paths
        .iter()
        .map(|path| (Utf8PathBuf::from(*path), SourceFile::default()))
        .collect()
}
