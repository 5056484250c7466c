//! The conventional file names of a standard module layout.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::block::BlockKind;

/// One of the files every standard module is expected to contain.
///
/// The file names are fixed and not configurable.
///
/// # Example
///
/// ```
/// use modlint_core::ConventionalFile;
///
/// assert_eq!(ConventionalFile::Main.file_name(), "main.tf");
/// assert_eq!(ConventionalFile::Readme.file_name(), "README.md");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConventionalFile {
    /// The primary entrypoint.
    Main,
    /// The module's documentation.
    Readme,
    /// Input variable declarations.
    Variables,
    /// Output declarations.
    Outputs,
}

impl ConventionalFile {
    /// All conventional files, in the order their absence is reported.
    pub const ALL: [Self; 4] = [Self::Main, Self::Readme, Self::Variables, Self::Outputs];

    /// Returns the expected base name of the file.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Main => "main.tf",
            Self::Readme => "README.md",
            Self::Variables => "variables.tf",
            Self::Outputs => "outputs.tf",
        }
    }

    /// Returns the file where declarations of `kind` belong.
    #[must_use]
    pub const fn home_of(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Variable => Self::Variables,
            BlockKind::Output => Self::Outputs,
        }
    }
}

impl fmt::Display for ConventionalFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
