//! Source position and range types for locating declarations.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// A line and column position within a configuration file.
///
/// Both fields are 1-based, matching the positions reported by the
/// configuration host.
///
/// # Example
///
/// ```
/// use modlint_core::Position;
///
/// let pos = Position::new(2, 13);
/// assert_eq!(pos.line(), 2);
/// assert_eq!(pos.column(), 13);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
}

impl Position {
    /// The first character of a file.
    pub const INITIAL: Self = Self::new(1, 1);

    /// Creates a new position.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns the 1-based line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the 1-based column number.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

/// A named file together with a start and end position.
///
/// Ranges reported for absent files use [`SourceRange::file_start`], whose
/// start and end are both [`Position::INITIAL`]. The file in such a range
/// need not exist; it only labels the diagnostic.
///
/// # Example
///
/// ```
/// use modlint_core::{Position, SourceRange};
///
/// let range = SourceRange::new("main.tf", Position::new(2, 1), Position::new(2, 13));
/// assert_eq!(range.filename(), "main.tf");
/// assert_eq!(range.end().column(), 13);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRange {
    filename: Utf8PathBuf,
    start: Position,
    end: Position,
}

impl SourceRange {
    /// Creates a range within `filename`.
    #[must_use]
    pub fn new(filename: impl Into<Utf8PathBuf>, start: Position, end: Position) -> Self {
        Self {
            filename: filename.into(),
            start,
            end,
        }
    }

    /// Creates the sentinel range pointing at the start of `filename`.
    #[must_use]
    pub fn file_start(filename: impl Into<Utf8PathBuf>) -> Self {
        Self::new(filename, Position::INITIAL, Position::INITIAL)
    }

    /// Returns the file the range belongs to.
    #[must_use]
    pub fn filename(&self) -> &Utf8Path {
        &self.filename
    }

    /// Returns the start position.
    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Returns the end position.
    #[must_use]
    pub const fn end(&self) -> Position {
        self.end
    }
}
