//! Diagnostics produced by rules and the issues reported to a host.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::span::SourceRange;

/// Severity attached to a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The configuration is wrong and must be fixed.
    Error,
    /// The configuration works but breaks a convention.
    Warning,
    /// Informational only.
    Notice,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
            Self::Notice => f.write_str("notice"),
        }
    }
}

/// A problem found while evaluating a module.
///
/// # Example
///
/// ```
/// use modlint_core::{Diagnostic, Severity, SourceRange};
///
/// let diag = Diagnostic::new(
///     "Module should include a main.tf file as the primary entrypoint",
///     SourceRange::file_start("main.tf"),
///     Severity::Warning,
/// );
/// assert_eq!(diag.severity(), Severity::Warning);
/// assert_eq!(diag.range().filename(), "main.tf");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    message: String,
    range: SourceRange,
    severity: Severity,
}

impl Diagnostic {
    /// Creates a diagnostic.
    #[must_use]
    pub fn new(message: impl Into<String>, range: SourceRange, severity: Severity) -> Self {
        Self {
            message: message.into(),
            range,
            severity,
        }
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the location the diagnostic points at.
    #[must_use]
    pub const fn range(&self) -> &SourceRange {
        &self.range
    }

    /// Returns the severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }
}

/// A diagnostic tagged with the name of the rule that produced it.
///
/// This is the unit a rule hands to its host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    rule: String,
    #[serde(flatten)]
    diagnostic: Diagnostic,
}

impl Issue {
    /// Creates an issue for `rule`.
    #[must_use]
    pub fn new(rule: impl Into<String>, diagnostic: Diagnostic) -> Self {
        Self {
            rule: rule.into(),
            diagnostic,
        }
    }

    /// Returns the emitting rule's name.
    #[must_use]
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// Returns the underlying diagnostic.
    #[must_use]
    pub const fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    /// Returns the diagnostic message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.diagnostic.message()
    }

    /// Returns the diagnostic range.
    #[must_use]
    pub const fn range(&self) -> &SourceRange {
        self.diagnostic.range()
    }
}
