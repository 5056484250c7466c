//! IPC protocol types for host-plugin communication.
//!
//! The protocol is a single-line JSONL exchange over stdio. The host writes
//! one [`PluginRequest`] line to the plugin's stdin and closes it. The
//! plugin writes one [`PluginResponse`] line to stdout and exits. Plugin
//! stderr carries logs and is not part of the protocol.

use camino::{Utf8Path, Utf8PathBuf};
use modlint_core::{DeclarationBlock, Issue, ModulePath, SourceFile};
use modlint_rules::{InMemoryHost, RuleSetConfig, RuleSetDescription};
use serde::{Deserialize, Serialize};

/// Request sent from the host to the plugin on stdin.
///
/// # Example
///
/// ```
/// use modlint_plugin::protocol::PluginRequest;
///
/// let request: PluginRequest = serde_json::from_str(r#"{"operation":"describe"}"#)
///     .expect("valid request");
/// assert_eq!(request, PluginRequest::Describe);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum PluginRequest {
    /// Asks for the ruleset's name, version, and rules.
    Describe,
    /// Asks for the ruleset to check one module.
    Check {
        /// The module to check, already parsed by the host.
        module: ModulePayload,
        /// Rule switches to apply before checking.
        #[serde(default)]
        config: RuleSetConfig,
    },
}

/// A module as sent by the host: its address, files, and parsed blocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModulePayload {
    #[serde(default)]
    path: ModulePath,
    files: Vec<FilePayload>,
    #[serde(default)]
    blocks: Vec<DeclarationBlock>,
}

impl ModulePayload {
    /// Creates a payload.
    #[must_use]
    pub const fn new(path: ModulePath, files: Vec<FilePayload>, blocks: Vec<DeclarationBlock>) -> Self {
        Self {
            path,
            files,
            blocks,
        }
    }

    /// Returns the module address.
    #[must_use]
    pub const fn path(&self) -> &ModulePath {
        &self.path
    }

    /// Returns the file payloads.
    #[must_use]
    pub fn files(&self) -> &[FilePayload] {
        &self.files
    }

    /// Returns the declaration blocks in discovery order.
    #[must_use]
    pub fn blocks(&self) -> &[DeclarationBlock] {
        &self.blocks
    }

    /// Turns the payload into a host rules can run against.
    #[must_use]
    pub fn into_host(self) -> InMemoryHost {
        let files = self
            .files
            .into_iter()
            .map(|file| (file.path, SourceFile::new(file.content)))
            .collect();
        InMemoryHost::new(self.path, files, self.blocks)
    }
}

/// One module file passed in the request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilePayload {
    path: Utf8PathBuf,
    #[serde(default)]
    content: String,
}

impl FilePayload {
    /// Creates a file payload.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Returns the file content.
    #[must_use]
    pub const fn content(&self) -> &str {
        self.content.as_str()
    }
}

/// Response sent from the plugin to the host on stdout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PluginResponse {
    success: bool,
    output: PluginOutput,
    #[serde(default)]
    diagnostics: Vec<PluginDiagnostic>,
}

impl PluginResponse {
    /// Creates a successful response with the given output.
    #[must_use]
    pub const fn success(output: PluginOutput) -> Self {
        Self {
            success: true,
            output,
            diagnostics: Vec::new(),
        }
    }

    /// Creates a failed response with diagnostics.
    #[must_use]
    pub const fn failure(diagnostics: Vec<PluginDiagnostic>) -> Self {
        Self {
            success: false,
            output: PluginOutput::Empty,
            diagnostics,
        }
    }

    /// Returns whether the plugin completed successfully.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Returns the plugin output.
    #[must_use]
    pub const fn output(&self) -> &PluginOutput {
        &self.output
    }

    /// Returns the diagnostic messages.
    #[must_use]
    pub fn diagnostics(&self) -> &[PluginDiagnostic] {
        &self.diagnostics
    }
}

/// Output payload from the plugin, discriminated by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PluginOutput {
    /// Ruleset metadata answering [`PluginRequest::Describe`].
    Ruleset {
        /// The served ruleset.
        ruleset: RuleSetDescription,
    },
    /// Issues answering [`PluginRequest::Check`], in emission order.
    Issues {
        /// Emitted issues.
        issues: Vec<Issue>,
    },
    /// Nothing to report.
    Empty,
}

/// A message about the plugin run itself, not about the module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PluginDiagnostic {
    severity: DiagnosticSeverity,
    message: String,
}

impl PluginDiagnostic {
    /// Creates a diagnostic with the given severity and message.
    #[must_use]
    pub fn new(severity: DiagnosticSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// Returns the severity level.
    #[must_use]
    pub const fn severity(&self) -> DiagnosticSeverity {
        self.severity
    }

    /// Returns the message text.
    #[must_use]
    pub const fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Severity level for plugin diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticSeverity {
    /// A fatal error that prevented the plugin from completing.
    Error,
    /// A non-fatal warning.
    Warning,
    /// An informational message.
    Info,
}

#[cfg(test)]
mod tests;
