//! Errors raised at the configuration host boundary and by rulesets.
//!
//! Rules have no fallible logic of their own. Every failure originates in
//! the host, is fatal to the current evaluation, and is handed back to the
//! caller unchanged.

use thiserror::Error;

/// Failures while talking to the configuration host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The host could not report which module is being evaluated.
    #[error("failed to resolve module path: {message}")]
    ModulePath {
        /// Host-supplied failure description.
        message: String,
    },

    /// The host could not list the module's files.
    #[error("failed to list module files: {message}")]
    Files {
        /// Host-supplied failure description.
        message: String,
    },

    /// The host could not supply the requested declaration blocks.
    #[error("failed to read module content: {message}")]
    Content {
        /// Host-supplied failure description.
        message: String,
    },

    /// The host rejected an emitted issue.
    #[error("failed to emit issue: {message}")]
    EmitIssue {
        /// Host-supplied failure description.
        message: String,
    },
}

/// Errors raised while configuring or running a ruleset.
#[derive(Debug, Error)]
pub enum RuleSetError {
    /// The configuration names a rule the ruleset does not provide.
    #[error("rule '{name}' is not provided by this ruleset")]
    UnknownRule {
        /// Name found in the configuration.
        name: String,
    },

    /// A rule aborted because the host failed.
    #[error("rule '{rule}' failed: {source}")]
    Host {
        /// Name of the rule that was running.
        rule: String,
        /// Underlying host failure.
        #[source]
        source: HostError,
    },
}
