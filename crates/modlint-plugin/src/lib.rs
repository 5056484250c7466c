//! One-shot plugin serving the `modlint` structure ruleset.
//!
//! The plugin reads exactly one JSONL [`PluginRequest`] from stdin, runs the
//! ruleset against the module it carries, and writes one JSONL
//! [`PluginResponse`] to stdout. Request-level failures are reported inside
//! the response; only a failure to write the response is an error of the
//! process itself.

pub mod protocol;
pub mod telemetry;

#[cfg(test)]
mod tests;

use std::io::{BufRead, Write};

use modlint_rules::RuleSet;
use thiserror::Error;
use tracing::{debug, info};

pub use self::protocol::{
    DiagnosticSeverity, FilePayload, ModulePayload, PluginDiagnostic, PluginOutput, PluginRequest,
    PluginResponse,
};

/// Errors raised while answering a request.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Writing the plugin response to stdout failed.
    #[error("failed to write plugin response: {source}")]
    Write {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Serializing the response payload failed.
    #[error("failed to serialize plugin response: {source}")]
    Serialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}

/// Answers one request from `stdin` on `stdout` using `ruleset`.
///
/// # Errors
///
/// Returns an error if the response cannot be serialized or written.
pub fn run_with_ruleset(
    stdin: &mut impl BufRead,
    stdout: &mut impl Write,
    mut ruleset: RuleSet,
) -> Result<(), DispatchError> {
    let response = match read_request(stdin)
        .and_then(|request| execute_request(&mut ruleset, request))
    {
        Ok(resp) => resp,
        Err(message) => failure_response(message),
    };

    let payload = serde_json::to_string(&response)
        .map_err(|source| DispatchError::Serialize { source })?;
    stdout
        .write_all(payload.as_bytes())
        .map_err(|source| DispatchError::Write { source })?;
    stdout
        .write_all(b"\n")
        .map_err(|source| DispatchError::Write { source })?;
    stdout
        .flush()
        .map_err(|source| DispatchError::Write { source })
}

/// Answers one request using the built-in ruleset.
///
/// # Errors
///
/// Returns an error if the response cannot be written.
pub fn run(stdin: &mut impl BufRead, stdout: &mut impl Write) -> Result<(), DispatchError> {
    run_with_ruleset(stdin, stdout, RuleSet::builtin())
}

fn read_request(stdin: &mut impl BufRead) -> Result<PluginRequest, String> {
    let mut line = String::new();
    let bytes_read = stdin
        .read_line(&mut line)
        .map_err(|error| format!("failed to read request: {error}"))?;

    if bytes_read == 0 {
        return Err(String::from("plugin request was empty"));
    }

    serde_json::from_str(line.trim())
        .map_err(|error| format!("invalid plugin request JSON: {error}"))
}

fn execute_request(ruleset: &mut RuleSet, request: PluginRequest) -> Result<PluginResponse, String> {
    match request {
        PluginRequest::Describe => {
            debug!(ruleset = ruleset.name(), "describing ruleset");
            Ok(PluginResponse::success(PluginOutput::Ruleset {
                ruleset: ruleset.describe(),
            }))
        }
        PluginRequest::Check { module, config } => {
            ruleset
                .apply_config(&config)
                .map_err(|error| error.to_string())?;
            let module_path = module.path().to_string();
            let mut host = module.into_host();
            ruleset.check(&mut host).map_err(|error| error.to_string())?;
            let issues = host.into_issues();
            info!(module = %module_path, issues = issues.len(), "module checked");
            Ok(PluginResponse::success(PluginOutput::Issues { issues }))
        }
    }
}

pub(crate) fn failure_response(message: String) -> PluginResponse {
    PluginResponse::failure(vec![PluginDiagnostic::new(
        DiagnosticSeverity::Error,
        message,
    )])
}
