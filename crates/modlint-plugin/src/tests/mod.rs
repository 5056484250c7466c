//! Unit and behavioural tests for the plugin dispatcher.

mod behaviour;

use std::io::Cursor;

use rstest::rstest;

use modlint_rules::RuleSet;

use crate::protocol::{DiagnosticSeverity, PluginOutput, PluginResponse};
use crate::{run, run_with_ruleset};

/// Feeds `input` to the dispatcher and parses the single response line.
pub(crate) fn respond(input: &str) -> PluginResponse {
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut stdout = Vec::new();
    run(&mut stdin, &mut stdout).expect("dispatch");
    let text = String::from_utf8(stdout).expect("utf-8 response");
    assert!(text.ends_with('\n'), "response must be newline terminated");
    assert_eq!(text.lines().count(), 1, "response must be a single line");
    serde_json::from_str(text.trim()).expect("response JSON")
}

fn error_message(response: &PluginResponse) -> &str {
    assert!(!response.is_success(), "expected failure: {response:?}");
    let diagnostic = response.diagnostics().first().expect("diagnostic");
    assert_eq!(diagnostic.severity(), DiagnosticSeverity::Error);
    diagnostic.message()
}

#[test]
fn describe_returns_builtin_ruleset() {
    let response = respond("{\"operation\":\"describe\"}\n");
    assert!(response.is_success());
    let PluginOutput::Ruleset { ruleset } = response.output() else {
        panic!("expected ruleset output, got {:?}", response.output());
    };
    assert_eq!(ruleset.name, "structure");
    assert_eq!(
        ruleset
            .rules
            .iter()
            .map(|rule| rule.name.as_str())
            .collect::<Vec<_>>(),
        vec!["standard_module_structure"]
    );
}

#[test]
fn check_returns_issues_in_emission_order() {
    let response = respond(concat!(
        r#"{"operation":"check","module":{"files":["#,
        r#"{"path":"main.tf"},{"path":"variables.tf"},{"path":"outputs.tf"},{"path":"README.md"}],"#,
        r#""blocks":[{"kind":"variable","name":"v","def_range":{"filename":"main.tf","#,
        r#""start":{"line":2,"column":1},"end":{"line":2,"column":13}}}]}}"#,
        "\n"
    ));
    assert!(response.is_success());
    let PluginOutput::Issues { issues } = response.output() else {
        panic!("expected issues output, got {:?}", response.output());
    };
    let messages: Vec<&str> = issues.iter().map(|issue| issue.message()).collect();
    assert_eq!(
        messages,
        vec!["variable \"v\" should be moved from main.tf to variables.tf"]
    );
}

#[test]
fn check_honours_rule_config() {
    let response = respond(concat!(
        r#"{"operation":"check","module":{"files":[{"path":"foo.tf"}]},"#,
        r#""config":{"disabled_by_default":true}}"#,
        "\n"
    ));
    assert_eq!(
        response.output(),
        &PluginOutput::Issues { issues: Vec::new() }
    );
}

#[rstest]
#[case::empty("", "plugin request was empty")]
#[case::malformed("{not json}\n", "invalid plugin request JSON")]
#[case::unknown_operation("{\"operation\":\"fix\"}\n", "invalid plugin request JSON")]
#[case::unknown_rule(
    concat!(
        r#"{"operation":"check","module":{"files":[]},"#,
        r#""config":{"rules":{"terraform_naming":{"enabled":true}}}}"#,
        "\n"
    ),
    "terraform_naming"
)]
#[case::empty_block_name(
    concat!(
        r#"{"operation":"check","module":{"files":["#,
        r#"{"path":"main.tf"},{"path":"variables.tf"},{"path":"outputs.tf"},{"path":"README.md"}],"#,
        r#""blocks":[{"kind":"variable","name":"","def_range":{"filename":"main.tf","#,
        r#""start":{"line":1,"column":1},"end":{"line":1,"column":12}}}]}}"#,
        "\n"
    ),
    "'variable' block at main.tf:1:1 has an empty name label"
)]
fn request_failures_become_failure_responses(#[case] input: &str, #[case] expected: &str) {
    let response = respond(input);
    let message = error_message(&response);
    assert!(
        message.contains(expected),
        "expected '{expected}' in '{message}'"
    );
    assert_eq!(response.output(), &PluginOutput::Empty);
}

#[test]
fn custom_ruleset_is_used() {
    let mut stdin = Cursor::new(b"{\"operation\":\"describe\"}\n".to_vec());
    let mut stdout = Vec::new();
    run_with_ruleset(&mut stdin, &mut stdout, RuleSet::new("empty", "9.9.9")).expect("dispatch");
    let response: PluginResponse =
        serde_json::from_slice(stdout.trim_ascii_end()).expect("response JSON");
    let PluginOutput::Ruleset { ruleset } = response.output() else {
        panic!("expected ruleset output");
    };
    assert_eq!(ruleset.version, "9.9.9");
    assert!(ruleset.rules.is_empty());
}

struct BrokenWriter;

impl std::io::Write for BrokenWriter {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_is_reported_to_caller() {
    let mut stdin = Cursor::new(b"{\"operation\":\"describe\"}\n".to_vec());
    let error = run(&mut stdin, &mut BrokenWriter).expect_err("write should fail");
    assert!(matches!(error, crate::DispatchError::Write { .. }));
}
