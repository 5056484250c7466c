//! Behaviour-driven tests for the plugin protocol.

use std::str::FromStr;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use modlint_core::{ModulePath, Severity};

use crate::protocol::{FilePayload, ModulePayload, PluginOutput, PluginRequest, PluginResponse};

use super::respond;

// ---------------------------------------------------------------------------
// Typed wrappers for Gherkin step parameters
// ---------------------------------------------------------------------------

/// A quoted string value from a Gherkin feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuotedString(String);

impl FromStr for QuotedString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim_matches('"').to_owned()))
    }
}

impl QuotedString {
    fn as_str(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Test world
// ---------------------------------------------------------------------------

#[derive(Default)]
struct TestWorld {
    input: String,
    response: Option<PluginResponse>,
}

#[fixture]
fn world() -> TestWorld {
    TestWorld::default()
}

fn check_request(path: ModulePath, files: &str) -> String {
    let payload = ModulePayload::new(
        path,
        files
            .split(',')
            .map(|file| FilePayload::new(file.trim(), ""))
            .collect(),
        Vec::new(),
    );
    let request = PluginRequest::Check {
        module: payload,
        config: modlint_rules::RuleSetConfig::default(),
    };
    let mut line = serde_json::to_string(&request).expect("serialize request");
    line.push('\n');
    line
}

fn response(world: &TestWorld) -> &PluginResponse {
    world.response.as_ref().expect("no response captured")
}

// ---------------------------------------------------------------------------
// Given steps
// ---------------------------------------------------------------------------

#[given("a describe request")]
fn given_describe(world: &mut TestWorld) {
    world.input = String::from("{\"operation\":\"describe\"}\n");
}

#[given("a check request for a root module with files {files}")]
fn given_root_check(world: &mut TestWorld, files: QuotedString) {
    world.input = check_request(ModulePath::root(), files.as_str());
}

#[given("a check request for a child module with files {files}")]
fn given_child_check(world: &mut TestWorld, files: QuotedString) {
    world.input = check_request(ModulePath::new(vec![String::from("child")]), files.as_str());
}

#[given("an empty request")]
fn given_empty(world: &mut TestWorld) {
    world.input = String::new();
}

// ---------------------------------------------------------------------------
// When steps
// ---------------------------------------------------------------------------

#[when("the plugin handles the request")]
fn when_handled(world: &mut TestWorld) {
    world.response = Some(respond(&world.input));
}

// ---------------------------------------------------------------------------
// Then steps
// ---------------------------------------------------------------------------

#[then("the response is successful")]
fn then_success(world: &mut TestWorld) {
    let response = response(world);
    assert!(response.is_success(), "unexpected failure: {response:?}");
}

#[then("the response describes rule {name}")]
fn then_describes_rule(world: &mut TestWorld, name: QuotedString) {
    let expected = name.as_str();
    let PluginOutput::Ruleset { ruleset } = response(world).output() else {
        panic!("expected ruleset output");
    };
    assert!(
        ruleset.rules.iter().any(|rule| rule.name == expected),
        "rule '{expected}' missing from {:?}",
        ruleset.rules
    );
}

#[then("{count} issue(s) are returned")]
fn then_issue_count(world: &mut TestWorld, count: usize) {
    let PluginOutput::Issues { issues } = response(world).output() else {
        panic!("expected issues output");
    };
    assert_eq!(issues.len(), count, "unexpected issues: {issues:?}");
}

#[then("every issue is a warning from {rule}")]
fn then_every_issue_from(world: &mut TestWorld, rule: QuotedString) {
    let expected = rule.as_str();
    let PluginOutput::Issues { issues } = response(world).output() else {
        panic!("expected issues output");
    };
    assert!(issues.iter().all(|issue| {
        issue.rule() == expected && issue.diagnostic().severity() == Severity::Warning
    }));
}

#[then("the response fails with a message containing {text}")]
fn then_fails_with(world: &mut TestWorld, text: QuotedString) {
    let expected = text.as_str();
    let response = response(world);
    assert!(!response.is_success());
    assert!(
        response
            .diagnostics()
            .iter()
            .any(|diagnostic| diagnostic.message().contains(expected)),
        "expected '{expected}' in {:?}",
        response.diagnostics()
    );
}

// ---------------------------------------------------------------------------
// Scenario registration
// ---------------------------------------------------------------------------

#[scenario(path = "tests/features/plugin_protocol.feature")]
fn plugin_protocol_behaviour(world: TestWorld) {
    let _ = world;
}
