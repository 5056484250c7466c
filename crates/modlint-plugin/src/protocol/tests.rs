//! Unit tests for protocol serialisation.

use modlint_core::{BlockKind, ModulePath, Position, SourceRange};
use modlint_rules::{ConfigurationHost, RuleConfig};

use super::*;

#[test]
fn check_request_parses_full_payload() {
    let request: PluginRequest = serde_json::from_str(
        r#"{
            "operation": "check",
            "module": {
                "path": [],
                "files": [{"path": "main.tf", "content": "variable \"v\" {}"}],
                "blocks": [{
                    "kind": "variable",
                    "name": "v",
                    "def_range": {
                        "filename": "main.tf",
                        "start": {"line": 1, "column": 1},
                        "end": {"line": 1, "column": 13}
                    }
                }]
            },
            "config": {"rules": {"standard_module_structure": {"enabled": true}}}
        }"#,
    )
    .expect("deserialize");

    let PluginRequest::Check { module, config } = request else {
        panic!("expected a check request");
    };
    assert!(module.path().is_root());
    assert_eq!(module.files().len(), 1);
    assert_eq!(
        module.blocks().first().map(|block| block.kind()),
        Some(BlockKind::Variable)
    );
    assert_eq!(
        config.rules.get("standard_module_structure"),
        Some(&RuleConfig { enabled: true })
    );
}

#[test]
fn check_request_defaults_optional_fields() {
    let request: PluginRequest =
        serde_json::from_str(r#"{"operation":"check","module":{"files":[{"path":"foo.tf"}]}}"#)
            .expect("deserialize");
    let PluginRequest::Check { module, config } = request else {
        panic!("expected a check request");
    };
    assert!(module.path().is_root());
    assert!(module.blocks().is_empty());
    assert_eq!(module.files().first().map(FilePayload::content), Some(""));
    assert!(!config.disabled_by_default);
}

#[test]
fn unknown_operation_is_rejected() {
    let result = serde_json::from_str::<PluginRequest>(r#"{"operation":"fix"}"#);
    assert!(result.is_err());
}

#[test]
fn payload_becomes_host_with_same_module() {
    let payload = ModulePayload::new(
        ModulePath::new(vec![String::from("network")]),
        vec![FilePayload::new("network/main.tf", "")],
        Vec::new(),
    );
    let host = payload.into_host();
    assert!(!host.module_path().expect("path").is_root());
    assert!(
        host.files()
            .expect("files")
            .contains_key(camino::Utf8Path::new("network/main.tf"))
    );
}

#[test]
fn issues_output_serialises_with_kind_tag() {
    let issue = Issue::new(
        "standard_module_structure",
        modlint_core::Diagnostic::new(
            "Module should include an empty outputs.tf file",
            SourceRange::new("outputs.tf", Position::INITIAL, Position::INITIAL),
            modlint_core::Severity::Warning,
        ),
    );
    let response = PluginResponse::success(PluginOutput::Issues {
        issues: vec![issue],
    });
    let json = serde_json::to_value(&response).expect("serialize");
    assert_eq!(json["success"], true);
    assert_eq!(json["output"]["kind"], "issues");
    assert_eq!(
        json["output"]["issues"][0]["rule"],
        "standard_module_structure"
    );

    let parsed: PluginResponse = serde_json::from_value(json).expect("deserialize");
    assert_eq!(parsed, response);
}

#[test]
fn failure_response_carries_error_diagnostic() {
    let response = PluginResponse::failure(vec![PluginDiagnostic::new(
        DiagnosticSeverity::Error,
        "plugin request was empty",
    )]);
    assert!(!response.is_success());
    assert_eq!(response.output(), &PluginOutput::Empty);
    let diagnostic = response.diagnostics().first().expect("diagnostic");
    assert_eq!(diagnostic.severity(), DiagnosticSeverity::Error);
    assert_eq!(diagnostic.message(), "plugin request was empty");
}
