//! The standard module structure rule.
//!
//! A standard module keeps its entrypoint in `main.tf`, documents itself in
//! `README.md`, declares inputs in `variables.tf`, and declares outputs in
//! `outputs.tf`. This rule reports missing conventional files and
//! `variable`/`output` blocks declared anywhere else.
//!
//! Files whose name ends in `.json` are treated as generated. A module made
//! only of JSON files gets no missing-file reports, and a block declared in
//! a JSON file is never asked to move, even when the module also has native
//! files.

use std::collections::HashSet;

use camino::{Utf8Path, Utf8PathBuf};
use modlint_core::{
    BlockKind, BlockSchema, BlockSchemaEntry, ConventionalFile, DeclarationBlock, Diagnostic,
    ExpandMode, Issue, ModuleContext, Severity, SourceRange,
};
use tracing::{debug, trace};

use crate::error::HostError;
use crate::host::ConfigurationHost;
use crate::rule::Rule;

const RULE_NAME: &str = "standard_module_structure";
const JSON_SUFFIX: &str = ".json";

/// Checks that a root module follows the standard module layout.
///
/// # Example
///
/// ```
/// use modlint_core::ModuleContext;
/// use modlint_rules::StandardModuleStructureRule;
///
/// let rule = StandardModuleStructureRule::new();
/// let context = ModuleContext::new(true).with_file("foo.tf", "");
/// let diagnostics = rule.evaluate(&context);
/// assert_eq!(diagnostics.len(), 4);
/// assert_eq!(
///     diagnostics[0].message(),
///     "Module should include a main.tf file as the primary entrypoint",
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardModuleStructureRule;

impl StandardModuleStructureRule {
    /// Creates the rule.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the schema the rule requests from the host.
    #[must_use]
    pub fn schema() -> BlockSchema {
        BlockSchema::new(vec![
            BlockSchemaEntry::new(BlockKind::Variable, vec![String::from("name")]),
            BlockSchemaEntry::new(BlockKind::Output, vec![String::from("name")]),
        ])
    }

    /// Evaluates `context` and returns diagnostics in report order.
    ///
    /// Missing files come first (main, readme, variables, outputs), then
    /// misplaced variables, then misplaced outputs, each in discovery order.
    /// Child modules and modules without files yield nothing.
    #[must_use]
    pub fn evaluate(&self, context: &ModuleContext) -> Vec<Diagnostic> {
        if !context.is_root() {
            debug!(rule = RULE_NAME, "skipping child module");
            return Vec::new();
        }
        if context.files().is_empty() {
            debug!(rule = RULE_NAME, "skipping directory without configuration files");
            return Vec::new();
        }

        let mut diagnostics = Vec::new();
        self.check_files(context, &mut diagnostics);
        self.check_placement(context, BlockKind::Variable, &mut diagnostics);
        self.check_placement(context, BlockKind::Output, &mut diagnostics);
        diagnostics
    }

    fn check_files(&self, context: &ModuleContext, diagnostics: &mut Vec<Diagnostic>) {
        if only_json(context.files().keys()) {
            debug!(rule = RULE_NAME, "module is JSON only; skipping file checks");
            return;
        }

        let dir = context
            .files()
            .keys()
            .next()
            .and_then(|path| path.parent())
            .map_or_else(Utf8PathBuf::new, Utf8Path::to_path_buf);
        let present: HashSet<&str> = context
            .files()
            .keys()
            .filter_map(|path| path.file_name())
            .collect();

        for file in ConventionalFile::ALL {
            if present.contains(file.file_name()) {
                continue;
            }
            let message = match file {
                ConventionalFile::Main => {
                    format!("Module should include a {file} file as the primary entrypoint")
                }
                ConventionalFile::Readme => format!(
                    "Module should include a {file} file with a comprehensive description of the module"
                ),
                ConventionalFile::Variables if context.has_blocks(BlockKind::Variable) => continue,
                ConventionalFile::Outputs if context.has_blocks(BlockKind::Output) => continue,
                ConventionalFile::Variables | ConventionalFile::Outputs => {
                    format!("Module should include an empty {file} file")
                }
            };
            diagnostics.push(self.diagnostic(
                message,
                SourceRange::file_start(dir.join(file.file_name())),
            ));
        }
    }

    fn check_placement(
        &self,
        context: &ModuleContext,
        kind: BlockKind,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let expected = ConventionalFile::home_of(kind).file_name();
        for block in context.blocks_of(kind) {
            let filename = block.def_range().filename();
            if should_move(filename, expected) {
                diagnostics.push(self.misplaced(block, filename, expected));
            }
        }
    }

    fn misplaced(&self, block: &DeclarationBlock, filename: &Utf8Path, expected: &str) -> Diagnostic {
        self.diagnostic(
            format!(
                "{} {} should be moved from {filename} to {expected}",
                block.kind(),
                quote(block.name())
            ),
            block.def_range().clone(),
        )
    }

    fn diagnostic(&self, message: String, range: SourceRange) -> Diagnostic {
        Diagnostic::new(message, range, self.severity())
    }
}

impl Rule for StandardModuleStructureRule {
    fn name(&self) -> &'static str {
        RULE_NAME
    }

    fn enabled(&self) -> bool {
        true
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, host: &mut dyn ConfigurationHost) -> Result<(), HostError> {
        let path = host.module_path()?;
        if !path.is_root() {
            debug!(rule = RULE_NAME, module = %path, "skipping child module");
            return Ok(());
        }

        let files = host.files()?;
        if files.is_empty() {
            debug!(rule = RULE_NAME, "skipping directory without configuration files");
            return Ok(());
        }

        let blocks = host.declaration_blocks(&Self::schema(), ExpandMode::None)?;
        let context = ModuleContext::from_parts(true, files, blocks);

        for diagnostic in self.evaluate(&context) {
            trace!(rule = RULE_NAME, message = diagnostic.message(), "emitting issue");
            host.emit_issue(Issue::new(RULE_NAME, diagnostic))?;
        }
        Ok(())
    }
}

fn only_json<'a>(paths: impl IntoIterator<Item = &'a Utf8PathBuf>) -> bool {
    let mut paths = paths.into_iter().peekable();
    paths.peek().is_some() && paths.all(|path| is_json(path))
}

/// Matches any final component ending in `.json`, including a bare `.json`.
fn is_json(path: &Utf8Path) -> bool {
    path.file_name().is_some_and(|name| name.ends_with(JSON_SUFFIX))
}

fn should_move(path: &Utf8Path, expected: &str) -> bool {
    if is_json(path) {
        return false;
    }
    path.file_name() != Some(expected)
}

/// Double-quotes `value`. Non-printable characters become `\a`-style,
/// `\xNN`, `\uNNNN` or `\UNNNNNNNN` escapes.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\u{7}' => quoted.push_str("\\a"),
            '\u{8}' => quoted.push_str("\\b"),
            '\u{c}' => quoted.push_str("\\f"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{b}' => quoted.push_str("\\v"),
            ch if ch.is_control() || (ch.is_whitespace() && ch != ' ') => {
                quoted.push_str(&escape_code_point(ch));
            }
            ch => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}

fn escape_code_point(ch: char) -> String {
    let code = u32::from(ch);
    if code < 0x80 {
        format!("\\x{code:02x}")
    } else if code < 0x1_0000 {
        format!("\\u{code:04x}")
    } else {
        format!("\\U{code:08x}")
    }
}
