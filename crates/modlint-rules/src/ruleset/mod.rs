//! The ruleset a plugin serves and its per-request configuration.
//!
//! A [`RuleSet`] owns its rules in registration order. Hosts may switch
//! rules on or off with a [`RuleSetConfig`]; rules not mentioned keep their
//! default unless `disabled_by_default` is set, in which case only rules
//! explicitly enabled run.

use std::collections::BTreeMap;

use modlint_core::Severity;
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::error::RuleSetError;
use crate::host::ConfigurationHost;
use crate::rule::Rule;
use crate::structure::StandardModuleStructureRule;

const BUILTIN_NAME: &str = "structure";

/// Per-rule switch supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether the rule runs.
    pub enabled: bool,
}

/// Ruleset-wide configuration supplied by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetConfig {
    /// Run only rules explicitly enabled in [`Self::rules`].
    #[serde(default)]
    pub disabled_by_default: bool,
    /// Overrides keyed by rule name.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
}

/// Public description of one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDescription {
    /// Rule name.
    pub name: String,
    /// Whether the rule currently runs.
    pub enabled: bool,
    /// Severity of the rule's issues.
    pub severity: Severity,
}

/// Public description of a ruleset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetDescription {
    /// Ruleset name.
    pub name: String,
    /// Ruleset version.
    pub version: String,
    /// Rules in registration order.
    pub rules: Vec<RuleDescription>,
}

struct Entry {
    rule: Box<dyn Rule>,
    enabled: bool,
}

/// A named, versioned collection of rules.
///
/// # Example
///
/// ```
/// use modlint_core::ModuleContext;
/// use modlint_rules::{InMemoryHost, RuleSet};
///
/// let ruleset = RuleSet::builtin();
/// let mut host = InMemoryHost::from_context(&ModuleContext::new(true).with_file("foo.tf", ""));
/// ruleset.check(&mut host).expect("in-memory host never fails");
/// assert_eq!(host.issues().len(), 4);
/// ```
pub struct RuleSet {
    name: String,
    version: String,
    entries: Vec<Entry>,
}

impl RuleSet {
    /// Creates an empty ruleset.
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            entries: Vec::new(),
        }
    }

    /// Creates the ruleset shipped with this crate.
    #[must_use]
    pub fn builtin() -> Self {
        let mut ruleset = Self::new(BUILTIN_NAME, env!("CARGO_PKG_VERSION"));
        ruleset.register(StandardModuleStructureRule::new());
        ruleset
    }

    /// Appends a rule, enabled according to its default.
    pub fn register(&mut self, rule: impl Rule + 'static) {
        let enabled = rule.enabled();
        self.entries.push(Entry {
            rule: Box::new(rule),
            enabled,
        });
    }

    /// Returns the ruleset name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the ruleset version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns rule names in registration order.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.rule.name()).collect()
    }

    /// Returns whether the named rule currently runs.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|entry| entry.rule.name() == name)
            .map(|entry| entry.enabled)
    }

    /// Applies host configuration to the rules.
    ///
    /// # Errors
    ///
    /// Returns [`RuleSetError::UnknownRule`] if the configuration names a
    /// rule this ruleset does not provide. Nothing is changed in that case.
    pub fn apply_config(&mut self, config: &RuleSetConfig) -> Result<(), RuleSetError> {
        if let Some(name) = config
            .rules
            .keys()
            .find(|name| self.is_enabled(name).is_none())
        {
            return Err(RuleSetError::UnknownRule { name: name.clone() });
        }

        for entry in &mut self.entries {
            let default = !config.disabled_by_default && entry.rule.enabled();
            entry.enabled = config
                .rules
                .get(entry.rule.name())
                .map_or(default, |rule| rule.enabled);
        }
        Ok(())
    }

    /// Describes the ruleset and the current state of its rules.
    #[must_use]
    pub fn describe(&self) -> RuleSetDescription {
        RuleSetDescription {
            name: self.name.clone(),
            version: self.version.clone(),
            rules: self
                .entries
                .iter()
                .map(|entry| RuleDescription {
                    name: entry.rule.name().to_owned(),
                    enabled: entry.enabled,
                    severity: entry.rule.severity(),
                })
                .collect(),
        }
    }

    /// Runs every enabled rule against the host's module.
    ///
    /// # Errors
    ///
    /// Returns [`RuleSetError::Host`] for the first rule whose host
    /// interaction fails. Later rules do not run.
    pub fn check(&self, host: &mut dyn ConfigurationHost) -> Result<(), RuleSetError> {
        for entry in &self.entries {
            let name = entry.rule.name();
            if !entry.enabled {
                debug!(rule = name, "rule disabled");
                continue;
            }
            let _span = debug_span!("rule", rule = name).entered();
            entry
                .rule
                .check(host)
                .map_err(|source| RuleSetError::Host {
                    rule: name.to_owned(),
                    source,
                })?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("rules", &self.rule_names())
            .finish()
    }
}
