//! Structural convention rules for infrastructure-as-code modules.
//!
//! The crate's centrepiece is [`StandardModuleStructureRule`], which checks
//! that a root module carries its conventional files and keeps `variable`
//! and `output` declarations where they belong. Rules never read files or
//! parse configuration themselves: they consume a module through the
//! [`ConfigurationHost`] trait and report through it.
//!
//! # Architecture
//!
//! - [`host`] — the host interface and an in-memory implementation
//! - [`rule`] — the [`Rule`] contract
//! - [`structure`] — the standard module structure rule
//! - [`ruleset`] — the served [`RuleSet`] and its configuration
//! - [`error`] — host and ruleset failures
//!
//! # Example
//!
//! ```
//! use modlint_core::ModuleContext;
//! use modlint_rules::{InMemoryHost, Rule, StandardModuleStructureRule};
//!
//! let context = ModuleContext::new(true)
//!     .with_file("main.tf", "")
//!     .with_file("variables.tf", "")
//!     .with_file("outputs.tf", "")
//!     .with_file("README.md", "");
//! let mut host = InMemoryHost::from_context(&context);
//! StandardModuleStructureRule::new()
//!     .check(&mut host)
//!     .expect("in-memory host never fails");
//! assert!(host.issues().is_empty());
//! ```

pub mod error;
pub mod host;
pub mod rule;
pub mod ruleset;
pub mod structure;

#[cfg(test)]
mod tests;

pub use self::error::{HostError, RuleSetError};
pub use self::host::{ConfigurationHost, InMemoryHost};
pub use self::rule::Rule;
pub use self::ruleset::{
    RuleConfig, RuleDescription, RuleSet, RuleSetConfig, RuleSetDescription,
};
pub use self::structure::StandardModuleStructureRule;
