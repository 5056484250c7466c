//! The contract every rule in a ruleset implements.

use modlint_core::Severity;

use crate::error::HostError;
use crate::host::ConfigurationHost;

/// A check run against one module through a configuration host.
pub trait Rule {
    /// Returns the stable rule name used in configuration and reports.
    fn name(&self) -> &'static str;

    /// Returns whether the rule runs when configuration does not say.
    fn enabled(&self) -> bool;

    /// Returns the severity of every issue the rule emits.
    fn severity(&self) -> Severity;

    /// Inspects the host's module and emits issues through it.
    ///
    /// # Errors
    ///
    /// Returns the first [`HostError`] raised by the host; no further
    /// issues are emitted after it.
    fn check(&self, host: &mut dyn ConfigurationHost) -> Result<(), HostError>;
}
