//! Formats for the log lines the plugin writes to stderr.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Shape of each log line.
///
/// Values parse without regard to case, so `--log-format JSON` and
/// `MODLINT_LOG_FORMAT=json` select the same format.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One flattened JSON object per event, for hosts that parse plugin logs.
    Json,
    /// Terse single-line text, for a person reading host output.
    #[default]
    Compact,
}

/// Error returned when text names no [`LogFormat`].
pub type LogFormatParseError = strum::ParseError;
