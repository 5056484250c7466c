//! Log output for the plugin process.
//!
//! The host captures plugin stderr and may show it verbatim, so events are
//! written there without colour. Stdout stays reserved for the single
//! protocol response.

use std::io;

use once_cell::sync::OnceCell;
use tracing::Subscriber;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{EnvFilter, fmt};

use modlint_config::{Config, LogFormat};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Errors raised while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The configured filter expression does not parse.
    #[error("invalid log filter '{filter}': {source}")]
    Filter {
        /// The rejected expression.
        filter: String,
        /// Parser diagnostic.
        #[source]
        source: ParseError,
    },
    /// Another global subscriber was installed first.
    #[error("failed to install log subscriber: {source}")]
    Subscriber {
        /// Underlying registration error.
        #[source]
        source: SetGlobalDefaultError,
    },
}

/// Installs the global subscriber described by `config`.
///
/// Only the first successful call has an effect.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] when `log_filter` does not parse and
/// [`TelemetryError::Subscriber`] when a different subscriber already owns
/// the process.
pub fn initialise(config: &Config) -> Result<(), TelemetryError> {
    INSTALLED
        .get_or_try_init(|| {
            let subscriber = subscriber_for(config)?;
            tracing::subscriber::set_global_default(subscriber)
                .map_err(|source| TelemetryError::Subscriber { source })
        })
        .copied()
}

fn parse_filter(expression: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(expression).map_err(|source| TelemetryError::Filter {
        filter: expression.to_owned(),
        source,
    })
}

fn subscriber_for(config: &Config) -> Result<Box<dyn Subscriber + Send + Sync>, TelemetryError> {
    let filter = parse_filter(config.log_filter())?;
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339());

    Ok(match config.log_format() {
        LogFormat::Json => Box::new(builder.json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(builder.compact().finish()),
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::level("debug")]
    #[case::target_directive("modlint_rules=trace,warn")]
    #[case::span_directive("modlint_rules[rule]=debug")]
    fn accepts_filter(#[case] expression: &str) {
        assert!(parse_filter(expression).is_ok());
    }

    #[test]
    fn rejected_filter_names_the_expression() {
        let error = parse_filter("modlint_rules=loud").expect_err("filter should be rejected");
        assert!(matches!(
            &error,
            TelemetryError::Filter { filter, .. } if filter == "modlint_rules=loud"
        ));
        assert!(error.to_string().starts_with("invalid log filter 'modlint_rules=loud'"));
    }

    #[rstest]
    #[case::json(LogFormat::Json)]
    #[case::compact(LogFormat::Compact)]
    fn builds_subscriber_for_each_format(#[case] log_format: LogFormat) {
        let config = Config {
            log_format,
            ..Config::default()
        };
        assert!(subscriber_for(&config).is_ok());
    }
}
