//! Logging initialisation for the nodal CLI.
//!
//! Installs a global `tracing` subscriber writing to `stderr`, so summaries on
//! `stdout` stay machine-readable, and bridges the `log` facade.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing::debug;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "NODAL_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying parse failure.
        #[source]
        source: env::VarError,
    },
    /// Unsupported log format requested via `NODAL_LOG_FORMAT`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
    /// Failed to install the global tracing subscriber.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Output formats accepted by `NODAL_LOG_FORMAT`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Multi-line human-readable output.
    #[default]
    Human,
    /// One JSON object per event, including the active span list.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

impl LogFormat {
    /// Reads the format from `NODAL_LOG_FORMAT`, defaulting to
    /// [`LogFormat::Human`] when the variable is unset.
    ///
    /// # Errors
    /// Returns [`LoggingError`] when the variable is not valid Unicode or
    /// names an unknown format.
    pub fn from_env() -> Result<Self, LoggingError> {
        match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
                name: LOG_FORMAT_ENV,
                source,
            }),
        }
    }
}

/// Install global structured logging if it has not already been configured.
///
/// The level is controlled via `RUST_LOG` and defaults to `info`.
///
/// # Errors
/// Returns [`LoggingError`] if `NODAL_LOG_FORMAT` is invalid. A subscriber
/// installed elsewhere is kept and is not reported as an error.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    match install_subscriber(LogFormat::from_env()?) {
        Ok(()) => {}
        Err(LoggingError::InstallFailed { source }) => {
            debug!(error = %source, "keeping the existing tracing subscriber");
        }
        Err(err) => return Err(err),
    }
    let _ = INITIALISED.set(());
    Ok(())
}

fn install_subscriber(format: LogFormat) -> Result<(), LoggingError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::FULL)
        .with_writer(std::io::stderr);

    let fmt_layer = match format {
        LogFormat::Human => fmt_layer.boxed(),
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // Best-effort: another logger may already own the `log` slot.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("human", LogFormat::Human)]
    #[case("HUMAN", LogFormat::Human)]
    #[case(" json ", LogFormat::Json)]
    #[case("Json", LogFormat::Json)]
    fn log_format_accepts_supported_values(#[case] raw: &str, #[case] expected: LogFormat) {
        let format: LogFormat = raw.parse().expect("format must parse");
        assert_eq!(format, expected);
    }

    #[rstest]
    #[case("xml", "xml")]
    #[case(" Pretty ", "pretty")]
    #[case("", "")]
    fn log_format_rejects_unknown_values(#[case] raw: &str, #[case] reported: &str) {
        let err = raw.parse::<LogFormat>().expect_err("format is not supported");
        match err {
            LoggingError::UnsupportedFormat { provided } => assert_eq!(provided, reported),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn human_output_is_the_default() {
        assert_eq!(LogFormat::default(), LogFormat::Human);
    }

    #[test]
    fn init_logging_is_idempotent() {
        init_logging().expect("logging must initialise");
        init_logging().expect("subsequent calls must be no-ops");
    }
}
