//! Tracing subscriber setup.
//!
//! Logs go to stderr so that command output on stdout stays machine-readable.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::CliError;

/// Parse `level` as a filter directive, ignoring `RUST_LOG`.
pub fn parse_filter(level: &str) -> Result<EnvFilter, CliError> {
    EnvFilter::try_new(level).map_err(|e| CliError::InvalidLogLevel {
        level: level.to_string(),
        message: e.to_string(),
    })
}

/// Build the filter: `RUST_LOG` wins, otherwise `level`.
fn build_filter(level: &str) -> Result<EnvFilter, CliError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    parse_filter(level)
}

/// Install the global subscriber.
pub fn init(level: &str, json: bool) -> Result<()> {
    let filter = build_filter(level)?;
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_directives() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert!(build_filter("debug").is_ok());
        assert!(build_filter("ledger_id=trace,warn").is_ok());
    }

    #[test]
    fn test_build_filter_rejects_garbage() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let err = build_filter("ledger_id=loud").unwrap_err();
        assert!(matches!(err, CliError::InvalidLogLevel { .. }));
    }

    #[test]
    fn test_parse_filter_ignores_rust_log() {
        assert!(parse_filter("info").is_ok());
        assert!(matches!(
            parse_filter("ledger_id=loud"),
            Err(CliError::InvalidLogLevel { .. })
        ));
    }
}
