//! Error handling and display for the CLI.

use colored::Colorize;
use ledger_id::IdError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("{0} has no checksum to verify")]
    MissingChecksum(String),

    #[error("Invalid log level '{level}': {message}")]
    InvalidLogLevel { level: String, message: String },
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(hint) = hint_for(err) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

/// Pick a hint for the errors users commonly run into.
fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(id_err) = err.downcast_ref::<IdError>() {
        return match id_err {
            IdError::Malformed { .. } => {
                Some("Entity IDs look like `0.0.1001`, optionally followed by `-checksum`.")
            }
            IdError::ChecksumMismatch { .. } => Some(
                "The ID may come from another ledger. Use --ledger to check it against a different network.",
            ),
            IdError::ShardOutOfRange(_) => {
                Some("EVM addresses can only encode shards up to 4294967295.")
            }
            IdError::InvalidLedgerId(_) => {
                Some("Use mainnet, testnet, previewnet, or a hex-encoded ledger ID.")
            }
            IdError::UnknownKind(_) => {
                Some("Kinds are account, file, contract, topic, token and schedule.")
            }
            IdError::InvalidEvmAddress { .. } => {
                Some("EVM addresses are 40 hex characters, optionally prefixed with `0x`.")
            }
        };
    }

    match err.downcast_ref::<CliError>()? {
        CliError::MissingChecksum(_) => Some("Run `ledgerctl checksum <ID>` to compute one."),
        CliError::InvalidLogLevel { .. } => {
            Some("Use a level such as warn, info or debug, or a RUST_LOG-style filter. `ledgerctl config clear` resets a saved one.")
        }
        CliError::NoConfigDir => Some("Pass settings with flags or LEDGERCTL_* variables instead."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_for_malformed_id() {
        let err: anyhow::Error = ledger_id::EntityId::parse("0.0").unwrap_err().into();
        assert!(hint_for(&err).unwrap().contains("0.0.1001"));
    }

    #[test]
    fn test_hint_survives_context() {
        let err = anyhow::Error::from(IdError::ShardOutOfRange(1 << 40))
            .context("encoding 1099511627776.0.1");
        assert!(hint_for(&err).unwrap().contains("4294967295"));
    }

    #[test]
    fn test_hint_for_cli_error() {
        let err: anyhow::Error = CliError::MissingChecksum("0.0.1".to_string()).into();
        assert!(hint_for(&err).unwrap().contains("ledgerctl checksum"));

        let err: anyhow::Error = IdError::UnknownKind("x".to_string()).into();
        assert!(hint_for(&err).unwrap().contains("schedule"));
    }

    #[test]
    fn test_no_hint_for_other_errors() {
        let err = anyhow::anyhow!("disk on fire");
        assert!(hint_for(&err).is_none());
    }
}
