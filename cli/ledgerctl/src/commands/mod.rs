//! CLI commands.

mod checksum;
mod config;
mod evm;
mod nft;
mod parse;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ledger_id::{EntityKind, LedgerId};

use crate::config::Config;
use crate::output::OutputFormat;

/// ledgerctl - Inspect and convert ledger entity IDs (offline).
#[derive(Debug, Parser)]
#[command(name = "ledgerctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Ledger used for checksums (mainnet, testnet, previewnet, or hex).
    #[arg(long, global = true, env = "LEDGERCTL_LEDGER")]
    ledger: Option<LedgerId>,

    /// Log filter (overridden by RUST_LOG).
    #[arg(long, global = true, env = "LEDGERCTL_LOG_LEVEL")]
    log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse entity IDs and show their parts.
    Parse(parse::ParseCommand),

    /// Compute or verify ID checksums.
    Checksum(checksum::ChecksumCommand),

    /// Convert between entity IDs and EVM (solidity) addresses.
    Evm(evm::EvmCommand),

    /// Parse NFT IDs (`token/serial`).
    Nft(nft::NftCommand),

    /// Show or change saved settings.
    Config(config::ConfigCommand),

    /// Show CLI version.
    Version,
}

impl Commands {
    fn uses_saved_config(&self) -> bool {
        match self {
            Commands::Config(cmd) => cmd.uses_saved_config(),
            _ => true,
        }
    }
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let config = if self.command.uses_saved_config() {
            Config::load()?
        } else {
            Config::default()
        };

        let log_level = self.log_level.as_deref().unwrap_or(&config.log_level);
        crate::logging::init(log_level, self.log_json)?;

        let ledger = self.ledger.unwrap_or_else(|| config.ledger.clone());
        tracing::debug!(%ledger, format = ?self.format, "configuration loaded");

        let ctx = CommandContext {
            config,
            ledger,
            format: self.format,
        };

        match self.command {
            Commands::Parse(cmd) => cmd.run(ctx),
            Commands::Checksum(cmd) => cmd.run(ctx),
            Commands::Evm(cmd) => cmd.run(ctx),
            Commands::Nft(cmd) => cmd.run(ctx),
            Commands::Config(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("ledgerctl {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub ledger: LedgerId,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Resolve the entity kind, preferring the flag over the config.
    pub fn resolve_kind(&self, flag: Option<EntityKind>) -> EntityKind {
        flag.unwrap_or(self.config.kind)
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_global_flags() {
        let cli = Cli::try_parse_from([
            "ledgerctl",
            "parse",
            "0.0.98",
            "--ledger",
            "testnet",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.ledger, Some(LedgerId::TESTNET));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_rejects_bad_ledger() {
        let result = Cli::try_parse_from(["ledgerctl", "--ledger", "devnet", "version"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_kind_prefers_flag() {
        let ctx = CommandContext {
            config: Config {
                kind: EntityKind::Token,
                ..Config::default()
            },
            ledger: LedgerId::MAINNET,
            format: OutputFormat::Table,
        };
        assert_eq!(ctx.resolve_kind(None), EntityKind::Token);
        assert_eq!(
            ctx.resolve_kind(Some(EntityKind::File)),
            EntityKind::File
        );
    }

    #[test]
    fn test_config_clear_skips_saved_config() {
        let cli = Cli::try_parse_from(["ledgerctl", "config", "clear"]).unwrap();
        assert!(!cli.command.uses_saved_config());

        let cli = Cli::try_parse_from(["ledgerctl", "config", "show"]).unwrap();
        assert!(cli.command.uses_saved_config());

        let cli = Cli::try_parse_from(["ledgerctl", "parse", "0.0.98"]).unwrap();
        assert!(cli.command.uses_saved_config());
    }

    #[test]
    fn test_list_commands_require_input() {
        for args in [
            &["ledgerctl", "parse"][..],
            &["ledgerctl", "checksum", "--verify"][..],
            &["ledgerctl", "evm", "encode"][..],
            &["ledgerctl", "evm", "decode"][..],
            &["ledgerctl", "nft"][..],
        ] {
            assert!(Cli::try_parse_from(args).is_err(), "accepted {args:?}");
        }
    }
}
