//! Config commands (saved defaults for ledger, log level and kind).

use anyhow::Result;
use clap::{Args, Subcommand};
use ledger_id::{EntityKind, LedgerId};
use serde::Serialize;

use crate::config::{config_path, Config};
use crate::logging;
use crate::output::{print_info, print_single, print_success, OutputFormat};

use super::CommandContext;

/// Manage saved CLI settings.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show the saved settings and the effective ledger.
    Show,

    /// Change saved settings.
    Set(SetArgs),

    /// Delete the saved settings.
    Clear,
}

#[derive(Debug, Args)]
struct SetArgs {
    /// Default ledger for checksums.
    #[arg(long, value_name = "LEDGER")]
    default_ledger: Option<LedgerId>,

    /// Default log filter.
    #[arg(long, value_name = "FILTER")]
    default_log_level: Option<String>,

    /// Default entity kind.
    #[arg(long, value_name = "KIND")]
    default_kind: Option<EntityKind>,
}

#[derive(Debug, Serialize)]
struct ConfigView {
    path: String,
    ledger: LedgerId,
    effective_ledger: LedgerId,
    log_level: String,
    kind: EntityKind,
}

impl ConfigCommand {
    /// Whether this command reads the saved settings. `clear` does not, so it
    /// can reset a config file that no longer loads.
    pub fn uses_saved_config(&self) -> bool {
        !matches!(self.command, ConfigSubcommand::Clear)
    }

    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ConfigSubcommand::Show => show(ctx),
            ConfigSubcommand::Set(args) => set(ctx, args),
            ConfigSubcommand::Clear => clear(ctx.format),
        }
    }
}

fn show(ctx: CommandContext) -> Result<()> {
    let view = ConfigView {
        path: config_path()?.display().to_string(),
        ledger: ctx.config.ledger.clone(),
        effective_ledger: ctx.ledger.clone(),
        log_level: ctx.config.log_level.clone(),
        kind: ctx.config.kind,
    };

    match ctx.format {
        OutputFormat::Json => print_single(&view),
        OutputFormat::Table => {
            println!("path: {}", view.path);
            println!("ledger: {}", view.ledger);
            println!("effective_ledger: {}", view.effective_ledger);
            println!("log_level: {}", view.log_level);
            println!("kind: {}", view.kind);
        }
    }

    Ok(())
}

/// Apply the given settings; returns whether anything was given.
///
/// A log filter is checked before it is stored, since every later command
/// installs it.
fn apply(config: &mut Config, args: SetArgs) -> Result<bool> {
    let mut changed = false;

    if let Some(ledger) = args.default_ledger {
        config.ledger = ledger;
        changed = true;
    }
    if let Some(log_level) = args.default_log_level {
        logging::parse_filter(&log_level)?;
        config.log_level = log_level;
        changed = true;
    }
    if let Some(kind) = args.default_kind {
        config.kind = kind;
        changed = true;
    }

    Ok(changed)
}

fn set(mut ctx: CommandContext, args: SetArgs) -> Result<()> {
    if !apply(&mut ctx.config, args)? {
        anyhow::bail!(
            "Nothing to set. Use --default-ledger, --default-log-level or --default-kind."
        );
    }

    let path = ctx.config.save()?;
    tracing::info!(path = %path.display(), "config saved");

    match ctx.format {
        OutputFormat::Json => print_single(&ctx.config),
        OutputFormat::Table => {
            print_success("Saved settings");
            print_info(&format!("config: {}", path.display()));
        }
    }

    Ok(())
}

fn clear(format: OutputFormat) -> Result<()> {
    Config::delete()?;

    match format {
        OutputFormat::Json => print_single(&serde_json::json!({ "ok": true })),
        OutputFormat::Table => print_success("Cleared saved settings"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_apply_nothing() {
        let mut config = Config::default();
        let args = SetArgs {
            default_ledger: None,
            default_log_level: None,
            default_kind: None,
        };
        assert!(!apply(&mut config, args).unwrap());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_apply_some() {
        let mut config = Config::default();
        let args = SetArgs {
            default_ledger: Some(LedgerId::TESTNET),
            default_log_level: None,
            default_kind: Some(EntityKind::Schedule),
        };
        assert!(apply(&mut config, args).unwrap());
        assert_eq!(config.ledger, LedgerId::TESTNET);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.kind, EntityKind::Schedule);
    }

    #[test]
    fn test_apply_rejects_bad_log_filter() {
        let mut config = Config::default();
        let args = SetArgs {
            default_ledger: Some(LedgerId::TESTNET),
            default_log_level: Some("ledger_id=loud".to_string()),
            default_kind: None,
        };

        let err = apply(&mut config, args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidLogLevel { .. })
        ));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_apply_accepts_filter_directives() {
        let mut config = Config::default();
        let args = SetArgs {
            default_ledger: None,
            default_log_level: Some("ledger_id=debug,warn".to_string()),
            default_kind: None,
        };
        assert!(apply(&mut config, args).unwrap());
        assert_eq!(config.log_level, "ledger_id=debug,warn");
    }
}
