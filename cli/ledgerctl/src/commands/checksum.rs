//! Checksum commands.

use anyhow::{Context, Result};
use clap::Args;
use ledger_id::{EntityKind, LedgerId};
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::print_output;
use crate::resolve::{resolve_id, Resolved};

use super::CommandContext;

/// Compute or verify ID checksums.
#[derive(Debug, Args)]
pub struct ChecksumCommand {
    /// IDs in `shard.realm.num` form, optionally with a `-checksum` suffix.
    #[arg(required = true, value_name = "ID")]
    ids: Vec<String>,

    /// Require every ID to carry a checksum and verify it.
    #[arg(long)]
    verify: bool,

    /// Kind of entity the IDs address (defaults to the configured kind).
    #[arg(long)]
    kind: Option<EntityKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
struct ChecksumRow {
    id: String,
    ledger: String,
    checksum: String,
    checksummed_id: String,
    status: &'static str,
}

impl ChecksumRow {
    fn new(resolved: &Resolved, ledger: &LedgerId) -> Self {
        let status = if resolved.supplied_checksum.is_some() {
            "verified"
        } else {
            "computed"
        };

        Self {
            id: resolved.id.to_string(),
            ledger: ledger.to_string(),
            checksum: resolved.id.checksum(ledger).to_string(),
            checksummed_id: resolved.id.to_string_with_checksum(ledger),
            status,
        }
    }
}

impl ChecksumCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let kind = ctx.resolve_kind(self.kind);

        let rows = self
            .ids
            .iter()
            .map(|text| -> Result<ChecksumRow> {
                let resolved = resolve_id(kind, text, &ctx.ledger)
                    .with_context(|| format!("Failed to check '{text}' on {}", ctx.ledger))?;

                if self.verify && resolved.supplied_checksum.is_none() {
                    return Err(CliError::MissingChecksum(text.clone()).into());
                }

                Ok(ChecksumRow::new(&resolved, &ctx.ledger))
            })
            .collect::<Result<Vec<_>>>()?;

        print_output(&rows, ctx.format);
        Ok(())
    }
}
