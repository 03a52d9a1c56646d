//! Parse command.

use anyhow::{Context, Result};
use clap::Args;
use ledger_id::EntityKind;

use crate::output::print_output;
use crate::resolve::{resolve_id, IdRow};

use super::CommandContext;

/// Parse entity IDs and show their parts.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// IDs in `shard.realm.num` form, optionally with a `-checksum` suffix.
    #[arg(required = true, value_name = "ID")]
    ids: Vec<String>,

    /// Kind of entity the IDs address (defaults to the configured kind).
    #[arg(long)]
    kind: Option<EntityKind>,
}

impl ParseCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let kind = ctx.resolve_kind(self.kind);

        let rows = self
            .ids
            .iter()
            .map(|text| -> Result<IdRow> {
                let resolved = resolve_id(kind, text, &ctx.ledger)
                    .with_context(|| format!("Failed to parse {kind} ID '{text}'"))?;
                Ok(IdRow::new(resolved.kind, resolved.id, &ctx.ledger))
            })
            .collect::<Result<Vec<_>>>()?;

        print_output(&rows, ctx.format);
        Ok(())
    }
}
