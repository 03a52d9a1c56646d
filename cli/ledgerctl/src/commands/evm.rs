//! EVM address commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use ledger_id::{EntityId, EntityKind};
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;
use crate::resolve::{resolve_id, IdRow};

use super::CommandContext;

/// Convert between entity IDs and EVM (solidity) addresses.
#[derive(Debug, Args)]
pub struct EvmCommand {
    #[command(subcommand)]
    command: EvmSubcommand,
}

#[derive(Debug, Subcommand)]
enum EvmSubcommand {
    /// Encode entity IDs as long-zero EVM addresses.
    Encode(EncodeArgs),

    /// Decode long-zero EVM addresses into entity IDs.
    Decode(DecodeArgs),
}

#[derive(Debug, Args)]
struct EncodeArgs {
    /// IDs in `shard.realm.num` form, optionally with a `-checksum` suffix.
    #[arg(required = true, value_name = "ID")]
    ids: Vec<String>,

    /// Kind of entity the IDs address (defaults to the configured kind).
    #[arg(long)]
    kind: Option<EntityKind>,
}

#[derive(Debug, Args)]
struct DecodeArgs {
    /// 40 hex characters, with or without `0x`.
    #[arg(required = true, value_name = "ADDRESS")]
    addresses: Vec<String>,

    /// Kind of entity the addresses point at (defaults to the configured kind).
    #[arg(long)]
    kind: Option<EntityKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
struct EvmRow {
    id: String,
    evm_address: String,
}

impl EvmCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            EvmSubcommand::Encode(args) => encode(ctx, args),
            EvmSubcommand::Decode(args) => decode(ctx, args),
        }
    }
}

fn encode_row(id: EntityId) -> Result<EvmRow> {
    let address = id
        .to_solidity_address()
        .with_context(|| format!("Cannot encode {id} as an EVM address"))?;

    Ok(EvmRow {
        id: id.to_string(),
        evm_address: format!("0x{address}"),
    })
}

fn encode(ctx: CommandContext, args: EncodeArgs) -> Result<()> {
    let kind = ctx.resolve_kind(args.kind);

    let rows = args
        .ids
        .iter()
        .map(|text| -> Result<EvmRow> {
            let resolved = resolve_id(kind, text, &ctx.ledger)
                .with_context(|| format!("Failed to parse {kind} ID '{text}'"))?;
            encode_row(resolved.id)
        })
        .collect::<Result<Vec<_>>>()?;

    print_output(&rows, ctx.format);
    Ok(())
}

fn decode(ctx: CommandContext, args: DecodeArgs) -> Result<()> {
    let kind = ctx.resolve_kind(args.kind);

    let rows = args
        .addresses
        .iter()
        .map(|address| -> Result<IdRow> {
            let id = EntityId::from_solidity_address(address)
                .with_context(|| format!("Failed to decode '{address}'"))?;
            Ok(IdRow::new(kind, id, &ctx.ledger))
        })
        .collect::<Result<Vec<_>>>()?;

    print_output(&rows, ctx.format);
    Ok(())
}
