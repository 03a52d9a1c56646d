//! NFT ID command.

use anyhow::{Context, Result};
use clap::Args;
use ledger_id::{LedgerId, NftId};
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

/// Parse NFT IDs (`shard.realm.num/serial` or `shard.realm.num@serial`).
#[derive(Debug, Args)]
pub struct NftCommand {
    #[arg(required = true, value_name = "NFT_ID")]
    ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
struct NftRow {
    nft_id: String,
    token_id: String,
    serial: u64,
    checksummed_token_id: String,
}

impl NftRow {
    fn new(nft: NftId, ledger: &LedgerId) -> Self {
        Self {
            nft_id: nft.to_string(),
            token_id: nft.token_id().to_string(),
            serial: nft.serial(),
            checksummed_token_id: nft.token_id().to_string_with_checksum(ledger),
        }
    }
}

impl NftCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows = self
            .ids
            .iter()
            .map(|text| -> Result<NftRow> {
                let nft = NftId::parse(text)
                    .with_context(|| format!("Failed to parse NFT ID '{text}'"))?;
                Ok(NftRow::new(nft, &ctx.ledger))
            })
            .collect::<Result<Vec<_>>>()?;

        print_output(&rows, ctx.format);
        Ok(())
    }
}
