//! ledgerctl - offline CLI for ledger entity IDs
//!
//! Parses, validates and converts `shard.realm.num` identifiers: checksums,
//! EVM addresses and NFT IDs. Nothing here talks to the network.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;
mod resolve;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Run the command
    if let Err(e) = cli.run() {
        // Print error in a user-friendly way
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
