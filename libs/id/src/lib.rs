//! # ledger-id
//!
//! Entity ID types, parsing, and validation for a sharded distributed ledger.
//!
//! ## Design Principles
//!
//! - Every ledger entity is addressed by a `shard.realm.num` triple
//! - All IDs have a canonical string representation with strict parsing
//! - IDs support roundtrip serialization (parse → format → parse)
//! - IDs are typed to prevent mixing different entity kinds
//! - IDs are immutable `Copy` values; nothing here does I/O
//!
//! ## ID Format
//!
//! `{shard}.{realm}.{num}`, each part an unsigned 64-bit decimal number:
//!
//! - `0.0.98` (an account)
//! - `0.0.1001` (a token)
//! - `0.0.1001/42` (NFT serial 42 of that token)
//! - `0.0.123-vfmkw` (an ID with its mainnet checksum)
//!
//! Kinds are distinguished by type only, so the compiler rejects this:
//!
//! ```compile_fail
//! fn pay(_to: ledger_id::AccountId) {}
//!
//! pay(ledger_id::TokenId::from_num(100));
//! ```

mod checksum;
mod entity;
mod error;
mod evm;
mod kind;
mod ledger;
mod macros;
mod nft;
mod typed;
mod types;

pub use checksum::{Checksum, Checksummed};
pub use entity::EntityId;
pub use error::{IdError, MalformedReason};
pub use evm::EVM_ADDRESS_LEN;
pub use kind::EntityKind;
pub use ledger::LedgerId;
pub use nft::NftId;
pub use typed::TypedId;
pub use types::*;
