//! Typed ID definitions for every kind of ledger entity.
//!
//! All of them share the `shard.realm.num` structure; only the type differs,
//! so an account ID cannot be passed where a token ID is expected.

use crate::define_entity_id;
use crate::nft::NftId;

// =============================================================================
// Accounts and Files
// =============================================================================

define_entity_id!(AccountId, Account);
define_entity_id!(FileId, File);

// =============================================================================
// Smart Contracts
// =============================================================================

define_entity_id!(ContractId, Contract);

// =============================================================================
// Consensus
// =============================================================================

define_entity_id!(TopicId, Topic);

// =============================================================================
// Tokens
// =============================================================================

define_entity_id!(TokenId, Token);

impl TokenId {
    /// Returns the ID of the NFT with `serial` in this token class.
    #[must_use]
    pub const fn nft(&self, serial: u64) -> NftId {
        NftId::new(*self, serial)
    }
}

// =============================================================================
// Scheduled Transactions
// =============================================================================

define_entity_id!(ScheduleId, Schedule);

// =============================================================================
// Tests
// =============================================================================
