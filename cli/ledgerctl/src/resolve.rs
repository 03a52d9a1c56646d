//! Text → typed ID resolution for command arguments.
//!
//! Every kind shares one grammar, but parsing goes through the typed ID for
//! the requested kind so the CLI exercises the same code paths a library
//! caller would.

use ledger_id::{
    AccountId, Checksum, Checksummed, ContractId, EntityId, EntityKind, FileId, IdError, LedgerId,
    ScheduleId, TokenId, TopicId, TypedId,
};
use serde::Serialize;
use tabled::Tabled;

/// An ID parsed from user input, with its checksum verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub kind: EntityKind,
    pub id: EntityId,
    /// The checksum the user typed, if any.
    pub supplied_checksum: Option<Checksum>,
}

/// Parse `text` as an ID of `kind`, validating any checksum against `ledger`.
pub fn resolve_id(kind: EntityKind, text: &str, ledger: &LedgerId) -> Result<Resolved, IdError> {
    match kind {
        EntityKind::Account => resolve_as::<AccountId>(text, ledger),
        EntityKind::File => resolve_as::<FileId>(text, ledger),
        EntityKind::Contract => resolve_as::<ContractId>(text, ledger),
        EntityKind::Topic => resolve_as::<TopicId>(text, ledger),
        EntityKind::Token => resolve_as::<TokenId>(text, ledger),
        EntityKind::Schedule => resolve_as::<ScheduleId>(text, ledger),
    }
}

fn resolve_as<T: TypedId>(text: &str, ledger: &LedgerId) -> Result<Resolved, IdError> {
    let parsed = Checksummed::<T>::parse(text)?;
    let id = parsed.validate(ledger)?;

    tracing::debug!(kind = %T::KIND, %id, "resolved entity ID");

    Ok(Resolved {
        kind: T::KIND,
        id: id.entity_id(),
        supplied_checksum: parsed.checksum(),
    })
}

/// One row of ID details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct IdRow {
    pub kind: EntityKind,
    pub shard: u64,
    pub realm: u64,
    pub num: u64,
    pub id: String,
    pub checksummed_id: String,
    pub evm_address: String,
}

impl IdRow {
    pub fn new(kind: EntityKind, id: EntityId, ledger: &LedgerId) -> Self {
        Self {
            kind,
            shard: id.shard(),
            realm: id.realm(),
            num: id.num(),
            id: id.to_string(),
            checksummed_id: id.to_string_with_checksum(ledger),
            // Shards beyond 32 bits have no EVM address.
            evm_address: id
                .to_solidity_address()
                .unwrap_or_else(|_| "-".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_plain_id() {
        let resolved = resolve_id(EntityKind::Account, "0.0.98", &LedgerId::MAINNET).unwrap();
        assert_eq!(resolved.kind, EntityKind::Account);
        assert_eq!(resolved.id, EntityId::from_num(98));
        assert_eq!(resolved.supplied_checksum, None);
    }

    #[test]
    fn test_resolve_with_checksum() {
        let resolved =
            resolve_id(EntityKind::Token, "0.0.123-esxsf", &LedgerId::TESTNET).unwrap();
        assert_eq!(resolved.id, EntityId::from_num(123));
        assert_eq!(
            resolved.supplied_checksum.map(|c| c.to_string()).as_deref(),
            Some("esxsf")
        );
    }

    #[test]
    fn test_resolve_wrong_ledger() {
        let err = resolve_id(EntityKind::Topic, "0.0.123-esxsf", &LedgerId::MAINNET).unwrap_err();
        assert!(matches!(err, IdError::ChecksumMismatch { .. }));
    }

    #[test]
    fn test_resolve_malformed() {
        for kind in EntityKind::ALL {
            let err = resolve_id(kind, "0.0.", &LedgerId::MAINNET).unwrap_err();
            assert!(err.is_malformed());
        }
    }

    #[test]
    fn test_id_row() {
        let row = IdRow::new(EntityKind::Contract, EntityId::from_num(123), &LedgerId::MAINNET);
        assert_eq!(row.id, "0.0.123");
        assert_eq!(row.checksummed_id, "0.0.123-vfmkw");
        assert_eq!(row.evm_address, "000000000000000000000000000000000000007b");
        assert_eq!((row.shard, row.realm, row.num), (0, 0, 123));
    }

    #[test]
    fn test_id_row_without_evm_address() {
        let row = IdRow::new(
            EntityKind::Account,
            EntityId::new(u64::MAX, 0, 1),
            &LedgerId::MAINNET,
        );
        assert_eq!(row.evm_address, "-");
    }
}
