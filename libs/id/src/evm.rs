//! Long-zero EVM (solidity) addresses.
//!
//! An entity ID maps onto a 20-byte address as `shard` (4 bytes, big-endian),
//! `realm` (8 bytes, big-endian), `num` (8 bytes, big-endian).

use crate::entity::EntityId;
use crate::error::IdError;

/// Length of an EVM address in bytes.
pub const EVM_ADDRESS_LEN: usize = 20;

impl EntityId {
    /// Encodes the ID as a 20-byte EVM address.
    ///
    /// Fails when the shard needs more than 4 bytes.
    pub fn to_evm_bytes(&self) -> Result<[u8; EVM_ADDRESS_LEN], IdError> {
        let shard =
            u32::try_from(self.shard()).map_err(|_| IdError::ShardOutOfRange(self.shard()))?;

        let mut bytes = [0u8; EVM_ADDRESS_LEN];
        bytes[..4].copy_from_slice(&shard.to_be_bytes());
        bytes[4..12].copy_from_slice(&self.realm().to_be_bytes());
        bytes[12..].copy_from_slice(&self.num().to_be_bytes());
        Ok(bytes)
    }

    /// Encodes the ID as 40 lowercase hex characters, without `0x`.
    pub fn to_solidity_address(&self) -> Result<String, IdError> {
        self.to_evm_bytes().map(hex::encode)
    }

    /// Decodes a 20-byte EVM address.
    #[must_use]
    pub fn from_evm_bytes(bytes: [u8; EVM_ADDRESS_LEN]) -> Self {
        let mut shard = [0u8; 4];
        let mut realm = [0u8; 8];
        let mut num = [0u8; 8];
        shard.copy_from_slice(&bytes[..4]);
        realm.copy_from_slice(&bytes[4..12]);
        num.copy_from_slice(&bytes[12..]);

        Self::new(
            u64::from(u32::from_be_bytes(shard)),
            u64::from_be_bytes(realm),
            u64::from_be_bytes(num),
        )
    }

    /// Decodes a hex solidity address, with or without a `0x` prefix.
    pub fn from_solidity_address(s: &str) -> Result<Self, IdError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);

        let decoded = hex::decode(digits).map_err(|e| IdError::InvalidEvmAddress {
            input: s.to_string(),
            message: e.to_string(),
        })?;

        let bytes: [u8; EVM_ADDRESS_LEN] =
            decoded
                .try_into()
                .map_err(|decoded: Vec<u8>| IdError::InvalidEvmAddress {
                    input: s.to_string(),
                    message: format!(
                        "expected {EVM_ADDRESS_LEN} bytes, got {}",
                        decoded.len()
                    ),
                })?;

        Ok(Self::from_evm_bytes(bytes))
    }
}
