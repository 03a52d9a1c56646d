//! Non-fungible token IDs: a token class plus a serial number.

use crate::entity::parse_segment;
use crate::error::{IdError, MalformedReason};
use crate::types::TokenId;

/// The ID of one NFT, written `shard.realm.num/serial`.
///
/// Parsing also accepts `shard.realm.num@serial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NftId {
    token_id: TokenId,
    serial: u64,
}

impl NftId {
    #[must_use]
    pub const fn new(token_id: TokenId, serial: u64) -> Self {
        Self { token_id, serial }
    }

    #[must_use]
    pub const fn token_id(&self) -> TokenId {
        self.token_id
    }

    #[must_use]
    pub const fn serial(&self) -> u64 {
        self.serial
    }

    pub fn parse(s: &str) -> Result<Self, IdError> {
        if s.is_empty() {
            return Err(IdError::malformed(s, MalformedReason::Empty));
        }

        let Some((token, serial)) = s.split_once('/').or_else(|| s.split_once('@')) else {
            return Err(IdError::malformed(s, MalformedReason::MissingSerial));
        };

        let token_id = TokenId::parse(token).map_err(|err| match err.malformed_reason() {
            Some(reason) => IdError::malformed(s, reason),
            None => err,
        })?;

        let serial = parse_segment(s, serial, 1)
            .map_err(|_| IdError::malformed(s, MalformedReason::Serial))?;

        Ok(Self { token_id, serial })
    }
}

impl std::fmt::Display for NftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.token_id, self.serial)
    }
}

impl std::str::FromStr for NftId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for NftId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for NftId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
