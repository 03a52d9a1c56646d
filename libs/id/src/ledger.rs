//! Ledger (network) identifiers used for checksums.

use std::borrow::Cow;

use crate::error::IdError;

/// Identifies the ledger an entity ID belongs to.
///
/// The well-known networks are single bytes. Any other ledger is named by an
/// arbitrary byte string, written as hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LedgerId(Cow<'static, [u8]>);

impl LedgerId {
    pub const MAINNET: Self = Self(Cow::Borrowed(&[0x00]));
    pub const TESTNET: Self = Self(Cow::Borrowed(&[0x01]));
    pub const PREVIEWNET: Self = Self(Cow::Borrowed(&[0x02]));

    const NAMED: [(&'static str, LedgerId); 3] = [
        ("mainnet", Self::MAINNET),
        ("testnet", Self::TESTNET),
        ("previewnet", Self::PREVIEWNET),
    ];

    /// Creates a ledger ID from raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(Cow::Owned(bytes.into()))
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the network name for the well-known ledgers.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(_, ledger)| ledger == self)
            .map(|(name, _)| *name)
    }

    /// Parses a network name (`mainnet`, `testnet`, `previewnet`) or a hex
    /// byte string with an optional `0x` prefix.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        let trimmed = s.trim();

        if let Some((_, ledger)) = Self::NAMED
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
        {
            return Ok(ledger.clone());
        }

        let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(IdError::InvalidLedgerId(s.to_string()));
        }

        hex::decode(digits)
            .map(Self::from_bytes)
            .map_err(|_| IdError::InvalidLedgerId(s.to_string()))
    }
}

impl Default for LedgerId {
    fn default() -> Self {
        Self::MAINNET
    }
}

impl std::fmt::Display for LedgerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => f.write_str(&hex::encode(self.as_bytes())),
        }
    }
}

impl std::str::FromStr for LedgerId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for LedgerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for LedgerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
