//! Ledger-bound address checksums (`0.0.123-vfmkw`).
//!
//! A checksum binds the textual form of an ID to a ledger so that an address
//! copied from one network is caught before it is used on another. It is
//! display/input sugar only: the checksum is never part of an ID's identity.

use std::fmt::Write as _;

use crate::entity::EntityId;
use crate::error::{IdError, MalformedReason};
use crate::ledger::LedgerId;
use crate::typed::TypedId;

const CHECKSUM_LEN: usize = 5;
const P3: u64 = 26 * 26 * 26;
const P5: u64 = 26 * 26 * 26 * 26 * 26;
const WEIGHT: u64 = 31;
const MULTIPLIER: u64 = 1_000_003;

/// Five lowercase ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Checksum([u8; CHECKSUM_LEN]);

impl Checksum {
    /// Parses a checksum; `input` is the full text being parsed, for errors.
    fn parse_within(input: &str, s: &str) -> Result<Self, IdError> {
        let bytes: [u8; CHECKSUM_LEN] = s
            .as_bytes()
            .try_into()
            .map_err(|_| IdError::malformed(input, MalformedReason::Checksum))?;

        if !bytes.iter().all(u8::is_ascii_lowercase) {
            return Err(IdError::malformed(input, MalformedReason::Checksum));
        }

        Ok(Self(bytes))
    }

    /// Parses a bare checksum such as `vfmkw`.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        Self::parse_within(s, s)
    }

    /// Computes the checksum of a canonical address string on `ledger`.
    fn compute(ledger: &LedgerId, address: &str) -> Self {
        let digits = address
            .bytes()
            .map(|b| if b == b'.' { 10 } else { u64::from(b - b'0') });

        let mut sd = 0;
        let mut sd_even = 0;
        let mut sd_odd = 0;
        for (i, digit) in digits.enumerate() {
            sd = (WEIGHT * sd + digit) % P3;
            if i % 2 == 0 {
                sd_even = (sd_even + digit) % 11;
            } else {
                sd_odd = (sd_odd + digit) % 11;
            }
        }

        let sh = ledger
            .as_bytes()
            .iter()
            .copied()
            .chain([0u8; 6])
            .fold(0, |acc, byte| (WEIGHT * acc + u64::from(byte)) % P5);

        let len = address.len() as u64;
        let c = ((((len % 5) * 11 + sd_even) * 11 + sd_odd) * P3 + sd + sh) % P5;
        let mut cp = (c * MULTIPLIER) % P5;

        let mut letters = [0u8; CHECKSUM_LEN];
        for slot in letters.iter_mut().rev() {
            // `cp % 26` is always below 26.
            *slot = b'a' + (cp % 26) as u8;
            cp /= 26;
        }

        Self(letters)
    }
}

impl std::fmt::Display for Checksum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in self.0 {
            f.write_char(char::from(byte))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Checksum {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl EntityId {
    /// Computes this address's checksum on `ledger`.
    #[must_use]
    pub fn checksum(&self, ledger: &LedgerId) -> Checksum {
        Checksum::compute(ledger, &self.to_string())
    }

    /// Formats as `shard.realm.num-checksum`.
    #[must_use]
    pub fn to_string_with_checksum(&self, ledger: &LedgerId) -> String {
        format!("{}-{}", self, self.checksum(ledger))
    }
}

/// An ID as typed by a user: canonical form plus an optional checksum.
///
/// Plain [`TypedId`] parsing is strict and rejects a checksum suffix; this is
/// the entry point for text that may carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checksummed<T> {
    id: T,
    checksum: Option<Checksum>,
}

impl<T: TypedId> Checksummed<T> {
    /// Parses `shard.realm.num` or `shard.realm.num-checksum`.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        let Some((id, checksum)) = s.split_once('-') else {
            return Ok(Self {
                id: T::from_str(s)?,
                checksum: None,
            });
        };

        // Report errors against the whole input, not just the ID part.
        let id = T::from_str(id).map_err(|err| match err.malformed_reason() {
            Some(reason) => IdError::malformed(s, reason),
            None => err,
        })?;
        let checksum = Checksum::parse_within(s, checksum)?;

        Ok(Self {
            id,
            checksum: Some(checksum),
        })
    }

    /// The ID, without checking the checksum.
    #[must_use]
    pub fn id_unchecked(&self) -> T {
        self.id
    }

    #[must_use]
    pub fn checksum(&self) -> Option<Checksum> {
        self.checksum
    }

    /// Returns the ID if it carries no checksum or the checksum matches `ledger`.
    pub fn validate(&self, ledger: &LedgerId) -> Result<T, IdError> {
        let Some(actual) = self.checksum else {
            return Ok(self.id);
        };

        let expected = self.id.entity_id().checksum(ledger);
        if expected == actual {
            return Ok(self.id);
        }

        tracing::debug!(
            id = %self.id,
            kind = %T::KIND,
            ledger = %ledger,
            %expected,
            %actual,
            "checksum mismatch"
        );

        Err(IdError::ChecksumMismatch {
            id: self.id.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

impl<T> From<T> for Checksummed<T> {
    fn from(id: T) -> Self {
        Self { id, checksum: None }
    }
}

impl<T: TypedId> std::fmt::Display for Checksummed<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.checksum {
            Some(checksum) => write!(f, "{}-{}", self.id, checksum),
            None => write!(f, "{}", self.id),
        }
    }
}

impl<T: TypedId> std::str::FromStr for Checksummed<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccountId, TokenId};

    #[test]
    fn test_known_checksums() {
        let id = EntityId::from_num(123);
        assert_eq!(id.checksum(&LedgerId::MAINNET).to_string(), "vfmkw");
        assert_eq!(id.checksum(&LedgerId::TESTNET).to_string(), "esxsf");
        assert_eq!(
            id.to_string_with_checksum(&LedgerId::MAINNET),
            "0.0.123-vfmkw"
        );
    }

    #[test]
    fn test_checksum_depends_on_ledger() {
        let id = EntityId::from_num(1001);
        assert_ne!(
            id.checksum(&LedgerId::MAINNET),
            id.checksum(&LedgerId::PREVIEWNET)
        );
    }

    #[test]
    fn test_checksum_parse() {
        assert_eq!(Checksum::parse("vfmkw").unwrap().to_string(), "vfmkw");

        for input in ["", "vfmk", "vfmkwx", "VFMKW", "vfm1w"] {
            let err = Checksum::parse(input).unwrap_err();
            assert_eq!(err.malformed_reason(), Some(MalformedReason::Checksum));
        }
    }

    #[test]
    fn test_checksummed_without_suffix() {
        let parsed: Checksummed<AccountId> = "0.0.123".parse().unwrap();
        assert_eq!(parsed.checksum(), None);
        assert_eq!(
            parsed.validate(&LedgerId::TESTNET).unwrap(),
            AccountId::from_num(123)
        );
        assert_eq!(parsed.to_string(), "0.0.123");
    }

    #[test]
    fn test_checksummed_matching_suffix() {
        let parsed: Checksummed<AccountId> = "0.0.123-vfmkw".parse().unwrap();
        assert_eq!(parsed.to_string(), "0.0.123-vfmkw");
        assert_eq!(
            parsed.validate(&LedgerId::MAINNET).unwrap(),
            AccountId::from_num(123)
        );
    }

    #[test]
    fn test_checksummed_wrong_ledger() {
        let parsed: Checksummed<TokenId> = "0.0.123-vfmkw".parse().unwrap();
        let err = parsed.validate(&LedgerId::TESTNET).unwrap_err();
        assert!(err.is_checksum_error());
        assert_eq!(
            err,
            IdError::ChecksumMismatch {
                id: "0.0.123".to_string(),
                expected: "esxsf".to_string(),
                actual: "vfmkw".to_string(),
            }
        );
    }

    #[test]
    fn test_checksummed_malformed() {
        let err = Checksummed::<AccountId>::parse("0.0.123-VFMKW").unwrap_err();
        assert!(err.is_checksum_error());

        let err = Checksummed::<AccountId>::parse("0.x.123-vfmkw").unwrap_err();
        assert_eq!(
            err,
            IdError::Malformed {
                input: "0.x.123-vfmkw".to_string(),
                reason: MalformedReason::NonDigit { position: 2 },
            }
        );
    }

    #[test]
    fn test_strict_parse_rejects_checksum() {
        assert!("0.0.123-vfmkw".parse::<AccountId>().is_err());
    }
}
