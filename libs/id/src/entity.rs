//! The `shard.realm.num` triple shared by every entity ID kind.

use crate::error::{IdError, MalformedReason};

/// A hierarchical ledger address: `shard.realm.num`.
///
/// This is the untyped representation. Code that knows what the ID points at
/// should use one of the typed wrappers ([`crate::AccountId`],
/// [`crate::TokenId`], ...) so that addresses of different kinds cannot be
/// mixed up.
///
/// Ordering is lexicographic over `(shard, realm, num)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId {
    shard: u64,
    realm: u64,
    num: u64,
}

impl EntityId {
    /// Creates an ID from all three parts.
    #[must_use]
    pub const fn new(shard: u64, realm: u64, num: u64) -> Self {
        Self { shard, realm, num }
    }

    /// Creates an ID in shard 0, realm 0.
    #[must_use]
    pub const fn from_num(num: u64) -> Self {
        Self::new(0, 0, num)
    }

    #[must_use]
    pub const fn shard(&self) -> u64 {
        self.shard
    }

    #[must_use]
    pub const fn realm(&self) -> u64 {
        self.realm
    }

    #[must_use]
    pub const fn num(&self) -> u64 {
        self.num
    }

    /// Parses an ID from its canonical `shard.realm.num` form.
    ///
    /// Every segment must be one or more ASCII digits and fit in a `u64`.
    /// Signs, whitespace, checksum suffixes and extra segments are rejected.
    /// Leading zeros are accepted and dropped, so `0.0.007` parses to the
    /// same ID as `0.0.7`.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        if s.is_empty() {
            return Err(IdError::malformed(s, MalformedReason::Empty));
        }

        let segments: Vec<&str> = s.split('.').collect();
        let [shard, realm, num] = segments.as_slice() else {
            return Err(IdError::malformed(
                s,
                MalformedReason::SegmentCount {
                    found: segments.len(),
                },
            ));
        };

        Ok(Self {
            shard: parse_segment(s, shard, 1)?,
            realm: parse_segment(s, realm, 2)?,
            num: parse_segment(s, num, 3)?,
        })
    }
}

/// Parses one decimal segment; `position` is 1-based and only used for errors.
pub(crate) fn parse_segment(input: &str, segment: &str, position: usize) -> Result<u64, IdError> {
    if segment.is_empty() {
        return Err(IdError::malformed(
            input,
            MalformedReason::EmptySegment { position },
        ));
    }

    // `u64::from_str` would accept a leading '+'.
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(IdError::malformed(
            input,
            MalformedReason::NonDigit { position },
        ));
    }

    segment
        .parse::<u64>()
        .map_err(|_| IdError::malformed(input, MalformedReason::Overflow { position }))
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

impl std::str::FromStr for EntityId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u64> for EntityId {
    fn from(num: u64) -> Self {
        Self::from_num(num)
    }
}

impl serde::Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_format_is_canonical() {
        assert_eq!(EntityId::new(0, 0, 1001).to_string(), "0.0.1001");
        assert_eq!(EntityId::new(7, 0, 0).to_string(), "7.0.0");
        assert_eq!(
            EntityId::new(u64::MAX, 1, 2).to_string(),
            "18446744073709551615.1.2"
        );
    }

    #[test]
    fn test_from_num_defaults_shard_and_realm() {
        let id = EntityId::from_num(1001);
        assert_eq!(id, EntityId::parse("0.0.1001").unwrap());
        assert_eq!((id.shard(), id.realm(), id.num()), (0, 0, 1001));
        assert_eq!(EntityId::from(1001), id);
    }

    #[test]
    fn test_parse_all_segments() {
        let id: EntityId = "1.2.3".parse().unwrap();
        assert_eq!((id.shard(), id.realm(), id.num()), (1, 2, 3));
    }

    #[test]
    fn test_parse_accepts_u64_max() {
        let id = EntityId::parse("0.0.18446744073709551615").unwrap();
        assert_eq!(id.num(), u64::MAX);
    }

    #[test]
    fn test_parse_drops_leading_zeros() {
        let id = EntityId::parse("0.0.007").unwrap();
        assert_eq!(id, EntityId::from_num(7));
        assert_eq!(id.to_string(), "0.0.7");
    }

    #[rstest]
    #[case("", MalformedReason::Empty)]
    #[case("1001", MalformedReason::SegmentCount { found: 1 })]
    #[case("0.1001", MalformedReason::SegmentCount { found: 2 })]
    #[case("0.0.1001.5", MalformedReason::SegmentCount { found: 4 })]
    #[case("a.0.1001", MalformedReason::NonDigit { position: 1 })]
    #[case("0.0.-1", MalformedReason::NonDigit { position: 3 })]
    #[case("0.0.+1", MalformedReason::NonDigit { position: 3 })]
    #[case("0.0. 1", MalformedReason::NonDigit { position: 3 })]
    #[case("0.0.1001-vfmkw", MalformedReason::NonDigit { position: 3 })]
    #[case("0.0.", MalformedReason::EmptySegment { position: 3 })]
    #[case(".0.1", MalformedReason::EmptySegment { position: 1 })]
    #[case("0..1", MalformedReason::EmptySegment { position: 2 })]
    #[case("0.0.18446744073709551616", MalformedReason::Overflow { position: 3 })]
    fn test_parse_rejects_malformed(#[case] input: &str, #[case] expected: MalformedReason) {
        let err = EntityId::parse(input).unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(err.malformed_reason(), Some(expected));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut ids = vec![
            EntityId::new(0, 1, 0),
            EntityId::new(1, 0, 0),
            EntityId::new(0, 0, 5),
            EntityId::new(0, 0, 2),
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![
                EntityId::new(0, 0, 2),
                EntityId::new(0, 0, 5),
                EntityId::new(0, 1, 0),
                EntityId::new(1, 0, 0),
            ]
        );
    }

    #[test]
    fn test_json_uses_canonical_string() {
        let id = EntityId::new(0, 0, 1001);
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""0.0.1001""#);

        let parsed: EntityId = serde_json::from_str(r#""0.0.1001""#).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_json_rejects_malformed() {
        let err = serde_json::from_str::<EntityId>(r#""0.0.x""#).unwrap_err();
        assert!(err.to_string().contains("malformed entity ID '0.0.x'"));
    }
}
