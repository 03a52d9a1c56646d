//! What an entity ID points at.

use crate::error::IdError;

/// The kind of ledger entity an ID addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    Account,
    File,
    Contract,
    Topic,
    Token,
    Schedule,
}

impl EntityKind {
    /// Every kind, in declaration order.
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Account,
        EntityKind::File,
        EntityKind::Contract,
        EntityKind::Topic,
        EntityKind::Token,
        EntityKind::Schedule,
    ];

    /// Lowercase name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Account => "account",
            EntityKind::File => "file",
            EntityKind::Contract => "contract",
            EntityKind::Topic => "topic",
            EntityKind::Token => "token",
            EntityKind::Schedule => "schedule",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| IdError::UnknownKind(s.to_string()))
    }
}

impl serde::Serialize for EntityKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for EntityKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_roundtrip() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.as_str().parse::<EntityKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_parse_is_case_insensitive() {
        assert_eq!("Token".parse::<EntityKind>().unwrap(), EntityKind::Token);
        assert_eq!(
            "SCHEDULE".parse::<EntityKind>().unwrap(),
            EntityKind::Schedule
        );
    }

    #[test]
    fn test_kind_parse_unknown() {
        let err = "wallet".parse::<EntityKind>().unwrap_err();
        assert_eq!(err, IdError::UnknownKind("wallet".to_string()));
    }

    #[test]
    fn test_kind_json() {
        let json = serde_json::to_string(&EntityKind::Contract).unwrap();
        assert_eq!(json, r#""contract""#);
        let kind: EntityKind = serde_json::from_str(r#""topic""#).unwrap();
        assert_eq!(kind, EntityKind::Topic);
    }
}
