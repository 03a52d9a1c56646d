//! Macros for defining typed entity ID types.

/// Macro to define a typed entity ID for one kind of ledger entity.
///
/// This generates a newtype wrapper around [`crate::EntityId`] with:
/// - A `KIND` constant and a [`crate::TypedId`] implementation
/// - `new()` / `from_num()` constructors and `shard()` / `realm()` / `num()`
/// - `parse()` for the strict `shard.realm.num` form
/// - checksum and EVM address helpers delegating to `EntityId`
/// - `Display` and `FromStr` implementations
/// - `Serialize` and `Deserialize` implementations (canonical string)
/// - `Ord`, `Hash`, and other standard traits
///
/// # Example
///
/// ```ignore
/// define_entity_id!(AccountId, Account);
///
/// let id = AccountId::from_num(98);
/// let parsed: AccountId = "0.0.98".parse()?;
/// ```
#[macro_export]
macro_rules! define_entity_id {
    ($name:ident, $kind:ident) => {
        #[doc = concat!("A typed `shard.realm.num` ID of a ledger ", stringify!($kind), " entity.")]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::EntityId);

        impl $name {
            /// The kind of entity this ID addresses.
            pub const KIND: $crate::EntityKind = $crate::EntityKind::$kind;

            /// Creates an ID from all three parts.
            #[must_use]
            pub const fn new(shard: u64, realm: u64, num: u64) -> Self {
                Self($crate::EntityId::new(shard, realm, num))
            }

            /// Creates an ID in shard 0, realm 0.
            #[must_use]
            pub const fn from_num(num: u64) -> Self {
                Self($crate::EntityId::from_num(num))
            }

            #[must_use]
            pub const fn shard(&self) -> u64 {
                self.0.shard()
            }

            #[must_use]
            pub const fn realm(&self) -> u64 {
                self.0.realm()
            }

            #[must_use]
            pub const fn num(&self) -> u64 {
                self.0.num()
            }

            /// Returns the untyped address.
            #[must_use]
            pub const fn entity_id(&self) -> $crate::EntityId {
                self.0
            }

            /// Parses an ID from its canonical `shard.realm.num` form.
            pub fn parse(s: &str) -> Result<Self, $crate::IdError> {
                $crate::EntityId::parse(s).map(Self)
            }

            /// Computes this ID's checksum on `ledger`.
            #[must_use]
            pub fn checksum(&self, ledger: &$crate::LedgerId) -> $crate::Checksum {
                self.0.checksum(ledger)
            }

            /// Formats as `shard.realm.num-checksum`.
            #[must_use]
            pub fn to_string_with_checksum(&self, ledger: &$crate::LedgerId) -> String {
                self.0.to_string_with_checksum(ledger)
            }

            /// Encodes the ID as a 20-byte long-zero EVM address.
            pub fn to_evm_bytes(&self) -> Result<[u8; 20], $crate::IdError> {
                self.0.to_evm_bytes()
            }

            /// Encodes the ID as a 40-character hex solidity address.
            pub fn to_solidity_address(&self) -> Result<String, $crate::IdError> {
                self.0.to_solidity_address()
            }

            /// Decodes a 20-byte long-zero EVM address.
            #[must_use]
            pub fn from_evm_bytes(bytes: [u8; 20]) -> Self {
                Self($crate::EntityId::from_evm_bytes(bytes))
            }

            /// Decodes a hex solidity address, with or without `0x`.
            pub fn from_solidity_address(s: &str) -> Result<Self, $crate::IdError> {
                $crate::EntityId::from_solidity_address(s).map(Self)
            }
        }

        impl $crate::TypedId for $name {
            const KIND: $crate::EntityKind = $crate::EntityKind::$kind;

            fn from_entity_id(id: $crate::EntityId) -> Self {
                Self(id)
            }

            fn entity_id(&self) -> $crate::EntityId {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<u64> for $name {
            fn from(num: u64) -> Self {
                Self::from_num(num)
            }
        }

        impl From<$name> for $crate::EntityId {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                <$crate::EntityId as serde::Deserialize<'de>>::deserialize(deserializer).map(Self)
            }
        }
    };
}
