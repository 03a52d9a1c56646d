//! The common interface of the typed entity IDs.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use crate::entity::EntityId;
use crate::error::IdError;
use crate::kind::EntityKind;

/// An [`EntityId`] tagged at the type level with the kind of entity it names.
///
/// Implemented by every type generated with [`crate::define_entity_id!`].
pub trait TypedId:
    Copy + Eq + Ord + Hash + Debug + Display + FromStr<Err = IdError> + Send + Sync + 'static
{
    /// What this ID addresses.
    const KIND: EntityKind;

    /// Wraps an untyped address.
    fn from_entity_id(id: EntityId) -> Self;

    /// Returns the untyped address.
    fn entity_id(&self) -> EntityId;
}
