//! Domain records for the aquarium keeping backend.
//!
//! # Responsibility
//! - Define record, create payload and update payload shapes per entity type.
//! - Declare each type's ordered validation rules next to its fields.
//!
//! # Invariants
//! - Every record is identified by a store-assigned `EntityId`.
//! - Records serialize with camelCase field names to match fixture files.
//! - Update payloads carry the target `id`; every other field is optional.

pub mod consumable;
pub mod equipment;
pub mod feeding;
pub mod medication;
pub mod organism;
pub mod water_change;
pub mod water_quality;

use crate::rules::FieldValue;
use crate::store::EntityId;
use serde::{Deserialize, Deserializer};

/// Keeps an explicit `null` apart from a missing key in update payloads.
///
/// Use with `#[serde(default, deserialize_with = "...")]`: a missing key
/// yields `None`, `null` yields `Some(None)`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Rule view of a supplied foreign key; an explicit `null` reads as unset.
pub(crate) fn nullable_reference<'a>(id: Option<EntityId>) -> FieldValue<'a> {
    FieldValue::Reference(id.unwrap_or(0))
}
