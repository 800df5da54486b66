//! Feeding log entries.
//!
//! # Responsibility
//! - Record which feed consumable was given to which aquarium and when.
//! - Provide the read shape that carries the consumable's display name.
//!
//! # Invariants
//! - `consumable_id` pointed at an existing consumable tagged "feed" when the
//!   write was accepted. Later changes to that consumable are not re-checked.
//! - `consumable_name` on `FeedingEntry` is never stored; it is looked up on
//!   every read and write.

use crate::rules::{FieldValue, Fields, Rule};
use crate::store::{AquariumScoped, Entity, EntityId};
use serde::{Deserialize, Serialize};

pub const FEEDING_RULES: &[Rule] = &[Rule::non_blank(
    "date",
    "feeding record date must not be blank",
)];

/// Field checked against the consumable store.
pub const FEEDING_CONSUMABLE_FIELD: &str = "consumable_id";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingRecord {
    pub id: EntityId,
    pub aquarium_id: EntityId,
    pub consumable_id: EntityId,
    /// ISO-8601 calendar date, e.g. `2024-05-01`.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Feeding record as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingEntry {
    #[serde(flatten)]
    pub record: FeedingRecord,
    /// Current name of the referenced consumable; `None` once it is removed.
    pub consumable_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewFeedingRecord {
    pub aquarium_id: EntityId,
    pub consumable_id: EntityId,
    pub date: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedingRecordPatch {
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aquarium_id: Option<EntityId>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub consumable_id: Option<Option<EntityId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// `Some(None)` clears the note.
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub note: Option<Option<String>>,
}

impl Fields for NewFeedingRecord {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "aquarium_id" => Some(FieldValue::Reference(self.aquarium_id)),
            "consumable_id" => Some(FieldValue::Reference(self.consumable_id)),
            "date" => Some(FieldValue::Text(&self.date)),
            _ => None,
        }
    }
}

impl Fields for FeedingRecordPatch {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "aquarium_id" => self.aquarium_id.map(FieldValue::Reference),
            "consumable_id" => self.consumable_id.map(super::nullable_reference),
            "date" => self.date.as_deref().map(FieldValue::Text),
            _ => None,
        }
    }
}

impl Entity for FeedingRecord {
    type Draft = NewFeedingRecord;
    type Patch = FeedingRecordPatch;
    const KIND: &'static str = "feeding record";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: NewFeedingRecord) -> Self {
        Self {
            id,
            aquarium_id: draft.aquarium_id,
            consumable_id: draft.consumable_id,
            date: draft.date,
            note: draft.note,
        }
    }

    fn patch_id(patch: &FeedingRecordPatch) -> EntityId {
        patch.id
    }

    fn merge(&mut self, patch: &FeedingRecordPatch) {
        if let Some(aquarium_id) = patch.aquarium_id {
            self.aquarium_id = aquarium_id;
        }
        if let Some(Some(consumable_id)) = patch.consumable_id {
            self.consumable_id = consumable_id;
        }
        if let Some(date) = &patch.date {
            self.date = date.clone();
        }
        if let Some(note) = &patch.note {
            self.note = note.clone();
        }
    }
}

impl AquariumScoped for FeedingRecord {
    fn aquarium_id(&self) -> EntityId {
        self.aquarium_id
    }
}
