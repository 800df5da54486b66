//! Water change log entries.

use crate::rules::{FieldValue, Fields, Rule};
use crate::store::{AquariumScoped, Entity, EntityId};
use serde::{Deserialize, Serialize};

pub const WATER_CHANGE_RULES: &[Rule] = &[
    Rule::non_blank("date", "water change record date must not be blank"),
    Rule::present(
        "water_change_ratio",
        "water change record ratio must not be empty",
    ),
    Rule::reference(
        "aquarium_id",
        "water change record aquarium must not be empty",
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterChangeRecord {
    pub id: EntityId,
    pub aquarium_id: EntityId,
    pub date: String,
    /// Share of tank volume replaced, as a percentage.
    pub water_change_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewWaterChangeRecord {
    pub aquarium_id: EntityId,
    pub date: String,
    pub water_change_ratio: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterChangeRecordPatch {
    pub id: EntityId,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub aquarium_id: Option<Option<EntityId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub water_change_ratio: Option<Option<f64>>,
}

impl Fields for NewWaterChangeRecord {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "aquarium_id" => Some(FieldValue::Reference(self.aquarium_id)),
            "date" => Some(FieldValue::Text(&self.date)),
            "water_change_ratio" => Some(FieldValue::Number(self.water_change_ratio)),
            _ => None,
        }
    }
}

impl Fields for WaterChangeRecordPatch {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "aquarium_id" => self.aquarium_id.map(super::nullable_reference),
            "date" => self.date.as_deref().map(FieldValue::Text),
            "water_change_ratio" => self.water_change_ratio.map(FieldValue::Number),
            _ => None,
        }
    }
}

impl Entity for WaterChangeRecord {
    type Draft = NewWaterChangeRecord;
    type Patch = WaterChangeRecordPatch;
    const KIND: &'static str = "water change record";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: NewWaterChangeRecord) -> Self {
        Self {
            id,
            aquarium_id: draft.aquarium_id,
            date: draft.date,
            // Guaranteed present by WATER_CHANGE_RULES.
            water_change_ratio: draft.water_change_ratio.unwrap_or_default(),
        }
    }

    fn patch_id(patch: &WaterChangeRecordPatch) -> EntityId {
        patch.id
    }

    fn merge(&mut self, patch: &WaterChangeRecordPatch) {
        if let Some(Some(aquarium_id)) = patch.aquarium_id {
            self.aquarium_id = aquarium_id;
        }
        if let Some(date) = &patch.date {
            self.date = date.clone();
        }
        if let Some(Some(ratio)) = patch.water_change_ratio {
            self.water_change_ratio = ratio;
        }
    }
}

impl AquariumScoped for WaterChangeRecord {
    fn aquarium_id(&self) -> EntityId {
        self.aquarium_id
    }
}
