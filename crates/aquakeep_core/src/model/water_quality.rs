//! Water test results (pH, ammonia, nitrite, nitrate, ...).

use crate::rules::{FieldValue, Fields, Rule};
use crate::store::{AquariumScoped, Entity, EntityId};
use serde::{Deserialize, Serialize};

pub const WATER_QUALITY_RULES: &[Rule] = &[
    Rule::non_empty("test_type", "water quality record test type must not be empty"),
    Rule::non_blank("test_date", "water quality record test date must not be blank"),
    Rule::present("value", "water quality record value must not be empty"),
    Rule::reference(
        "aquarium_id",
        "water quality record aquarium must not be empty",
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterQualityRecord {
    pub id: EntityId,
    pub aquarium_id: EntityId,
    pub test_type: String,
    pub test_date: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewWaterQualityRecord {
    pub aquarium_id: EntityId,
    pub test_type: String,
    pub test_date: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterQualityRecordPatch {
    pub id: EntityId,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub aquarium_id: Option<Option<EntityId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_date: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Option<f64>>,
}

impl Fields for NewWaterQualityRecord {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "aquarium_id" => Some(FieldValue::Reference(self.aquarium_id)),
            "test_type" => Some(FieldValue::Text(&self.test_type)),
            "test_date" => Some(FieldValue::Text(&self.test_date)),
            "value" => Some(FieldValue::Number(self.value)),
            _ => None,
        }
    }
}

impl Fields for WaterQualityRecordPatch {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "aquarium_id" => self.aquarium_id.map(super::nullable_reference),
            "test_type" => self.test_type.as_deref().map(FieldValue::Text),
            "test_date" => self.test_date.as_deref().map(FieldValue::Text),
            "value" => self.value.map(FieldValue::Number),
            _ => None,
        }
    }
}

impl Entity for WaterQualityRecord {
    type Draft = NewWaterQualityRecord;
    type Patch = WaterQualityRecordPatch;
    const KIND: &'static str = "water quality record";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: NewWaterQualityRecord) -> Self {
        Self {
            id,
            aquarium_id: draft.aquarium_id,
            test_type: draft.test_type,
            test_date: draft.test_date,
            // Guaranteed present by WATER_QUALITY_RULES.
            value: draft.value.unwrap_or_default(),
        }
    }

    fn patch_id(patch: &WaterQualityRecordPatch) -> EntityId {
        patch.id
    }

    fn merge(&mut self, patch: &WaterQualityRecordPatch) {
        if let Some(Some(aquarium_id)) = patch.aquarium_id {
            self.aquarium_id = aquarium_id;
        }
        if let Some(test_type) = &patch.test_type {
            self.test_type = test_type.clone();
        }
        if let Some(test_date) = &patch.test_date {
            self.test_date = test_date.clone();
        }
        if let Some(Some(value)) = patch.value {
            self.value = value;
        }
    }
}

impl AquariumScoped for WaterQualityRecord {
    fn aquarium_id(&self) -> EntityId {
        self.aquarium_id
    }
}
