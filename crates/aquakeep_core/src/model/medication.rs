//! Medication dosing log entries.

use crate::rules::{FieldValue, Fields, Rule};
use crate::store::{AquariumScoped, Entity, EntityId};
use serde::{Deserialize, Serialize};

pub const MEDICATION_RULES: &[Rule] = &[
    Rule::non_blank(
        "medication_name",
        "medication record name must not be blank",
    ),
    Rule::non_empty("tag", "medication record tag must not be empty"),
    Rule::present("dosage", "medication record dosage must not be empty"),
    Rule::reference(
        "aquarium_id",
        "medication record aquarium must not be empty",
    ),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationRecord {
    pub id: EntityId,
    pub aquarium_id: EntityId,
    pub medication_name: String,
    pub tag: String,
    /// Amount dosed, in the unit printed on the product.
    pub dosage: f64,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewMedicationRecord {
    pub aquarium_id: EntityId,
    pub medication_name: String,
    pub tag: String,
    pub dosage: Option<f64>,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationRecordPatch {
    pub id: EntityId,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub aquarium_id: Option<Option<EntityId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medication_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub dosage: Option<Option<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Fields for NewMedicationRecord {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "aquarium_id" => Some(FieldValue::Reference(self.aquarium_id)),
            "medication_name" => Some(FieldValue::Text(&self.medication_name)),
            "tag" => Some(FieldValue::Text(&self.tag)),
            "dosage" => Some(FieldValue::Number(self.dosage)),
            "date" => Some(FieldValue::Text(&self.date)),
            _ => None,
        }
    }
}

impl Fields for MedicationRecordPatch {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "aquarium_id" => self.aquarium_id.map(super::nullable_reference),
            "medication_name" => self.medication_name.as_deref().map(FieldValue::Text),
            "tag" => self.tag.as_deref().map(FieldValue::Text),
            "dosage" => self.dosage.map(FieldValue::Number),
            "date" => self.date.as_deref().map(FieldValue::Text),
            _ => None,
        }
    }
}

impl Entity for MedicationRecord {
    type Draft = NewMedicationRecord;
    type Patch = MedicationRecordPatch;
    const KIND: &'static str = "medication record";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: NewMedicationRecord) -> Self {
        Self {
            id,
            aquarium_id: draft.aquarium_id,
            medication_name: draft.medication_name,
            tag: draft.tag,
            // `dosage` is guaranteed present by MEDICATION_RULES.
            dosage: draft.dosage.unwrap_or_default(),
            date: draft.date,
        }
    }

    fn patch_id(patch: &MedicationRecordPatch) -> EntityId {
        patch.id
    }

    fn merge(&mut self, patch: &MedicationRecordPatch) {
        if let Some(Some(aquarium_id)) = patch.aquarium_id {
            self.aquarium_id = aquarium_id;
        }
        if let Some(medication_name) = &patch.medication_name {
            self.medication_name = medication_name.clone();
        }
        if let Some(tag) = &patch.tag {
            self.tag = tag.clone();
        }
        if let Some(Some(dosage)) = patch.dosage {
            self.dosage = dosage;
        }
        if let Some(date) = &patch.date {
            self.date = date.clone();
        }
    }
}

impl AquariumScoped for MedicationRecord {
    fn aquarium_id(&self) -> EntityId {
        self.aquarium_id
    }
}
