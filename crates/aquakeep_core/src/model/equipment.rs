//! Equipment inventory (filters, heaters, lights).

use crate::rules::{FieldValue, Fields, Rule};
use crate::store::{Entity, EntityId};
use serde::{Deserialize, Serialize};

pub const EQUIPMENT_RULES: &[Rule] = &[
    Rule::non_blank("name", "equipment name must not be blank"),
    Rule::non_empty("status", "equipment status must not be empty"),
    Rule::non_empty("tag", "equipment tag must not be empty"),
    Rule::non_negative("price", "equipment price must be >= 0"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: EntityId,
    pub name: String,
    pub tag: String,
    /// Free-text operating state, e.g. "running" or "spare".
    pub status: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewEquipment {
    pub name: String,
    pub tag: String,
    pub status: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentPatch {
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Fields for NewEquipment {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "tag" => Some(FieldValue::Text(&self.tag)),
            "status" => Some(FieldValue::Text(&self.status)),
            "price" => Some(FieldValue::Number(Some(self.price))),
            _ => None,
        }
    }
}

impl Fields for EquipmentPatch {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => self.name.as_deref().map(FieldValue::Text),
            "tag" => self.tag.as_deref().map(FieldValue::Text),
            "status" => self.status.as_deref().map(FieldValue::Text),
            "price" => self.price.map(|price| FieldValue::Number(Some(price))),
            _ => None,
        }
    }
}

impl Entity for Equipment {
    type Draft = NewEquipment;
    type Patch = EquipmentPatch;
    const KIND: &'static str = "equipment";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: NewEquipment) -> Self {
        Self {
            id,
            name: draft.name,
            tag: draft.tag,
            status: draft.status,
            price: draft.price,
        }
    }

    fn patch_id(patch: &EquipmentPatch) -> EntityId {
        patch.id
    }

    fn merge(&mut self, patch: &EquipmentPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(tag) = &patch.tag {
            self.tag = tag.clone();
        }
        if let Some(status) = &patch.status {
            self.status = status.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
    }
}
