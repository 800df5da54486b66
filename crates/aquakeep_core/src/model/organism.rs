//! Livestock: fish, shrimp, snails and plants.

use crate::rules::{FieldValue, Fields, Rule};
use crate::store::{AquariumScoped, Entity, EntityId};
use serde::{Deserialize, Serialize};

pub const ORGANISM_RULES: &[Rule] = &[
    Rule::non_blank("name", "organism name must not be blank"),
    Rule::non_empty("tag", "organism tag must not be empty"),
    Rule::non_negative("price", "organism price must be >= 0"),
    Rule::non_negative("length", "organism length must be >= 0"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organism {
    pub id: EntityId,
    pub aquarium_id: EntityId,
    pub name: String,
    pub tag: String,
    pub price: f64,
    /// Body length in centimetres, when measured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewOrganism {
    pub aquarium_id: EntityId,
    pub name: String,
    pub tag: String,
    pub price: f64,
    pub length: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganismPatch {
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aquarium_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// `Some(None)` clears a recorded length.
    #[serde(
        default,
        deserialize_with = "super::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub length: Option<Option<f64>>,
}

impl Fields for NewOrganism {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "aquarium_id" => Some(FieldValue::Reference(self.aquarium_id)),
            "name" => Some(FieldValue::Text(&self.name)),
            "tag" => Some(FieldValue::Text(&self.tag)),
            "price" => Some(FieldValue::Number(Some(self.price))),
            "length" => Some(FieldValue::Number(self.length)),
            _ => None,
        }
    }
}

impl Fields for OrganismPatch {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "aquarium_id" => self.aquarium_id.map(FieldValue::Reference),
            "name" => self.name.as_deref().map(FieldValue::Text),
            "tag" => self.tag.as_deref().map(FieldValue::Text),
            "price" => self.price.map(|price| FieldValue::Number(Some(price))),
            "length" => self.length.map(FieldValue::Number),
            _ => None,
        }
    }
}

impl Entity for Organism {
    type Draft = NewOrganism;
    type Patch = OrganismPatch;
    const KIND: &'static str = "organism";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: NewOrganism) -> Self {
        Self {
            id,
            aquarium_id: draft.aquarium_id,
            name: draft.name,
            tag: draft.tag,
            price: draft.price,
            length: draft.length,
        }
    }

    fn patch_id(patch: &OrganismPatch) -> EntityId {
        patch.id
    }

    fn merge(&mut self, patch: &OrganismPatch) {
        if let Some(aquarium_id) = patch.aquarium_id {
            self.aquarium_id = aquarium_id;
        }
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(tag) = &patch.tag {
            self.tag = tag.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(length) = patch.length {
            self.length = length;
        }
    }
}

impl AquariumScoped for Organism {
    fn aquarium_id(&self) -> EntityId {
        self.aquarium_id
    }
}
