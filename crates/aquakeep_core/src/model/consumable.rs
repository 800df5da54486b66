//! Consumable inventory (feed, filter media, test reagents).
//!
//! # Invariants
//! - `status` is derived from `quantity` on create and recomputed on update
//!   unless the update explicitly supplies one.

use crate::rules::{FieldValue, Fields, Rule};
use crate::store::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// Tag marking a consumable as fish feed.
pub const FEED_TAG: &str = "feed";

pub const CONSUMABLE_RULES: &[Rule] = &[
    Rule::non_negative("quantity", "consumable quantity must be >= 0"),
    Rule::non_empty("tag", "consumable tag must not be empty"),
    Rule::non_negative("price", "consumable price must be >= 0"),
];

/// Usage state derived from remaining quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsumableStatus {
    #[serde(rename = "in use")]
    InUse,
    #[serde(rename = "depleted")]
    Depleted,
}

impl ConsumableStatus {
    pub fn from_quantity(quantity: i64) -> Self {
        if quantity == 0 {
            Self::Depleted
        } else {
            Self::InUse
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::InUse => "in use",
            Self::Depleted => "depleted",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consumable {
    pub id: EntityId,
    pub name: String,
    pub tag: String,
    pub price: f64,
    pub quantity: i64,
    pub status: ConsumableStatus,
}

impl Consumable {
    pub fn is_feed(&self) -> bool {
        self.tag == FEED_TAG
    }
}

/// Create payload. `status` is not accepted; it is always derived.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewConsumable {
    pub name: String,
    pub tag: String,
    pub price: f64,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumablePatch {
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// Explicit override; wins over the quantity-derived value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ConsumableStatus>,
}

impl Fields for NewConsumable {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "tag" => Some(FieldValue::Text(&self.tag)),
            "price" => Some(FieldValue::Number(Some(self.price))),
            "quantity" => Some(FieldValue::Number(Some(self.quantity as f64))),
            _ => None,
        }
    }
}

impl Fields for ConsumablePatch {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => self.name.as_deref().map(FieldValue::Text),
            "tag" => self.tag.as_deref().map(FieldValue::Text),
            "price" => self.price.map(|price| FieldValue::Number(Some(price))),
            "quantity" => self
                .quantity
                .map(|quantity| FieldValue::Number(Some(quantity as f64))),
            _ => None,
        }
    }
}

impl Entity for Consumable {
    type Draft = NewConsumable;
    type Patch = ConsumablePatch;
    const KIND: &'static str = "consumable";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: NewConsumable) -> Self {
        Self {
            id,
            status: ConsumableStatus::from_quantity(draft.quantity),
            name: draft.name,
            tag: draft.tag,
            price: draft.price,
            quantity: draft.quantity,
        }
    }

    fn patch_id(patch: &ConsumablePatch) -> EntityId {
        patch.id
    }

    fn merge(&mut self, patch: &ConsumablePatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(tag) = &patch.tag {
            self.tag = tag.clone();
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Recomputes `status` from the post-merge quantity unless the patch pins it.
pub fn derive_status(consumable: &mut Consumable, patch: Option<&ConsumablePatch>) {
    consumable.status = match patch.and_then(|patch| patch.status) {
        Some(explicit) => explicit,
        None => ConsumableStatus::from_quantity(consumable.quantity),
    };
}
