//! Consumable store and the feed-only reference target built on it.

use crate::model::consumable::{derive_status, Consumable, CONSUMABLE_RULES, FEED_TAG};
use crate::store::{
    Entity, EntityId, EntityStore, Latency, ReferenceTarget, StoreError, StorePolicy, StoreResult,
};
use std::sync::Arc;

pub type ConsumableStore = EntityStore<Consumable>;

/// Builds the consumable store with quantity-derived status.
pub fn consumable_store(seed: Vec<Consumable>, latency: Latency) -> ConsumableStore {
    let policy = StorePolicy::new(CONSUMABLE_RULES).with_derivation(derive_status);
    EntityStore::new(seed, policy, latency)
}

impl EntityStore<Consumable> {
    /// Returns consumables tagged "feed", in insertion order.
    pub async fn find_feed_consumables(&self) -> Vec<Consumable> {
        self.find_where(Consumable::is_feed).await
    }
}

/// Accepts only ids of existing consumables tagged "feed".
pub struct FeedConsumables {
    consumables: Arc<ConsumableStore>,
}

impl FeedConsumables {
    pub fn new(consumables: Arc<ConsumableStore>) -> Self {
        Self { consumables }
    }
}

impl ReferenceTarget for FeedConsumables {
    fn verify(&self, id: EntityId) -> StoreResult<()> {
        let consumable = self
            .consumables
            .peek(id)
            .ok_or(StoreError::ReferenceNotFound {
                kind: Consumable::KIND,
                id,
            })?;

        if !consumable.is_feed() {
            return Err(StoreError::InvalidReference {
                kind: Consumable::KIND,
                id,
                reason: format!("tag is `{}`, expected `{FEED_TAG}`", consumable.tag),
            });
        }

        Ok(())
    }
}
