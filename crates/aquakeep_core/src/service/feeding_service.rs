//! Feeding record store with consumable name denormalization.
//!
//! # Responsibility
//! - Reject feeding records whose consumable is missing or not tagged "feed".
//! - Attach the referenced consumable's current name to every returned record.
//!
//! # Invariants
//! - The display name is looked up at call time and never stored.
//! - Removing or retagging a consumable does not touch existing feeding records.

use crate::model::consumable::Consumable;
use crate::model::feeding::{
    FeedingEntry, FeedingRecord, FeedingRecordPatch, NewFeedingRecord, FEEDING_CONSUMABLE_FIELD,
    FEEDING_RULES,
};
use crate::service::consumable_service::{ConsumableStore, FeedConsumables};
use crate::store::{
    CrossReference, EntityId, EntityStore, Latency, StorePolicy, StoreResult,
};
use std::sync::Arc;

/// Store for feeding records; reads return `FeedingEntry` values.
pub struct FeedingStore {
    records: EntityStore<FeedingRecord>,
    consumables: Arc<ConsumableStore>,
}

impl FeedingStore {
    pub fn new(
        seed: Vec<FeedingRecord>,
        consumables: Arc<ConsumableStore>,
        latency: Latency,
    ) -> Self {
        let reference = CrossReference::new(
            FEEDING_CONSUMABLE_FIELD,
            Arc::new(FeedConsumables::new(Arc::clone(&consumables))),
        );
        let policy = StorePolicy::new(FEEDING_RULES).with_reference(reference);
        Self {
            records: EntityStore::new(seed, policy, latency),
            consumables,
        }
    }

    pub async fn find_all(&self) -> Vec<FeedingEntry> {
        let records = self.records.find_all().await;
        self.present_all(records)
    }

    pub async fn find_by_id(&self, id: EntityId) -> Option<FeedingEntry> {
        let record = self.records.find_by_id(id).await?;
        Some(self.present(record))
    }

    pub async fn find_by_aquarium_id(&self, aquarium_id: EntityId) -> Vec<FeedingEntry> {
        let records = self.records.find_by_aquarium_id(aquarium_id).await;
        self.present_all(records)
    }

    /// Creates a record after checking the consumable is an existing feed.
    pub async fn create(&self, draft: NewFeedingRecord) -> StoreResult<FeedingEntry> {
        let record = self.records.create(draft).await?;
        Ok(self.present(record))
    }

    /// Updates a record; the consumable is re-checked only when the patch changes it.
    pub async fn update(&self, patch: FeedingRecordPatch) -> StoreResult<FeedingEntry> {
        let record = self.records.update(patch).await?;
        Ok(self.present(record))
    }

    pub async fn remove(&self, id: EntityId) -> StoreResult<()> {
        self.records.remove(id).await
    }

    /// Stored records without display names.
    pub fn records(&self) -> &EntityStore<FeedingRecord> {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn present(&self, record: FeedingRecord) -> FeedingEntry {
        let consumable_name = self
            .consumables
            .peek(record.consumable_id)
            .map(|consumable| consumable.name);
        FeedingEntry {
            record,
            consumable_name,
        }
    }

    fn present_all(&self, records: Vec<FeedingRecord>) -> Vec<FeedingEntry> {
        let consumables = self.consumables.snapshot();
        records
            .into_iter()
            .map(|record| {
                let consumable_name = lookup_name(&consumables, record.consumable_id);
                FeedingEntry {
                    record,
                    consumable_name,
                }
            })
            .collect()
    }
}

fn lookup_name(consumables: &[Consumable], id: EntityId) -> Option<String> {
    consumables
        .iter()
        .find(|consumable| consumable.id == id)
        .map(|consumable| consumable.name.clone())
}
