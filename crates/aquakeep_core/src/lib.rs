//! In-process resource stores for the aquarium keeping app.
//! This crate is the single source of truth for validation and identity rules.

pub mod config;
pub mod logging;
pub mod model;
pub mod rules;
pub mod seed;
pub mod service;
pub mod store;

pub use config::{BackendConfig, LogConfig, SeedSource};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::consumable::{
    Consumable, ConsumablePatch, ConsumableStatus, NewConsumable, FEED_TAG,
};
pub use model::equipment::{Equipment, EquipmentPatch, NewEquipment};
pub use model::feeding::{FeedingEntry, FeedingRecord, FeedingRecordPatch, NewFeedingRecord};
pub use model::medication::{MedicationRecord, MedicationRecordPatch, NewMedicationRecord};
pub use model::organism::{NewOrganism, Organism, OrganismPatch};
pub use model::water_change::{NewWaterChangeRecord, WaterChangeRecord, WaterChangeRecordPatch};
pub use model::water_quality::{
    NewWaterQualityRecord, WaterQualityRecord, WaterQualityRecordPatch,
};
pub use rules::{Check, FieldValue, Fields, Rule, ValidationError};
pub use seed::{SeedData, SeedError};
pub use service::backend::Backend;
pub use service::consumable_service::{ConsumableStore, FeedConsumables};
pub use service::feeding_service::FeedingStore;
pub use service::record_stores::{
    EquipmentStore, MedicationStore, OrganismStore, WaterChangeStore, WaterQualityStore,
};
pub use store::{
    AquariumScoped, CrossReference, Entity, EntityId, EntityStore, Latency, ReferenceTarget,
    StoreError, StorePolicy, StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
