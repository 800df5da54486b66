//! Stores with field rules only: no derivation, no cross-reference.

use crate::model::equipment::{Equipment, EQUIPMENT_RULES};
use crate::model::medication::{MedicationRecord, MEDICATION_RULES};
use crate::model::organism::{Organism, ORGANISM_RULES};
use crate::model::water_change::{WaterChangeRecord, WATER_CHANGE_RULES};
use crate::model::water_quality::{WaterQualityRecord, WATER_QUALITY_RULES};
use crate::store::{EntityStore, Latency, StorePolicy};

pub type EquipmentStore = EntityStore<Equipment>;
pub type MedicationStore = EntityStore<MedicationRecord>;
pub type OrganismStore = EntityStore<Organism>;
pub type WaterChangeStore = EntityStore<WaterChangeRecord>;
pub type WaterQualityStore = EntityStore<WaterQualityRecord>;

pub fn equipment_store(seed: Vec<Equipment>, latency: Latency) -> EquipmentStore {
    EntityStore::new(seed, StorePolicy::new(EQUIPMENT_RULES), latency)
}

pub fn medication_store(seed: Vec<MedicationRecord>, latency: Latency) -> MedicationStore {
    EntityStore::new(seed, StorePolicy::new(MEDICATION_RULES), latency)
}

pub fn organism_store(seed: Vec<Organism>, latency: Latency) -> OrganismStore {
    EntityStore::new(seed, StorePolicy::new(ORGANISM_RULES), latency)
}

pub fn water_change_store(seed: Vec<WaterChangeRecord>, latency: Latency) -> WaterChangeStore {
    EntityStore::new(seed, StorePolicy::new(WATER_CHANGE_RULES), latency)
}

pub fn water_quality_store(seed: Vec<WaterQualityRecord>, latency: Latency) -> WaterQualityStore {
    EntityStore::new(seed, StorePolicy::new(WATER_QUALITY_RULES), latency)
}
