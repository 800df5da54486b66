//! All seven stores wired together.

use crate::config::BackendConfig;
use crate::model::consumable::Consumable;
use crate::model::equipment::Equipment;
use crate::model::feeding::FeedingRecord;
use crate::model::medication::MedicationRecord;
use crate::model::organism::Organism;
use crate::model::water_change::WaterChangeRecord;
use crate::model::water_quality::WaterQualityRecord;
use crate::seed::{SeedData, SeedError};
use crate::service::consumable_service::{consumable_store, ConsumableStore};
use crate::service::feeding_service::FeedingStore;
use crate::service::record_stores::{
    equipment_store, medication_store, organism_store, water_change_store, water_quality_store,
    EquipmentStore, MedicationStore, OrganismStore, WaterChangeStore, WaterQualityStore,
};
use crate::store::{Entity, Latency};
use log::info;
use std::sync::Arc;

/// In-process stand-in for the aquarium backend.
///
/// Each store owns its records; the feeding store holds a shared handle to
/// the consumable store for reference checks and display names.
pub struct Backend {
    consumables: Arc<ConsumableStore>,
    equipment: EquipmentStore,
    feedings: FeedingStore,
    medications: MedicationStore,
    organisms: OrganismStore,
    water_changes: WaterChangeStore,
    water_quality: WaterQualityStore,
}

impl Backend {
    pub fn new(seed: SeedData, latency: Latency) -> Self {
        let SeedData {
            consumables,
            equipment,
            feedings,
            medications,
            organisms,
            water_changes,
            water_quality,
        } = seed;

        let consumables = Arc::new(consumable_store(consumables, latency));
        let backend = Self {
            feedings: FeedingStore::new(feedings, Arc::clone(&consumables), latency),
            consumables,
            equipment: equipment_store(equipment, latency),
            medications: medication_store(medications, latency),
            organisms: organism_store(organisms, latency),
            water_changes: water_change_store(water_changes, latency),
            water_quality: water_quality_store(water_quality, latency),
        };

        info!(
            "event=backend_init module=service status=ok latency_ms={} records={}",
            latency.duration().as_millis(),
            backend.counts().iter().map(|(_, count)| count).sum::<usize>()
        );
        backend
    }

    /// Loads the configured seed and builds every store.
    pub fn from_config(config: &BackendConfig) -> Result<Self, SeedError> {
        let seed = config.seed.load()?;
        Ok(Self::new(seed, config.latency))
    }

    pub fn consumables(&self) -> &ConsumableStore {
        &self.consumables
    }

    pub fn equipment(&self) -> &EquipmentStore {
        &self.equipment
    }

    pub fn feedings(&self) -> &FeedingStore {
        &self.feedings
    }

    pub fn medications(&self) -> &MedicationStore {
        &self.medications
    }

    pub fn organisms(&self) -> &OrganismStore {
        &self.organisms
    }

    pub fn water_changes(&self) -> &WaterChangeStore {
        &self.water_changes
    }

    pub fn water_quality(&self) -> &WaterQualityStore {
        &self.water_quality
    }

    /// Current record counts per entity type, in a stable order.
    pub fn counts(&self) -> [(&'static str, usize); 7] {
        [
            (Consumable::KIND, self.consumables.len()),
            (Equipment::KIND, self.equipment.len()),
            (FeedingRecord::KIND, self.feedings.len()),
            (MedicationRecord::KIND, self.medications.len()),
            (Organism::KIND, self.organisms.len()),
            (WaterChangeRecord::KIND, self.water_changes.len()),
            (WaterQualityRecord::KIND, self.water_quality.len()),
        ]
    }
}
