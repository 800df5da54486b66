//! Initial store contents.
//!
//! # Responsibility
//! - Parse the bundled JSON fixtures into fully formed records.
//! - Reject seed sets that would break store invariants from the start.
//!
//! # Invariants
//! - Ids are unique within each entity type.
//! - Every seeded feeding record points at a seeded consumable tagged "feed".

use crate::model::consumable::Consumable;
use crate::model::equipment::Equipment;
use crate::model::feeding::FeedingRecord;
use crate::model::medication::MedicationRecord;
use crate::model::organism::Organism;
use crate::model::water_change::WaterChangeRecord;
use crate::model::water_quality::WaterQualityRecord;
use crate::store::{Entity, EntityId};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

const CONSUMABLES_JSON: &str = include_str!("../fixtures/consumables.json");
const EQUIPMENT_JSON: &str = include_str!("../fixtures/equipment.json");
const FEEDINGS_JSON: &str = include_str!("../fixtures/feedings.json");
const MEDICATIONS_JSON: &str = include_str!("../fixtures/medications.json");
const ORGANISMS_JSON: &str = include_str!("../fixtures/organisms.json");
const WATER_CHANGES_JSON: &str = include_str!("../fixtures/water_changes.json");
const WATER_QUALITY_JSON: &str = include_str!("../fixtures/water_quality.json");

#[derive(Debug)]
pub enum SeedError {
    Parse {
        kind: &'static str,
        source: serde_json::Error,
    },
    DuplicateId {
        kind: &'static str,
        id: EntityId,
    },
    DanglingReference {
        kind: &'static str,
        id: EntityId,
        consumable_id: EntityId,
    },
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { kind, source } => write!(f, "invalid {kind} seed data: {source}"),
            Self::DuplicateId { kind, id } => write!(f, "duplicate {kind} seed id: {id}"),
            Self::DanglingReference {
                kind,
                id,
                consumable_id,
            } => write!(
                f,
                "{kind} seed {id} references consumable {consumable_id}, which is not a seeded feed"
            ),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse { source, .. } => Some(source),
            Self::DuplicateId { .. } => None,
            Self::DanglingReference { .. } => None,
        }
    }
}

/// Ordered initial records for all seven stores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedData {
    pub consumables: Vec<Consumable>,
    pub equipment: Vec<Equipment>,
    pub feedings: Vec<FeedingRecord>,
    pub medications: Vec<MedicationRecord>,
    pub organisms: Vec<Organism>,
    pub water_changes: Vec<WaterChangeRecord>,
    pub water_quality: Vec<WaterQualityRecord>,
}

impl SeedData {
    /// Seed with no records; every store starts assigning ids at 1.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses and checks the fixtures compiled into this crate.
    pub fn bundled() -> Result<Self, SeedError> {
        let seed = Self {
            consumables: parse(CONSUMABLES_JSON)?,
            equipment: parse(EQUIPMENT_JSON)?,
            feedings: parse(FEEDINGS_JSON)?,
            medications: parse(MEDICATIONS_JSON)?,
            organisms: parse(ORGANISMS_JSON)?,
            water_changes: parse(WATER_CHANGES_JSON)?,
            water_quality: parse(WATER_QUALITY_JSON)?,
        };
        seed.check()?;
        Ok(seed)
    }

    /// Checks id uniqueness and feeding references across the whole seed.
    pub fn check(&self) -> Result<(), SeedError> {
        ensure_unique_ids(&self.consumables)?;
        ensure_unique_ids(&self.equipment)?;
        ensure_unique_ids(&self.feedings)?;
        ensure_unique_ids(&self.medications)?;
        ensure_unique_ids(&self.organisms)?;
        ensure_unique_ids(&self.water_changes)?;
        ensure_unique_ids(&self.water_quality)?;

        let feeds: HashSet<EntityId> = self
            .consumables
            .iter()
            .filter(|consumable| consumable.is_feed())
            .map(|consumable| consumable.id)
            .collect();
        for feeding in &self.feedings {
            if !feeds.contains(&feeding.consumable_id) {
                return Err(SeedError::DanglingReference {
                    kind: FeedingRecord::KIND,
                    id: feeding.id,
                    consumable_id: feeding.consumable_id,
                });
            }
        }

        Ok(())
    }

    /// Record counts per entity type, in a stable order.
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

fn parse<T: Entity + DeserializeOwned>(json: &str) -> Result<Vec<T>, SeedError> {
    serde_json::from_str(json).map_err(|source| SeedError::Parse {
        kind: T::KIND,
        source,
    })
}

fn ensure_unique_ids<T: Entity>(records: &[T]) -> Result<(), SeedError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(SeedError::DuplicateId {
                kind: T::KIND,
                id: record.id(),
            });
        }
    }
    Ok(())
}
