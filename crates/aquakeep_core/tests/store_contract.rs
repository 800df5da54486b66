use aquakeep_core::{
    Backend, BackendConfig, ConsumablePatch, Entity, EntityStore, EquipmentPatch,
    FeedingRecordPatch, MedicationRecordPatch, NewConsumable, NewEquipment, NewFeedingRecord,
    NewMedicationRecord, NewOrganism, NewWaterChangeRecord, NewWaterQualityRecord, OrganismPatch,
    StoreError, WaterChangeRecordPatch, WaterQualityRecordPatch,
};
use std::fmt::Debug;

fn backend() -> Backend {
    Backend::from_config(&BackendConfig::immediate()).unwrap()
}

/// Exercises the shared create/update/remove contract on one seeded store.
///
/// `valid` and `invalid` are create payloads; `partial` changes exactly the
/// fields `expect_partial` applies to the record it targets.
async fn check_contract<T, F>(
    store: &EntityStore<T>,
    valid: T::Draft,
    invalid: T::Draft,
    partial: T::Patch,
    missing: T::Patch,
    expect_partial: F,
) where
    T: Entity + PartialEq + Debug,
    T::Draft: Clone,
    F: FnOnce(T) -> T,
{
    // create appends exactly one record with id = prior max + 1
    let before = store.find_all().await;
    let prior_max = before.iter().map(Entity::id).max().unwrap_or(0);
    let created = store.create(valid.clone()).await.unwrap();
    assert_eq!(created.id(), prior_max + 1);
    let after = store.find_all().await;
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last(), Some(&created));
    assert_eq!(after[..before.len()], before[..]);

    // rejected create leaves contents untouched
    let snapshot = store.find_all().await;
    let err = store.create(invalid).await.unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)), "got {err:?}");
    assert_eq!(store.find_all().await, snapshot);

    // update of an unknown id leaves contents untouched
    let err = store.update(missing).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }), "got {err:?}");
    assert_eq!(store.find_all().await, snapshot);

    // partial update keeps every unsupplied field
    let target_id = T::patch_id(&partial);
    let original = store.find_by_id(target_id).await.unwrap();
    let updated = store.update(partial).await.unwrap();
    assert_eq!(updated, expect_partial(original));
    assert_eq!(store.find_by_id(target_id).await, Some(updated));

    // remove drops exactly one record; unknown ids are rejected
    let count = store.find_all().await.len();
    store.remove(target_id).await.unwrap();
    let remaining = store.find_all().await;
    assert_eq!(remaining.len(), count - 1);
    assert!(remaining.iter().all(|record| record.id() != target_id));
    let err = store.remove(target_id).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }), "got {err:?}");
    assert_eq!(store.find_all().await.len(), count - 1);

    // ids are never reused, even for the newest record
    let first = store.create(valid.clone()).await.unwrap();
    store.remove(first.id()).await.unwrap();
    let second = store.create(valid).await.unwrap();
    assert!(second.id() > first.id());
    assert!(second.id() > created.id());
}

#[tokio::test]
async fn consumable_store_honors_contract() {
    let backend = backend();
    check_contract(
        backend.consumables(),
        NewConsumable {
            name: "Spirulina Wafers".to_string(),
            tag: "feed".to_string(),
            price: 5.0,
            quantity: 10,
        },
        NewConsumable {
            name: "Carbon".to_string(),
            tag: "filter media".to_string(),
            price: 3.0,
            quantity: -1,
        },
        ConsumablePatch {
            id: 3,
            price: Some(4.75),
            ..ConsumablePatch::default()
        },
        ConsumablePatch {
            id: 404,
            name: Some("ghost".to_string()),
            ..ConsumablePatch::default()
        },
        |mut consumable| {
            consumable.price = 4.75;
            consumable
        },
    )
    .await;
}

#[tokio::test]
async fn equipment_store_honors_contract() {
    let backend = backend();
    check_contract(
        backend.equipment(),
        NewEquipment {
            name: "Air Pump".to_string(),
            tag: "aeration".to_string(),
            status: "running".to_string(),
            price: 15.0,
        },
        NewEquipment {
            name: "  ".to_string(),
            tag: "aeration".to_string(),
            status: "running".to_string(),
            price: 15.0,
        },
        EquipmentPatch {
            id: 2,
            status: Some("broken".to_string()),
            ..EquipmentPatch::default()
        },
        EquipmentPatch {
            id: 404,
            ..EquipmentPatch::default()
        },
        |mut equipment| {
            equipment.status = "broken".to_string();
            equipment
        },
    )
    .await;
}

#[tokio::test]
async fn feeding_store_honors_contract() {
    let backend = backend();
    check_contract(
        backend.feedings().records(),
        NewFeedingRecord {
            aquarium_id: 2,
            consumable_id: 4,
            date: "2024-05-10".to_string(),
            note: None,
        },
        NewFeedingRecord {
            aquarium_id: 2,
            consumable_id: 4,
            date: String::new(),
            note: None,
        },
        FeedingRecordPatch {
            id: 1,
            note: Some(Some("half portion".to_string())),
            ..FeedingRecordPatch::default()
        },
        FeedingRecordPatch {
            id: 404,
            date: Some("2024-05-11".to_string()),
            ..FeedingRecordPatch::default()
        },
        |mut feeding| {
            feeding.note = Some("half portion".to_string());
            feeding
        },
    )
    .await;
}

#[tokio::test]
async fn medication_store_honors_contract() {
    let backend = backend();
    check_contract(
        backend.medications(),
        NewMedicationRecord {
            aquarium_id: 1,
            medication_name: "Aquarium Salt".to_string(),
            tag: "tonic".to_string(),
            dosage: Some(3.0),
            date: "2024-05-10".to_string(),
        },
        NewMedicationRecord {
            aquarium_id: 1,
            medication_name: "Aquarium Salt".to_string(),
            tag: "tonic".to_string(),
            dosage: None,
            date: "2024-05-10".to_string(),
        },
        MedicationRecordPatch {
            id: 1,
            dosage: Some(Some(2.0)),
            ..MedicationRecordPatch::default()
        },
        MedicationRecordPatch {
            id: 404,
            ..MedicationRecordPatch::default()
        },
        |mut medication| {
            medication.dosage = 2.0;
            medication
        },
    )
    .await;
}

#[tokio::test]
async fn organism_store_honors_contract() {
    let backend = backend();
    check_contract(
        backend.organisms(),
        NewOrganism {
            aquarium_id: 1,
            name: "Otocinclus".to_string(),
            tag: "fish".to_string(),
            price: 2.5,
            length: Some(2.0),
        },
        NewOrganism {
            aquarium_id: 1,
            name: "Otocinclus".to_string(),
            tag: "fish".to_string(),
            price: -2.5,
            length: None,
        },
        OrganismPatch {
            id: 3,
            aquarium_id: Some(1),
            ..OrganismPatch::default()
        },
        OrganismPatch {
            id: 404,
            name: Some("ghost".to_string()),
            ..OrganismPatch::default()
        },
        |mut organism| {
            organism.aquarium_id = 1;
            organism
        },
    )
    .await;
}

#[tokio::test]
async fn water_change_store_honors_contract() {
    let backend = backend();
    check_contract(
        backend.water_changes(),
        NewWaterChangeRecord {
            aquarium_id: 2,
            date: "2024-05-10".to_string(),
            water_change_ratio: Some(20.0),
        },
        NewWaterChangeRecord {
            aquarium_id: 2,
            date: "2024-05-10".to_string(),
            water_change_ratio: None,
        },
        WaterChangeRecordPatch {
            id: 2,
            date: Some("2024-04-30".to_string()),
            ..WaterChangeRecordPatch::default()
        },
        WaterChangeRecordPatch {
            id: 404,
            ..WaterChangeRecordPatch::default()
        },
        |mut water_change| {
            water_change.date = "2024-04-30".to_string();
            water_change
        },
    )
    .await;
}

#[tokio::test]
async fn water_quality_store_honors_contract() {
    let backend = backend();
    check_contract(
        backend.water_quality(),
        NewWaterQualityRecord {
            aquarium_id: 2,
            test_type: "nitrite".to_string(),
            test_date: "2024-05-10".to_string(),
            value: Some(0.0),
        },
        NewWaterQualityRecord {
            aquarium_id: 0,
            test_type: "nitrite".to_string(),
            test_date: "2024-05-10".to_string(),
            value: Some(0.0),
        },
        WaterQualityRecordPatch {
            id: 1,
            value: Some(Some(7.1)),
            ..WaterQualityRecordPatch::default()
        },
        WaterQualityRecordPatch {
            id: 404,
            value: Some(Some(1.0)),
            ..WaterQualityRecordPatch::default()
        },
        |mut water_quality| {
            water_quality.value = 7.1;
            water_quality
        },
    )
    .await;
}
