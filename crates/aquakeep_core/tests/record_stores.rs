use aquakeep_core::{
    Backend, BackendConfig, EquipmentPatch, MedicationRecordPatch, NewEquipment,
    NewMedicationRecord, NewOrganism, NewWaterChangeRecord, NewWaterQualityRecord, OrganismPatch,
    StoreError, WaterChangeRecordPatch, WaterQualityRecordPatch,
};

fn backend() -> Backend {
    Backend::from_config(&BackendConfig::immediate()).unwrap()
}

fn violated_field(err: StoreError) -> &'static str {
    match err {
        StoreError::Validation(violation) => violation.field,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn equipment_checks_name_before_status() {
    let backend = backend();
    let err = backend
        .equipment()
        .create(NewEquipment {
            name: String::new(),
            status: String::new(),
            tag: "filter".to_string(),
            price: 10.0,
        })
        .await
        .unwrap_err();
    assert_eq!(violated_field(err), "name");

    let err = backend
        .equipment()
        .update(EquipmentPatch {
            id: 1,
            status: Some(String::new()),
            ..EquipmentPatch::default()
        })
        .await
        .unwrap_err();
    assert_eq!(violated_field(err), "status");
}

#[tokio::test]
async fn medication_requires_dosage_but_accepts_zero() {
    let backend = backend();
    let draft = NewMedicationRecord {
        aquarium_id: 2,
        medication_name: "Methylene Blue".to_string(),
        tag: "antifungal".to_string(),
        dosage: None,
        date: "2024-05-10".to_string(),
    };

    let err = backend
        .medications()
        .create(draft.clone())
        .await
        .unwrap_err();
    assert_eq!(violated_field(err), "dosage");

    let created = backend
        .medications()
        .create(NewMedicationRecord {
            dosage: Some(0.0),
            ..draft
        })
        .await
        .unwrap();
    assert_eq!(created.dosage, 0.0);
    assert_eq!(created.id, 3);
}

#[tokio::test]
async fn medication_json_null_dosage_is_rejected() {
    let backend = backend();
    let draft: NewMedicationRecord = serde_json::from_value(serde_json::json!({
        "aquariumId": 1,
        "medicationName": "Salt",
        "tag": "tonic",
        "dosage": null
    }))
    .unwrap();

    let err = backend.medications().create(draft).await.unwrap_err();
    assert_eq!(violated_field(err), "dosage");
}

#[tokio::test]
async fn medication_requires_aquarium() {
    let backend = backend();
    let err = backend
        .medications()
        .update(MedicationRecordPatch {
            id: 1,
            aquarium_id: Some(Some(0)),
            ..MedicationRecordPatch::default()
        })
        .await
        .unwrap_err();
    assert_eq!(violated_field(err), "aquarium_id");
    assert_eq!(backend.medications().peek(1).unwrap().aquarium_id, 1);
}

#[tokio::test]
async fn organism_length_is_optional_but_never_negative() {
    let backend = backend();
    let draft = NewOrganism {
        aquarium_id: 2,
        name: "Nerite Snail".to_string(),
        tag: "invertebrate".to_string(),
        price: 2.0,
        length: None,
    };

    let created = backend.organisms().create(draft.clone()).await.unwrap();
    assert_eq!(created.length, None);

    let err = backend
        .organisms()
        .create(NewOrganism {
            length: Some(-1.0),
            ..draft
        })
        .await
        .unwrap_err();
    assert_eq!(violated_field(err), "length");

    let err = backend
        .organisms()
        .update(OrganismPatch {
            id: created.id,
            length: Some(Some(-0.1)),
            ..OrganismPatch::default()
        })
        .await
        .unwrap_err();
    assert_eq!(violated_field(err), "length");
}

#[tokio::test]
async fn organisms_filter_by_aquarium() {
    let backend = backend();
    let names: Vec<String> = backend
        .organisms()
        .find_by_aquarium_id(2)
        .await
        .into_iter()
        .map(|organism| organism.name)
        .collect();
    assert_eq!(names, vec!["Cherry Shrimp", "Java Fern"]);
}

#[tokio::test]
async fn water_change_requires_ratio_and_date() {
    let backend = backend();
    let err = backend
        .water_changes()
        .create(NewWaterChangeRecord {
            aquarium_id: 1,
            date: "\t".to_string(),
            water_change_ratio: Some(15.0),
        })
        .await
        .unwrap_err();
    assert_eq!(violated_field(err), "date");

    let err = backend
        .water_changes()
        .create(NewWaterChangeRecord {
            aquarium_id: 1,
            date: "2024-05-12".to_string(),
            water_change_ratio: None,
        })
        .await
        .unwrap_err();
    assert_eq!(violated_field(err), "water_change_ratio");
}

#[tokio::test]
async fn water_change_partial_update_keeps_other_fields() {
    let backend = backend();
    let updated = backend
        .water_changes()
        .update(WaterChangeRecordPatch {
            id: 3,
            water_change_ratio: Some(Some(50.0)),
            ..WaterChangeRecordPatch::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.water_change_ratio, 50.0);
    assert_eq!(updated.date, "2024-05-04");
    assert_eq!(updated.aquarium_id, 1);

    let ids: Vec<i64> = backend
        .water_changes()
        .find_by_aquarium_id(1)
        .await
        .into_iter()
        .map(|record| record.id)
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn water_quality_rules() {
    let backend = backend();
    let err = backend
        .water_quality()
        .create(NewWaterQualityRecord {
            aquarium_id: 1,
            test_type: String::new(),
            test_date: "2024-05-12".to_string(),
            value: Some(7.0),
        })
        .await
        .unwrap_err();
    assert_eq!(violated_field(err), "test_type");

    let err = backend
        .water_quality()
        .update(WaterQualityRecordPatch {
            id: 2,
            test_date: Some("  ".to_string()),
            ..WaterQualityRecordPatch::default()
        })
        .await
        .unwrap_err();
    assert_eq!(violated_field(err), "test_date");

    let updated = backend
        .water_quality()
        .update(WaterQualityRecordPatch {
            id: 2,
            value: Some(Some(0.25)),
            ..WaterQualityRecordPatch::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.test_type, "ammonia");
    assert_eq!(updated.value, 0.25);
}

#[tokio::test]
async fn remove_does_not_cascade_across_stores() {
    let backend = backend();
    let organisms_before = backend.organisms().len();

    backend.water_quality().remove(1).await.unwrap();
    backend.water_changes().remove(1).await.unwrap();

    assert_eq!(backend.organisms().len(), organisms_before);
    assert_eq!(backend.water_quality().find_by_aquarium_id(1).await.len(), 1);
    assert!(backend.water_quality().find_by_id(1).await.is_none());
}

#[tokio::test]
async fn medication_update_rejects_null_dosage_and_aquarium() {
    let backend = backend();
    let before = backend.medications().peek(1).unwrap();

    let patch: MedicationRecordPatch =
        serde_json::from_value(serde_json::json!({ "id": 1, "dosage": null })).unwrap();
    assert_eq!(patch.dosage, Some(None));
    let err = backend.medications().update(patch).await.unwrap_err();
    assert_eq!(violated_field(err), "dosage");

    let patch: MedicationRecordPatch =
        serde_json::from_value(serde_json::json!({ "id": 1, "aquariumId": null })).unwrap();
    let err = backend.medications().update(patch).await.unwrap_err();
    assert_eq!(violated_field(err), "aquarium_id");

    assert_eq!(backend.medications().peek(1), Some(before));
}

#[tokio::test]
async fn water_change_update_rejects_null_ratio_and_aquarium() {
    let backend = backend();

    let patch: WaterChangeRecordPatch = serde_json::from_value(serde_json::json!({
        "id": 2,
        "waterChangeRatio": null
    }))
    .unwrap();
    let err = backend.water_changes().update(patch).await.unwrap_err();
    assert_eq!(violated_field(err), "water_change_ratio");

    let patch: WaterChangeRecordPatch =
        serde_json::from_value(serde_json::json!({ "id": 2, "aquariumId": null })).unwrap();
    let err = backend.water_changes().update(patch).await.unwrap_err();
    assert_eq!(violated_field(err), "aquarium_id");

    assert_eq!(backend.water_changes().peek(2).unwrap().water_change_ratio, 10.0);
}

#[tokio::test]
async fn water_quality_update_rejects_null_value() {
    let backend = backend();
    let patch: WaterQualityRecordPatch =
        serde_json::from_value(serde_json::json!({ "id": 1, "value": null })).unwrap();

    let err = backend.water_quality().update(patch).await.unwrap_err();
    assert_eq!(violated_field(err), "value");
    assert_eq!(backend.water_quality().peek(1).unwrap().value, 6.8);
}

#[tokio::test]
async fn organism_update_with_null_length_clears_it() {
    let backend = backend();
    assert_eq!(backend.organisms().peek(1).unwrap().length, Some(3.0));

    let untouched: OrganismPatch =
        serde_json::from_value(serde_json::json!({ "id": 1, "price": 1.75 })).unwrap();
    let updated = backend.organisms().update(untouched).await.unwrap();
    assert_eq!(updated.length, Some(3.0));

    let cleared: OrganismPatch =
        serde_json::from_value(serde_json::json!({ "id": 1, "length": null })).unwrap();
    let updated = backend.organisms().update(cleared).await.unwrap();
    assert_eq!(updated.length, None);
    assert_eq!(updated.price, 1.75);
    assert_eq!(updated.name, "Neon Tetra");
}

#[test]
fn patch_serializes_null_but_skips_missing() {
    let patch = OrganismPatch {
        id: 4,
        length: Some(None),
        ..OrganismPatch::default()
    };
    let json = serde_json::to_value(&patch).unwrap();
    assert_eq!(json, serde_json::json!({ "id": 4, "length": null }));
}
