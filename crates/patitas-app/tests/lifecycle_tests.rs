// Rust guideline compliant 2026-10-16

mod common;

use common::{fixed_today, record, FakeStore};
use patitas_app::{ErrorCode, LifecycleManager, Snapshot, View};
use patitas_core::{RecordDraft, RecordId, Sex, Species, Status};

fn manager(records: Vec<patitas_core::AnimalRecord>) -> LifecycleManager<FakeStore> {
    LifecycleManager::with_clock(FakeStore::new(records), fixed_today)
}

fn draft() -> RecordDraft {
    RecordDraft {
        name: "Michi".to_string(),
        species: Some(Species::Feline),
        sex: Some(Sex::Female),
        age: "9 meses".to_string(),
        description: "Tranquila".to_string(),
        vaccinated: true,
        neutered: true,
        contact_phone: String::new(),
        shelter_code: "REF2".to_string(),
        image_url: String::new(),
    }
}

#[tokio::test]
async fn test_mark_adopted_sets_date_and_refreshes() {
    let manager = manager(vec![record("1", Status::Available), record("2", Status::Available)]);
    let mut snapshot = Snapshot::load(manager.store(), View::Available).await;
    assert_eq!(snapshot.records().len(), 2);

    let adopted = manager
        .mark_adopted(&mut snapshot, &RecordId::new("1"))
        .await
        .unwrap();

    assert_eq!(adopted.status, Status::Adopted);
    assert_eq!(adopted.adopted_on, Some(fixed_today()));
    assert_eq!(snapshot.records().len(), 1);
    assert_eq!(snapshot.records()[0].id.as_str(), "2");
    assert_eq!(manager.store().mutations(), vec!["PUT 1 mark adopted".to_string()]);
}

#[tokio::test]
async fn test_mark_adopted_twice_fails_without_second_call() {
    let manager = manager(vec![record("1", Status::Available)]);
    let mut snapshot = Snapshot::load(manager.store(), View::StatusReport).await;
    let id = RecordId::new("1");

    manager.mark_adopted(&mut snapshot, &id).await.unwrap();
    let err = manager.mark_adopted(&mut snapshot, &id).await.unwrap_err();

    assert_eq!(err.code(), ErrorCode::InvalidTransition);
    assert_eq!(manager.store().mutations().len(), 1);
}

#[tokio::test]
async fn test_reactivate_resets_upload_date() {
    let manager = manager(vec![record("5", Status::Inactive)]);
    let mut snapshot = Snapshot::load(manager.store(), View::Inactive).await;

    let reactivated = manager
        .reactivate(&mut snapshot, &RecordId::new("5"))
        .await
        .unwrap();

    assert_eq!(reactivated.status, Status::Available);
    assert_eq!(reactivated.uploaded_on, Some(fixed_today()));
    assert!(snapshot.records().is_empty());
    assert_eq!(manager.store().records()[0].status, Status::Available);
}

#[tokio::test]
async fn test_illegal_transitions_never_reach_the_store() {
    let manager = manager(vec![
        record("1", Status::Adopted),
        record("2", Status::Inactive),
        record("3", Status::Available),
    ]);
    let mut snapshot = Snapshot::load(manager.store(), View::StatusReport).await;

    let err = manager
        .deactivate(&mut snapshot, &RecordId::new("1"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidTransition);

    let err = manager
        .mark_adopted(&mut snapshot, &RecordId::new("2"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidTransition);

    let err = manager
        .reactivate(&mut snapshot, &RecordId::new("3"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidTransition);

    assert!(manager.store().mutations().is_empty());
}

#[tokio::test]
async fn test_unknown_record_is_invalid_input() {
    let manager = manager(vec![record("1", Status::Available)]);
    let mut snapshot = Snapshot::load(manager.store(), View::Available).await;

    let err = manager
        .deactivate(&mut snapshot, &RecordId::new("99"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_rejected_transition_leaves_snapshot_untouched() {
    let manager = manager(vec![record("1", Status::Available)]);
    let mut snapshot = Snapshot::load(manager.store(), View::Available).await;
    manager.store().reject_mutations(500);

    let err = manager
        .deactivate(&mut snapshot, &RecordId::new("1"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::RemoteRejected);
    assert_eq!(snapshot.records().len(), 1);
    assert_eq!(snapshot.records()[0].status, Status::Available);
    assert!(snapshot.error().is_none());
}

#[tokio::test]
async fn test_transition_on_record_moved_by_another_client_is_invalid() {
    let manager = manager(vec![record("1", Status::Available)]);
    let mut snapshot = Snapshot::load(manager.store(), View::Available).await;
    manager.store().set_status("1", Status::Adopted);

    let err = manager
        .mark_adopted(&mut snapshot, &RecordId::new("1"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::InvalidTransition);
    assert_eq!(manager.store().mutations().len(), 1);
    assert_eq!(snapshot.records()[0].status, Status::Available);
}

#[tokio::test]
async fn test_network_failure_is_retryable() {
    let manager = manager(vec![record("1", Status::Available)]);
    let mut snapshot = Snapshot::load(manager.store(), View::Available).await;
    manager.store().set_offline(true);

    let err = manager
        .mark_adopted(&mut snapshot, &RecordId::new("1"))
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrorCode::NetworkUnavailable);
    assert!(err.is_retryable());
    assert_eq!(snapshot.records().len(), 1);
}

#[tokio::test]
async fn test_register_validates_before_sending() {
    let manager = manager(Vec::new());
    let mut snapshot = Snapshot::load(manager.store(), View::Available).await;

    let mut bad_age = draft();
    bad_age.age = "dos años".to_string();
    let err = manager.register(&mut snapshot, &bad_age).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidInput);

    let mut bad_shelter = draft();
    bad_shelter.shelter_code = "ZZZ".to_string();
    let err = manager
        .register(&mut snapshot, &bad_shelter)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidInput);

    assert!(manager.store().mutations().is_empty());
}

#[tokio::test]
async fn test_register_creates_available_record() {
    let manager = manager(Vec::new());
    let mut snapshot = Snapshot::load(manager.store(), View::Available).await;

    manager.register(&mut snapshot, &draft()).await.unwrap();

    assert_eq!(snapshot.records().len(), 1);
    let created = &snapshot.records()[0];
    assert_eq!(created.name, "Michi");
    assert_eq!(created.status, Status::Available);
    assert_eq!(created.age.as_str(), "9 meses");
}

#[tokio::test]
async fn test_edit_replaces_fields_and_keeps_status() {
    let manager = manager(vec![record("1", Status::Available)]);
    let mut snapshot = Snapshot::load(manager.store(), View::Available).await;

    let mut edited = RecordDraft::from_record(&snapshot.records()[0]);
    edited.name = "Firulais".to_string();
    edited.neutered = true;
    manager
        .edit(&mut snapshot, &RecordId::new("1"), &edited)
        .await
        .unwrap();

    let record = &snapshot.records()[0];
    assert_eq!(record.name, "Firulais");
    assert!(record.neutered);
    assert_eq!(record.status, Status::Available);
}
