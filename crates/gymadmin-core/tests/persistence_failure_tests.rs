#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{seed_day, FlakyStorage};
use gymadmin_core::model::PersonDraft;
use gymadmin_core::storage::KvStorage;
use gymadmin_core::{Collection, GymError, GymStore, HydrationPolicy, SeedData};

fn store_over(storage: FlakyStorage) -> GymStore<FlakyStorage> {
    GymStore::open_with_seed(storage, HydrationPolicy::default(), SeedData::demo(seed_day()))
        .unwrap()
}

#[test]
fn test_open_survives_failing_initial_write() {
    let store = store_over(FlakyStorage::failing());
    assert_eq!(store.members().len(), 5);
    assert_eq!(store.pending().count(), 4);
}

#[test]
fn test_failed_write_keeps_memory_state_and_reports_keys() {
    let mut store = store_over(FlakyStorage::new());
    store.storage_mut().failing = true;

    let err = store.delete_member(1).unwrap_err();
    match &err {
        GymError::Persistence { keys, .. } => {
            assert_eq!(keys, &vec!["gym_members".to_string(), "gym_reservations".to_string()]);
        }
        other => panic!("expected Persistence, got {:?}", other),
    }
    assert_eq!(err.code(), "ERR_PERSISTENCE");

    assert_eq!(store.members().len(), 4);
    assert_eq!(store.reservations().len(), 1);
    assert_eq!(
        store.pending().collect::<Vec<_>>(),
        vec![Collection::Members, Collection::Reservations]
    );
}

#[test]
fn test_next_persist_retries_pending_keys() {
    let mut store = store_over(FlakyStorage::new());
    store.storage_mut().failing = true;
    let _ = store.delete_member(1);

    store.storage_mut().failing = false;
    store.persist().unwrap();
    assert_eq!(store.pending().count(), 0);

    let raw = store.storage().get("gym_reservations").unwrap().unwrap();
    assert!(!raw.contains("\"memberId\":1,"));
}

#[test]
fn test_next_mutation_flushes_earlier_failure_too() {
    let mut store = store_over(FlakyStorage::new());
    store.storage_mut().failing = true;
    let _ = store.delete_class(1);

    store.storage_mut().failing = false;
    store
        .add_instructor(PersonDraft::new("Iris", "Vega", "1", "2", "i@v"))
        .unwrap();

    assert_eq!(store.pending().count(), 0);
    let classes = store.storage().get("gym_classes").unwrap().unwrap();
    assert!(!classes.contains("Crossfit"));
}
