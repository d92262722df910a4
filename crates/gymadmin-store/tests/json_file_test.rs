// JsonFileKv behind a GymStore

use chrono::NaiveDate;
use gymadmin_core::config::{StorageBackend, StorageConfig};
use gymadmin_core::model::PersonDraft;
use gymadmin_core::{GymStore, HydrationPolicy, SeedData};
use gymadmin_store::{open_backend, JsonFileKv};
use tempfile::TempDir;

#[test]
fn test_file_holds_every_collection_under_its_key() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gym.json");

    let kv = JsonFileKv::open(&path).unwrap();
    let day = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
    GymStore::open_with_seed(kv, HydrationPolicy::default(), SeedData::demo(day)).unwrap();

    let document: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    for key in ["gym_members", "gym_instructors", "gym_classes", "gym_reservations"] {
        let value = document[key].as_str().expect("value stored as a JSON string");
        assert!(value.starts_with('['), "{} holds {}", key, value);
    }
}

#[test]
fn test_mutations_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gym.json");

    {
        let kv = JsonFileKv::open(&path).unwrap();
        let mut store =
            GymStore::open_with_seed(kv, HydrationPolicy::default(), SeedData::empty()).unwrap();
        store
            .add_member(PersonDraft::new("Ana", "Diaz", "1", "2", "a@d"))
            .unwrap();
    }

    let kv = JsonFileKv::open(&path).unwrap();
    let store = GymStore::open_with_seed(kv, HydrationPolicy::Strict, SeedData::empty()).unwrap();
    assert_eq!(store.members().len(), 1);
    assert_eq!(store.members()[0].details.first_name, "Ana");
}

fn json_config(path: &std::path::Path, hydration: HydrationPolicy) -> StorageConfig {
    StorageConfig {
        backend: StorageBackend::Json,
        path: path.to_path_buf(),
        hydration,
    }
}

#[test]
fn test_unparseable_file_falls_back_to_seed_by_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gym.json");
    std::fs::write(&path, r#"{"gym_members": "[tru"#).unwrap();

    let storage = open_backend(&json_config(&path, HydrationPolicy::FallbackToSeed)).unwrap();
    let store = GymStore::open(storage, HydrationPolicy::FallbackToSeed).unwrap();

    assert_eq!(store.members().len(), 5);
    assert_eq!(store.hydration_report().seeded.len(), 4);

    let document: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(document["gym_members"].as_str().unwrap().starts_with('['));
}

#[test]
fn test_unparseable_file_is_refused_when_strict() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gym.json");
    std::fs::write(&path, r#"{"gym_members": "[tru"#).unwrap();

    let err = open_backend(&json_config(&path, HydrationPolicy::Strict))
        .err()
        .expect("strict open refuses the file");
    assert_eq!(err.code(), "ERR_CORRUPT_STATE");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"gym_members": "[tru"#);
}
