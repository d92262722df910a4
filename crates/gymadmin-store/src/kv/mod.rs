//! `KvStorage` backends
//!
//! - `SqliteKv`: one row per key in `kv_entries`, batches in one transaction
//! - `JsonFileKv`: one JSON object per file, rewritten atomically per batch
//! - `MemoryStorage` (from gymadmin-core) for the `memory` backend

pub mod atomic;
pub mod json_file;
pub mod sqlite;

pub use json_file::JsonFileKv;
pub use sqlite::SqliteKv;

use gymadmin_core::config::{StorageBackend, StorageConfig};
use gymadmin_core::storage::{KvStorage, MemoryStorage};

use crate::errors::Result;

/// Open the backend selected by `config`
///
/// `config.hydration` also decides what happens to a JSON file that does
/// not parse at all.
pub fn open_backend(config: &StorageConfig) -> Result<Box<dyn KvStorage>> {
    tracing::debug!(
        backend = ?config.backend,
        path = %config.path.display(),
        "opening storage backend"
    );
    let storage: Box<dyn KvStorage> = match config.backend {
        StorageBackend::Sqlite => Box::new(SqliteKv::open(&config.path)?),
        StorageBackend::Json => {
            Box::new(JsonFileKv::open_with_policy(&config.path, config.hydration)?)
        }
        StorageBackend::Memory => Box::new(MemoryStorage::new()),
    };
    Ok(storage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_each_backend() {
        let dir = TempDir::new().unwrap();
        for (backend, file) in [
            (StorageBackend::Sqlite, "gym.db"),
            (StorageBackend::Json, "gym.json"),
            (StorageBackend::Memory, "unused"),
        ] {
            let config = StorageConfig {
                backend,
                path: dir.path().join(file),
                ..StorageConfig::default()
            };
            let mut storage = open_backend(&config).unwrap();
            storage.set("gym_members", "[]".to_string()).unwrap();
            assert_eq!(storage.get("gym_members").unwrap().as_deref(), Some("[]"));
        }
    }
}
