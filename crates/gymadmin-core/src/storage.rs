//! Durable key-value medium the store persists into
//!
//! The store only ever reads whole values at hydration and overwrites whole
//! values afterwards. Backends live in `gymadmin-store`; `MemoryStorage` is
//! the in-process fake used by tests and the `memory` backend.

use std::collections::BTreeMap;

use crate::errors::Result;

/// Injectable key-value backend
pub trait KvStorage {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite every `(key, value)` pair as one unit
    ///
    /// Backends that can should make the batch atomic so that a cascading
    /// delete never becomes visible half-written.
    fn write_batch(&mut self, entries: &[(&str, String)]) -> Result<()>;

    /// Overwrite a single key
    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.write_batch(&[(key, value)])
    }
}

impl<S: KvStorage + ?Sized> KvStorage for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn write_batch(&mut self, entries: &[(&str, String)]) -> Result<()> {
        (**self).write_batch(entries)
    }
}

/// Volatile storage backed by a BTreeMap
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, e.g. to simulate data left by an earlier run
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Number of batches written so far
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl KvStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write_batch(&mut self, entries: &[(&str, String)]) -> Result<()> {
        for (key, value) in entries {
            self.entries.insert((*key).to_string(), value.clone());
        }
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_returns_none() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("gym_members").unwrap(), None);
    }

    #[test]
    fn test_batch_counts_as_one_write() {
        let mut storage = MemoryStorage::new();
        storage
            .write_batch(&[
                ("gym_members", "[]".to_string()),
                ("gym_reservations", "[]".to_string()),
            ])
            .unwrap();

        assert_eq!(storage.write_count(), 1);
        assert_eq!(
            storage.keys().collect::<Vec<_>>(),
            vec!["gym_members", "gym_reservations"]
        );
    }

    #[test]
    fn test_set_overwrites() {
        let mut storage = MemoryStorage::new().with_entry("gym_classes", "[1]");
        storage.set("gym_classes", "[2]".to_string()).unwrap();
        assert_eq!(storage.get("gym_classes").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn test_boxed_storage_delegates() {
        let mut boxed: Box<dyn KvStorage> = Box::new(MemoryStorage::new());
        boxed.set("k", "v".to_string()).unwrap();
        assert_eq!(boxed.get("k").unwrap().as_deref(), Some("v"));
    }
}
