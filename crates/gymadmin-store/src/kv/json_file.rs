//! Single-file JSON backend
//!
//! The file holds one object mapping each key to its serialized value. The
//! whole document is cached in memory and rewritten on every batch.

use gymadmin_core::storage::KvStorage;
use gymadmin_core::HydrationPolicy;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::errors::{corrupt_file, io_error, Result};
use crate::kv::atomic::atomic_write;

#[derive(Debug)]
pub struct JsonFileKv {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    discarded: Option<String>,
}

impl JsonFileKv {
    /// Open `path`, refusing a document that does not parse
    ///
    /// A missing file is an empty store and is not created yet.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_policy(path, HydrationPolicy::Strict)
    }

    /// Open `path`, handling an unparseable document according to `policy`
    ///
    /// Under `FallbackToSeed` the document is treated as empty, so every
    /// collection seeds and the next batch overwrites the file.
    pub fn open_with_policy(path: &Path, policy: HydrationPolicy) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(io_error("read_json_file", e)),
        };

        let mut discarded = None;
        let entries = if content.trim().is_empty() {
            BTreeMap::new()
        } else {
            match serde_json::from_str(&content) {
                Ok(entries) => entries,
                Err(e) if policy == HydrationPolicy::FallbackToSeed => {
                    tracing::warn!(
                        op = "open_json_file",
                        path = %path.display(),
                        error = %e,
                        "unreadable storage file, starting from seed data"
                    );
                    discarded = Some(e.to_string());
                    BTreeMap::new()
                }
                Err(e) => return Err(corrupt_file(path, e)),
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries,
            discarded,
        })
    }

    /// Parse error of a document dropped at open, if any
    pub fn discarded(&self) -> Option<&str> {
        self.discarded.as_deref()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_all(&mut self, batch: &[(&str, String)]) -> Result<()> {
        let mut next = self.entries.clone();
        for (key, value) in batch {
            next.insert((*key).to_string(), value.clone());
        }
        let document = serde_json::to_vec_pretty(&next).map_err(|e| {
            gymadmin_core::ExError::new(gymadmin_core::ExErrorKind::Serialization)
                .with_op("write_json_file")
                .with_message(e.to_string())
        })?;
        atomic_write(&self.path, &document)?;
        // Only adopt the new document once it is on disk
        self.entries = next;
        Ok(())
    }
}

impl KvStorage for JsonFileKv {
    fn get(&self, key: &str) -> gymadmin_core::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write_batch(&mut self, entries: &[(&str, String)]) -> gymadmin_core::Result<()> {
        Ok(self.write_all(entries)?)
    }
}
