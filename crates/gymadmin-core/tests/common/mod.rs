use chrono::NaiveDate;
use gymadmin_core::errors::{ExError, ExErrorKind, Result};
use gymadmin_core::storage::{KvStorage, MemoryStorage};
use gymadmin_core::{GymStore, HydrationPolicy, SeedData};

/// Fixed "today" so seeded reservation dates are deterministic
#[allow(dead_code)]
pub fn seed_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

/// A store over fresh in-memory storage holding the demo data
#[allow(dead_code)]
pub fn demo_store() -> GymStore<MemoryStorage> {
    GymStore::open_with_seed(
        MemoryStorage::new(),
        HydrationPolicy::default(),
        SeedData::demo(seed_day()),
    )
    .unwrap()
}

/// A store over fresh in-memory storage with every collection empty
#[allow(dead_code)]
pub fn empty_store() -> GymStore<MemoryStorage> {
    GymStore::open_with_seed(
        MemoryStorage::new(),
        HydrationPolicy::default(),
        SeedData::empty(),
    )
    .unwrap()
}

/// Storage whose writes can be switched off to simulate a full disk
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct FlakyStorage {
    pub inner: MemoryStorage,
    pub failing: bool,
    pub rejected_batches: usize,
}

#[allow(dead_code)]
impl FlakyStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }
}

impl KvStorage for FlakyStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key)
    }

    fn write_batch(&mut self, entries: &[(&str, String)]) -> Result<()> {
        if self.failing {
            self.rejected_batches += 1;
            return Err(ExError::new(ExErrorKind::Io)
                .with_op("write_batch")
                .with_message("quota exceeded")
                .into());
        }
        self.inner.write_batch(entries)
    }
}
