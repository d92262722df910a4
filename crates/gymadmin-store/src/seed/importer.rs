//! Seed importer orchestration

use gymadmin_core::storage::KvStorage;
use gymadmin_core::{apply, Command, ExError, GymStore, SeedData};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

use crate::errors::Result;
use crate::seed::{compute_seed_digest, parse_seed_file};
use gymadmin_core::{log_op_end, log_op_error, log_op_start};

/// What an import replaced the store contents with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub digest: String,
    pub members: usize,
    pub instructors: usize,
    pub classes: usize,
    pub reservations: usize,
}

/// Import a seed file, replacing every collection of `store`
///
/// 1. Parses and validates the fixture
/// 2. Computes its digest
/// 3. Replaces all four collections in one persisted batch
///
/// Nothing in the store changes if parsing or validation fails.
pub fn import_seed<S: KvStorage>(path: &Path, store: &mut GymStore<S>) -> Result<ImportSummary> {
    let seed = parse_seed_file(path)?;
    import_seed_data(seed, store)
}

/// Import already-parsed seed data
pub fn import_seed_data<S: KvStorage>(
    seed: SeedData,
    store: &mut GymStore<S>,
) -> Result<ImportSummary> {
    let started = Instant::now();
    let digest = compute_seed_digest(&seed);
    log_op_start!("seed_import", seed_digest = %digest);

    let summary = ImportSummary {
        digest,
        members: seed.members.len(),
        instructors: seed.instructors.len(),
        classes: seed.classes.len(),
        reservations: seed.reservations.len(),
    };

    if let Err(err) = apply(store, Command::ReplaceAll(seed)) {
        let err = ExError::from(err);
        log_op_error!(
            "seed_import",
            err.clone(),
            duration_ms = started.elapsed().as_millis() as u64
        );
        return Err(err);
    }

    log_op_end!(
        "seed_import",
        duration_ms = started.elapsed().as_millis() as u64,
        seed_digest = %summary.digest
    );
    Ok(summary)
}
