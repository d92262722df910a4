use std::collections::BTreeSet;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::table::Table;
use crate::errors::{GymError, Result};
use crate::model::{
    Collection, Entity, EntityId, GymClass, GymClassDraft, Instructor, Member, PersonDraft,
    Reservation, ReservationDraft,
};
use crate::seed::SeedData;
use crate::storage::KvStorage;
use crate::{log_op_end, log_op_error, log_op_start};

/// What to do when a persisted collection cannot be decoded at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HydrationPolicy {
    /// Replace the corrupt collection with its seed data and repair the key
    #[default]
    FallbackToSeed,
    /// Refuse to start
    Strict,
}

/// Where each collection came from during hydration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HydrationReport {
    /// Decoded from persisted values
    pub loaded: Vec<Collection>,
    /// No persisted value existed; seed data was used
    pub seeded: Vec<Collection>,
    /// The persisted value was corrupt and replaced by seed data
    pub recovered: Vec<(Collection, String)>,
}

impl HydrationReport {
    pub fn is_clean(&self) -> bool {
        self.recovered.is_empty()
    }
}

/// Owner of the four gym collections
///
/// Constructed and hydrated once via [`GymStore::open`]. Every mutation
/// marks the collections it touched as pending and then calls
/// [`GymStore::persist`], which overwrites each pending key with the full
/// serialized collection in a single storage batch.
///
/// If the write fails, the in-memory change is kept, the keys stay pending
/// and a `GymError::Persistence` is returned. The next mutation (or an
/// explicit `persist`) retries them.
#[derive(Debug)]
pub struct GymStore<S: KvStorage> {
    storage: S,
    members: Table<Member>,
    instructors: Table<Instructor>,
    classes: Table<GymClass>,
    reservations: Table<Reservation>,
    pending: BTreeSet<Collection>,
    report: HydrationReport,
}

impl<S: KvStorage> GymStore<S> {
    /// Hydrate from `storage`, seeding absent keys with today's demo data
    ///
    /// # Errors
    ///
    /// Returns `CorruptState` under `HydrationPolicy::Strict` when a value
    /// cannot be decoded, or the storage error if a read fails.
    pub fn open(storage: S, policy: HydrationPolicy) -> Result<Self> {
        Self::open_with_seed(storage, policy, SeedData::demo_today())
    }

    /// Hydrate from `storage`, using `seed` for keys that have no value
    ///
    /// Seeded and recovered keys are written back immediately. A failure of
    /// that first write is logged and left pending; the store still opens.
    ///
    /// # Errors
    ///
    /// See [`GymStore::open`].
    pub fn open_with_seed(storage: S, policy: HydrationPolicy, seed: SeedData) -> Result<Self> {
        let started = Instant::now();
        log_op_start!("hydrate", policy = ?policy);

        let mut report = HydrationReport::default();
        let hydrated = (|| -> Result<_> {
            Ok((
                hydrate_table(&storage, seed.members, policy, &mut report)?,
                hydrate_table(&storage, seed.instructors, policy, &mut report)?,
                hydrate_table(&storage, seed.classes, policy, &mut report)?,
                hydrate_table(&storage, seed.reservations, policy, &mut report)?,
            ))
        })();

        let (members, instructors, classes, reservations) = match hydrated {
            Ok(tables) => tables,
            Err(err) => {
                log_op_error!(
                    "hydrate",
                    err.clone(),
                    duration_ms = started.elapsed().as_millis() as u64
                );
                return Err(err);
            }
        };

        let pending = report
            .seeded
            .iter()
            .copied()
            .chain(report.recovered.iter().map(|(c, _)| *c))
            .collect();

        let mut store = Self {
            storage,
            members,
            instructors,
            classes,
            reservations,
            pending,
            report,
        };

        if let Err(err) = store.persist() {
            tracing::warn!(
                op = "hydrate",
                error = %err,
                "initial write-back failed; keys stay pending"
            );
        }

        log_op_end!(
            "hydrate",
            duration_ms = started.elapsed().as_millis() as u64,
            loaded = store.report.loaded.len(),
            seeded = store.report.seeded.len(),
            recovered = store.report.recovered.len()
        );
        Ok(store)
    }

    pub fn hydration_report(&self) -> &HydrationReport {
        &self.report
    }

    /// Collections changed in memory but not yet written
    pub fn pending(&self) -> impl Iterator<Item = Collection> + '_ {
        self.pending.iter().copied()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    // ===== Reads =====

    pub fn members(&self) -> &[Member] {
        self.members.rows()
    }

    pub fn instructors(&self) -> &[Instructor] {
        self.instructors.rows()
    }

    pub fn classes(&self) -> &[GymClass] {
        self.classes.rows()
    }

    pub fn reservations(&self) -> &[Reservation] {
        self.reservations.rows()
    }

    pub fn member(&self, id: EntityId) -> Option<&Member> {
        self.members.get(id)
    }

    pub fn instructor(&self, id: EntityId) -> Option<&Instructor> {
        self.instructors.get(id)
    }

    pub fn class(&self, id: EntityId) -> Option<&GymClass> {
        self.classes.get(id)
    }

    pub fn reservation(&self, id: EntityId) -> Option<&Reservation> {
        self.reservations.get(id)
    }

    /// Copy of every collection
    pub fn snapshot(&self) -> SeedData {
        SeedData {
            members: self.members.rows().to_vec(),
            instructors: self.instructors.rows().to_vec(),
            classes: self.classes.rows().to_vec(),
            reservations: self.reservations.rows().to_vec(),
        }
    }

    // ===== Members =====

    /// # Errors
    ///
    /// `Persistence` if the write-back fails; the member is still added.
    /// `IdSpaceExhausted` if the highest id is already `EntityId::MAX`; nothing changes.
    pub fn add_member(&mut self, draft: PersonDraft) -> Result<EntityId> {
        let started = Instant::now();
        log_op_start!("add_member");
        let Some(id) = self.members.insert(draft) else {
            return Err(id_space_exhausted("add_member", started, Collection::Members));
        };
        self.commit("add_member", started, &[Collection::Members], Some(id), 0)?;
        Ok(id)
    }

    /// Replace the member with `member.id`. Returns false (and changes
    /// nothing) when no such member exists.
    ///
    /// # Errors
    ///
    /// `Persistence` if the write-back fails.
    pub fn update_member(&mut self, member: Member) -> Result<bool> {
        let started = Instant::now();
        let id = member.id;
        log_op_start!("update_member", entity_id = id);
        let replaced = self.members.replace(member);
        let touched: &[Collection] = if replaced { &[Collection::Members] } else { &[] };
        self.commit("update_member", started, touched, Some(id), 0)?;
        Ok(replaced)
    }

    /// Delete a member and every reservation referencing it
    ///
    /// Both collections are written in one batch. Reservations pointing at
    /// `id` are removed even if no member with that id exists.
    ///
    /// # Errors
    ///
    /// `Persistence` if the write-back fails.
    pub fn delete_member(&mut self, id: EntityId) -> Result<bool> {
        let started = Instant::now();
        log_op_start!("delete_member", entity_id = id);
        let removed = self.members.remove(id);
        let cascaded = self.reservations.retain(|r| r.member_id() != id);
        let touched = touched_by_delete(Collection::Members, removed, cascaded);
        self.commit("delete_member", started, &touched, Some(id), cascaded)?;
        Ok(removed)
    }

    // ===== Instructors =====

    /// # Errors
    ///
    /// `Persistence` if the write-back fails; the instructor is still added.
    /// `IdSpaceExhausted` if the highest id is already `EntityId::MAX`; nothing changes.
    pub fn add_instructor(&mut self, draft: PersonDraft) -> Result<EntityId> {
        let started = Instant::now();
        log_op_start!("add_instructor");
        let Some(id) = self.instructors.insert(draft) else {
            return Err(id_space_exhausted("add_instructor", started, Collection::Instructors));
        };
        self.commit("add_instructor", started, &[Collection::Instructors], Some(id), 0)?;
        Ok(id)
    }

    /// # Errors
    ///
    /// `Persistence` if the write-back fails.
    pub fn update_instructor(&mut self, instructor: Instructor) -> Result<bool> {
        let started = Instant::now();
        let id = instructor.id;
        log_op_start!("update_instructor", entity_id = id);
        let replaced = self.instructors.replace(instructor);
        let touched: &[Collection] = if replaced {
            &[Collection::Instructors]
        } else {
            &[]
        };
        self.commit("update_instructor", started, touched, Some(id), 0)?;
        Ok(replaced)
    }

    /// Instructors are not referenced by anything, so nothing cascades
    ///
    /// # Errors
    ///
    /// `Persistence` if the write-back fails.
    pub fn delete_instructor(&mut self, id: EntityId) -> Result<bool> {
        let started = Instant::now();
        log_op_start!("delete_instructor", entity_id = id);
        let removed = self.instructors.remove(id);
        let touched = touched_by_delete(Collection::Instructors, removed, 0);
        self.commit("delete_instructor", started, &touched, Some(id), 0)?;
        Ok(removed)
    }

    // ===== Classes =====

    /// # Errors
    ///
    /// `Persistence` if the write-back fails; the class is still added.
    /// `IdSpaceExhausted` if the highest id is already `EntityId::MAX`; nothing changes.
    pub fn add_class(&mut self, draft: GymClassDraft) -> Result<EntityId> {
        let started = Instant::now();
        log_op_start!("add_class");
        let Some(id) = self.classes.insert(draft) else {
            return Err(id_space_exhausted("add_class", started, Collection::Classes));
        };
        self.commit("add_class", started, &[Collection::Classes], Some(id), 0)?;
        Ok(id)
    }

    /// # Errors
    ///
    /// `Persistence` if the write-back fails.
    pub fn update_class(&mut self, class: GymClass) -> Result<bool> {
        let started = Instant::now();
        let id = class.id;
        log_op_start!("update_class", entity_id = id);
        let replaced = self.classes.replace(class);
        let touched: &[Collection] = if replaced { &[Collection::Classes] } else { &[] };
        self.commit("update_class", started, touched, Some(id), 0)?;
        Ok(replaced)
    }

    /// Delete a class and every reservation for it, in one batch
    ///
    /// # Errors
    ///
    /// `Persistence` if the write-back fails.
    pub fn delete_class(&mut self, id: EntityId) -> Result<bool> {
        let started = Instant::now();
        log_op_start!("delete_class", entity_id = id);
        let removed = self.classes.remove(id);
        let cascaded = self.reservations.retain(|r| r.class_id() != id);
        let touched = touched_by_delete(Collection::Classes, removed, cascaded);
        self.commit("delete_class", started, &touched, Some(id), cascaded)?;
        Ok(removed)
    }

    // ===== Reservations =====

    /// The referenced member and class are not checked here
    ///
    /// # Errors
    ///
    /// `Persistence` if the write-back fails; the reservation is still added.
    /// `IdSpaceExhausted` if the highest id is already `EntityId::MAX`; nothing changes.
    pub fn add_reservation(&mut self, draft: ReservationDraft) -> Result<EntityId> {
        let started = Instant::now();
        log_op_start!("add_reservation");
        let Some(id) = self.reservations.insert(draft) else {
            return Err(id_space_exhausted("add_reservation", started, Collection::Reservations));
        };
        self.commit("add_reservation", started, &[Collection::Reservations], Some(id), 0)?;
        Ok(id)
    }

    /// # Errors
    ///
    /// `Persistence` if the write-back fails.
    pub fn delete_reservation(&mut self, id: EntityId) -> Result<bool> {
        let started = Instant::now();
        log_op_start!("delete_reservation", entity_id = id);
        let removed = self.reservations.remove(id);
        let touched = touched_by_delete(Collection::Reservations, removed, 0);
        self.commit("delete_reservation", started, &touched, Some(id), 0)?;
        Ok(removed)
    }

    // ===== Bulk =====

    /// Replace all four collections, e.g. with an imported seed
    ///
    /// # Errors
    ///
    /// `Persistence` if the write-back fails.
    pub fn replace_all(&mut self, data: SeedData) -> Result<()> {
        let started = Instant::now();
        log_op_start!("replace_all", records = data.total_records());
        self.members = Table::new(data.members);
        self.instructors = Table::new(data.instructors);
        self.classes = Table::new(data.classes);
        self.reservations = Table::new(data.reservations);
        self.commit("replace_all", started, &Collection::ALL, None, 0)
    }

    // ===== Persistence =====

    /// Write every pending collection in one batch
    ///
    /// # Errors
    ///
    /// `Persistence` listing the keys that remain pending.
    pub fn persist(&mut self) -> Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let mut entries = Vec::with_capacity(self.pending.len());
        for collection in &self.pending {
            entries.push((collection.key(), self.serialize(*collection)?));
        }

        match self.storage.write_batch(&entries) {
            Ok(()) => {
                tracing::debug!(
                    op = "persist",
                    keys = ?entries.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
                    "collections written"
                );
                self.pending.clear();
                Ok(())
            }
            Err(err) => {
                let keys: Vec<String> = self.pending.iter().map(|c| c.key().to_string()).collect();
                tracing::warn!(
                    op = "persist",
                    keys = ?keys,
                    error = %err,
                    "persistence failed; in-memory state kept and keys left pending"
                );
                Err(GymError::Persistence {
                    keys,
                    message: err.to_string(),
                })
            }
        }
    }

    fn serialize(&self, collection: Collection) -> Result<String> {
        let json = match collection {
            Collection::Members => self.members.to_json(),
            Collection::Instructors => self.instructors.to_json(),
            Collection::Classes => self.classes.to_json(),
            Collection::Reservations => self.reservations.to_json(),
        }?;
        Ok(json)
    }

    fn commit(
        &mut self,
        op: &'static str,
        started: Instant,
        touched: &[Collection],
        entity_id: Option<EntityId>,
        cascaded: usize,
    ) -> Result<()> {
        self.pending.extend(touched.iter().copied());
        match self.persist() {
            Ok(()) => {
                log_op_end!(
                    op,
                    duration_ms = started.elapsed().as_millis() as u64,
                    entity_id = entity_id,
                    cascaded = cascaded,
                    changed = !touched.is_empty()
                );
                Ok(())
            }
            Err(err) => {
                log_op_error!(
                    op,
                    err.clone(),
                    duration_ms = started.elapsed().as_millis() as u64,
                    entity_id = entity_id
                );
                Err(err)
            }
        }
    }
}

fn id_space_exhausted(op: &'static str, started: Instant, collection: Collection) -> GymError {
    let err = GymError::IdSpaceExhausted {
        key: collection.key().to_string(),
    };
    log_op_error!(op, err.clone(), duration_ms = started.elapsed().as_millis() as u64);
    err
}

fn touched_by_delete(primary: Collection, removed: bool, cascaded: usize) -> Vec<Collection> {
    let mut touched = Vec::with_capacity(2);
    if removed {
        touched.push(primary);
    }
    if cascaded > 0 {
        touched.push(Collection::Reservations);
    }
    touched
}

fn hydrate_table<E: Entity, S: KvStorage>(
    storage: &S,
    seed: Vec<E>,
    policy: HydrationPolicy,
    report: &mut HydrationReport,
) -> Result<Table<E>> {
    let collection = E::COLLECTION;
    let Some(raw) = storage.get(collection.key())? else {
        tracing::debug!(op = "hydrate", collection = %collection, "no persisted value, seeding");
        report.seeded.push(collection);
        return Ok(Table::new(seed));
    };

    match Table::<E>::from_json(&raw) {
        Ok(table) => {
            tracing::debug!(
                op = "hydrate",
                collection = %collection,
                collection_len = table.len(),
                "collection loaded"
            );
            report.loaded.push(collection);
            Ok(table)
        }
        Err(err) => match policy {
            HydrationPolicy::Strict => Err(GymError::CorruptState {
                key: collection.key().to_string(),
                message: err.to_string(),
            }),
            HydrationPolicy::FallbackToSeed => {
                tracing::warn!(
                    op = "hydrate",
                    collection = %collection,
                    error = %err,
                    "corrupt persisted collection replaced by seed data"
                );
                report.recovered.push((collection, err.to_string()));
                Ok(Table::new(seed))
            }
        },
    }
}
