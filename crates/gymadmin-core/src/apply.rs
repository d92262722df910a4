//! Single entry point for store mutations
//!
//! ## Example
//!
//! ```
//! use gymadmin_core::{apply, Command, CommandOutcome, GymStore, HydrationPolicy};
//! use gymadmin_core::model::PersonDraft;
//! use gymadmin_core::seed::SeedData;
//! use gymadmin_core::storage::MemoryStorage;
//!
//! let mut store = GymStore::open_with_seed(
//!     MemoryStorage::new(),
//!     HydrationPolicy::default(),
//!     SeedData::empty(),
//! )
//! .unwrap();
//!
//! let draft = PersonDraft::new("Ana", "Diaz", "30111222", "555-0000", "ana@example.com");
//! let outcome = apply(&mut store, Command::MemberAdd(draft)).unwrap();
//! assert_eq!(outcome, CommandOutcome::Created(1));
//! ```

use crate::commands::{Command, CommandOutcome};
use crate::errors::Result;
use crate::ops::GymStore;
use crate::storage::KvStorage;

/// Dispatch `cmd` onto the store
///
/// The store does not validate; callers run `rules::validation` first.
///
/// # Errors
///
/// Only `GymError::Persistence` (or a storage error) from the write-back.
/// The in-memory change has already been applied when that happens.
pub fn apply<S: KvStorage>(store: &mut GymStore<S>, cmd: Command) -> Result<CommandOutcome> {
    match cmd {
        Command::MemberAdd(draft) => store.add_member(draft).map(CommandOutcome::Created),
        Command::MemberUpdate(member) => store.update_member(member).map(CommandOutcome::Updated),
        Command::MemberDelete { id } => store.delete_member(id).map(CommandOutcome::Deleted),

        Command::InstructorAdd(draft) => store.add_instructor(draft).map(CommandOutcome::Created),
        Command::InstructorUpdate(instructor) => store
            .update_instructor(instructor)
            .map(CommandOutcome::Updated),
        Command::InstructorDelete { id } => {
            store.delete_instructor(id).map(CommandOutcome::Deleted)
        }

        Command::ClassAdd(draft) => store.add_class(draft).map(CommandOutcome::Created),
        Command::ClassUpdate(class) => store.update_class(class).map(CommandOutcome::Updated),
        Command::ClassDelete { id } => store.delete_class(id).map(CommandOutcome::Deleted),

        Command::ReservationAdd(draft) => store.add_reservation(draft).map(CommandOutcome::Created),
        Command::ReservationDelete { id } => {
            store.delete_reservation(id).map(CommandOutcome::Deleted)
        }

        Command::ReplaceAll(data) => store.replace_all(data).map(|()| CommandOutcome::Replaced),
    }
}
