//! Command inventory for every store mutation
//!
//! The CLI builds a `Command` from parsed arguments and hands it to
//! [`crate::apply::apply`].

use crate::model::{EntityId, GymClass, GymClassDraft, Instructor, Member, PersonDraft, ReservationDraft};
use crate::seed::SeedData;

/// Every mutation the store supports
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    MemberAdd(PersonDraft),
    MemberUpdate(Member),
    /// Cascades to the member's reservations
    MemberDelete { id: EntityId },

    InstructorAdd(PersonDraft),
    InstructorUpdate(Instructor),
    InstructorDelete { id: EntityId },

    ClassAdd(GymClassDraft),
    ClassUpdate(GymClass),
    /// Cascades to the class's reservations
    ClassDelete { id: EntityId },

    ReservationAdd(ReservationDraft),
    ReservationDelete { id: EntityId },

    /// Replace all four collections at once
    ReplaceAll(SeedData),
}

impl Command {
    /// Operation name used in log events
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::MemberAdd(_) => "add_member",
            Command::MemberUpdate(_) => "update_member",
            Command::MemberDelete { .. } => "delete_member",
            Command::InstructorAdd(_) => "add_instructor",
            Command::InstructorUpdate(_) => "update_instructor",
            Command::InstructorDelete { .. } => "delete_instructor",
            Command::ClassAdd(_) => "add_class",
            Command::ClassUpdate(_) => "update_class",
            Command::ClassDelete { .. } => "delete_class",
            Command::ReservationAdd(_) => "add_reservation",
            Command::ReservationDelete { .. } => "delete_reservation",
            Command::ReplaceAll(_) => "replace_all",
        }
    }
}

/// What a successfully applied command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Created(EntityId),
    /// False when no record had the given id
    Updated(bool),
    /// False when no record had the given id
    Deleted(bool),
    Replaced,
}

impl CommandOutcome {
    /// Whether the command changed anything
    pub fn changed(&self) -> bool {
        match self {
            CommandOutcome::Created(_) | CommandOutcome::Replaced => true,
            CommandOutcome::Updated(hit) | CommandOutcome::Deleted(hit) => *hit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_names_match_store_operations() {
        assert_eq!(Command::MemberDelete { id: 1 }.op_name(), "delete_member");
        assert_eq!(
            Command::ReplaceAll(SeedData::empty()).op_name(),
            "replace_all"
        );
    }

    #[test]
    fn test_outcome_changed() {
        assert!(CommandOutcome::Created(3).changed());
        assert!(!CommandOutcome::Updated(false).changed());
        assert!(CommandOutcome::Deleted(true).changed());
    }
}
