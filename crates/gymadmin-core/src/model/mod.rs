//! Entity records held by the store
//!
//! Every record serializes with the field names of the persisted format
//! (`nombre`, `apellido`, `memberId`, ...) so previously written data keeps
//! loading.

pub mod admin;
pub mod gym_class;
pub mod instructor;
pub mod member;
pub mod reservation;

use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::str::FromStr;

pub use admin::Admin;
pub use gym_class::{GymClass, GymClassDraft};
pub use instructor::Instructor;
pub use member::{Member, PersonDraft};
pub use reservation::{Reservation, ReservationDraft};

/// Store-assigned identifier, unique within one collection only
pub type EntityId = u32;

/// The four persisted collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Collection {
    Members,
    Instructors,
    Classes,
    Reservations,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Members,
        Collection::Instructors,
        Collection::Classes,
        Collection::Reservations,
    ];

    /// Key under which the collection is persisted
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Members => "gym_members",
            Collection::Instructors => "gym_instructors",
            Collection::Classes => "gym_classes",
            Collection::Reservations => "gym_reservations",
        }
    }

    /// Short name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Members => "members",
            Collection::Instructors => "instructors",
            Collection::Classes => "classes",
            Collection::Reservations => "reservations",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.name() == s || c.key() == s)
            .ok_or_else(|| format!("unknown collection: {}", s))
    }
}

/// A record kind the store can hold
pub trait Entity: Serialize + DeserializeOwned + Clone + PartialEq + fmt::Debug {
    /// The record without its id, as supplied to `add`
    type Draft;

    const COLLECTION: Collection;

    fn id(&self) -> EntityId;

    /// Build the stored record once the store has assigned an id
    fn from_draft(id: EntityId, draft: Self::Draft) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_keys() {
        let keys: Vec<&str> = Collection::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(
            keys,
            vec![
                "gym_members",
                "gym_instructors",
                "gym_classes",
                "gym_reservations"
            ]
        );
    }

    #[test]
    fn test_collection_from_str_accepts_name_and_key() {
        assert_eq!("members".parse::<Collection>(), Ok(Collection::Members));
        assert_eq!(
            "gym_classes".parse::<Collection>(),
            Ok(Collection::Classes)
        );
        assert!("trainers".parse::<Collection>().is_err());
    }
}
