//! Default demo data used when nothing has been persisted yet

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{
    Entity, GymClass, GymClassDraft, Instructor, Member, PersonDraft, Reservation,
    ReservationDraft,
};

/// A full set of the four collections
///
/// Used for the first-run demo data, seed fixture imports and `reset`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub instructors: Vec<Instructor>,
    #[serde(default)]
    pub classes: Vec<GymClass>,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

impl SeedData {
    /// Demo data with both reservations dated `today`
    pub fn demo(today: NaiveDate) -> Self {
        Self {
            members: vec![
                member(1, "Juan", "Perez", "12345678", "555-0101", "juan@example.com"),
                member(2, "Maria", "Gomez", "87654321", "555-0202", "maria@example.com"),
                member(3, "Carlos", "Lopez", "11223344", "555-0303", "carlos@example.com"),
                member(4, "Ana", "Martinez", "44332211", "555-0404", "ana@example.com"),
                member(5, "Luis", "Rodriguez", "99887766", "555-0505", "luis@example.com"),
            ],
            instructors: vec![
                instructor(1, "Pedro", "Sarmiento", "90909090", "555-1010", "pedro@gym.com"),
                instructor(2, "Lucia", "Fernandez", "80808080", "555-2020", "lucia@gym.com"),
            ],
            classes: vec![
                GymClass::from_draft(1, GymClassDraft::new("Crossfit", "Lun/Mie/Vie 08:00", 20)),
                GymClass::from_draft(2, GymClassDraft::new("Yoga", "Mar/Jue 18:00", 15)),
                GymClass::from_draft(3, GymClassDraft::new("Spinning", "Lun/Mie 19:00", 25)),
                GymClass::from_draft(4, GymClassDraft::new("Boxeo", "Vie 17:00", 10)),
            ],
            reservations: vec![
                Reservation::from_draft(1, ReservationDraft::new(1, 1, today)),
                Reservation::from_draft(2, ReservationDraft::new(2, 2, today)),
            ],
        }
    }

    /// Demo data dated with the current UTC day
    pub fn demo_today() -> Self {
        Self::demo(Utc::now().date_naive())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn total_records(&self) -> usize {
        self.members.len() + self.instructors.len() + self.classes.len() + self.reservations.len()
    }
}

fn member(id: u32, first: &str, last: &str, dni: &str, phone: &str, email: &str) -> Member {
    Member::from_draft(id, PersonDraft::new(first, last, dni, phone, email))
}

fn instructor(id: u32, first: &str, last: &str, dni: &str, phone: &str, email: &str) -> Instructor {
    Instructor::from_draft(id, PersonDraft::new(first, last, dni, phone, email))
}
