use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Collection, Entity, EntityId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDraft {
    #[serde(rename = "memberId")]
    pub member_id: EntityId,
    #[serde(rename = "classId")]
    pub class_id: EntityId,
    /// Calendar date, persisted as `YYYY-MM-DD`
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
}

impl ReservationDraft {
    pub fn new(member_id: EntityId, class_id: EntityId, date: NaiveDate) -> Self {
        Self {
            member_id,
            class_id,
            date,
        }
    }
}

/// A member booked into a class on a date
///
/// The foreign keys are advisory. Nothing prevents the same member booking
/// the same class on the same date twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: EntityId,
    #[serde(flatten)]
    pub details: ReservationDraft,
}

impl Reservation {
    pub fn member_id(&self) -> EntityId {
        self.details.member_id
    }

    pub fn class_id(&self) -> EntityId {
        self.details.class_id
    }
}

impl Entity for Reservation {
    type Draft = ReservationDraft;
    const COLLECTION: Collection = Collection::Reservations;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: ReservationDraft) -> Self {
        Self { id, details: draft }
    }
}
