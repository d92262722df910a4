use serde::{Deserialize, Serialize};

use super::{Collection, Entity, EntityId, PersonDraft};

/// An instructor. Same shape as a member, separate collection; nothing
/// references instructors, so deleting one never cascades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: EntityId,
    #[serde(flatten)]
    pub details: PersonDraft,
}

impl Instructor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.details.first_name, self.details.last_name)
    }
}

impl Entity for Instructor {
    type Draft = PersonDraft;
    const COLLECTION: Collection = Collection::Instructors;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: PersonDraft) -> Self {
        Self { id, details: draft }
    }
}
