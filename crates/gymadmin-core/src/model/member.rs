use serde::{Deserialize, Serialize};

use super::{Collection, Entity, EntityId};

/// Contact details shared by members and instructors
///
/// Also the draft passed to `add_member` / `add_instructor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDraft {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    /// National identity document number, free text
    #[serde(rename = "dni")]
    pub national_id: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "correo")]
    pub email: String,
}

impl PersonDraft {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        national_id: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            national_id: national_id.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Case-insensitive substring match on first or last name
    pub fn matches_name(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.first_name.to_lowercase().contains(&needle)
            || self.last_name.to_lowercase().contains(&needle)
    }

    /// `matches_name`, or a substring match on national id
    pub fn matches_name_or_id(&self, term: &str) -> bool {
        self.matches_name(term) || self.national_id.contains(term)
    }
}

/// A gym member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: EntityId,
    #[serde(flatten)]
    pub details: PersonDraft,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.details.first_name, self.details.last_name)
    }
}

impl Entity for Member {
    type Draft = PersonDraft;
    const COLLECTION: Collection = Collection::Members;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: PersonDraft) -> Self {
        Self { id, details: draft }
    }
}
