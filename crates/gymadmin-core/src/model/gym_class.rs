use serde::{Deserialize, Serialize};

use super::{Collection, Entity, EntityId};

/// Fields of a class as entered on the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GymClassDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    /// Free text, e.g. "Lun/Mie 10:00"
    #[serde(rename = "horario")]
    pub schedule: String,
    /// Advisory only; never checked against the reservation count
    #[serde(rename = "cupo")]
    pub capacity: u32,
}

impl GymClassDraft {
    pub fn new(name: impl Into<String>, schedule: impl Into<String>, capacity: u32) -> Self {
        Self {
            name: name.into(),
            schedule: schedule.into(),
            capacity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GymClass {
    pub id: EntityId,
    #[serde(flatten)]
    pub details: GymClassDraft,
}

impl GymClass {
    /// "Name (schedule)", as shown next to a reservation
    pub fn label(&self) -> String {
        format!("{} ({})", self.details.name, self.details.schedule)
    }
}

impl Entity for GymClass {
    type Draft = GymClassDraft;
    const COLLECTION: Collection = Collection::Classes;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: GymClassDraft) -> Self {
        Self { id, details: draft }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_shape() {
        let class = GymClass::from_draft(2, GymClassDraft::new("Yoga", "Mar/Jue 18:00", 15));
        let json = serde_json::to_string(&class).unwrap();
        assert_eq!(
            json,
            r#"{"id":2,"nombre":"Yoga","horario":"Mar/Jue 18:00","cupo":15}"#
        );
    }

    #[test]
    fn test_label() {
        let class = GymClass::from_draft(4, GymClassDraft::new("Boxeo", "Vie 17:00", 10));
        assert_eq!(class.label(), "Boxeo (Vie 17:00)");
    }
}
