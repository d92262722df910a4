use crate::model::{Entity, EntityId};

/// One ordered collection of records
///
/// Rows keep insertion order. Lookups are linear scans; collections are
/// small enough that no index is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<E> {
    rows: Vec<E>,
}

impl<E> Default for Table<E> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<E: Entity> Table<E> {
    pub fn new(rows: Vec<E>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[E] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&E> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Id the next insert will receive: `max(existing ids) + 1`, or 1 when empty
    ///
    /// Not a counter. Deleting the highest id frees it for reuse. `None` once
    /// the maximum id is `EntityId::MAX`.
    pub fn next_id(&self) -> Option<EntityId> {
        match self.rows.iter().map(Entity::id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// Append a record built from `draft` and return its id
    ///
    /// Returns `None` and leaves the table untouched when no id is left.
    pub fn insert(&mut self, draft: E::Draft) -> Option<EntityId> {
        let id = self.next_id()?;
        self.rows.push(E::from_draft(id, draft));
        Some(id)
    }

    /// Replace the row with the same id in place. Returns false when no row matched.
    pub fn replace(&mut self, record: E) -> bool {
        match self.rows.iter_mut().find(|row| row.id() == record.id()) {
            Some(row) => {
                *row = record;
                true
            }
            None => false,
        }
    }

    /// Remove every row with `id`. Returns false when nothing was removed.
    pub fn remove(&mut self, id: EntityId) -> bool {
        self.retain(|row| row.id() != id) > 0
    }

    /// Keep only rows matching `keep`; returns how many were dropped
    pub fn retain<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&E) -> bool,
    {
        let before = self.rows.len();
        self.rows.retain(keep);
        before - self.rows.len()
    }

    /// Serialize the whole collection as it is persisted
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.rows)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json).map(Self::new)
    }

    pub fn into_rows(self) -> Vec<E> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GymClass, GymClassDraft, Member, PersonDraft};

    fn person(name: &str) -> PersonDraft {
        PersonDraft::new(name, "Test", "1", "2", "x@y")
    }

    #[test]
    fn test_first_insert_gets_id_one() {
        let mut table: Table<Member> = Table::default();
        assert_eq!(table.insert(person("A")), Some(1));
        assert_eq!(table.rows()[0].id, 1);
    }

    #[test]
    fn test_next_id_is_max_plus_one_not_len() {
        let mut table: Table<Member> = Table::default();
        table.insert(person("A"));
        table.insert(person("B"));
        table.insert(person("C"));
        table.remove(1);

        assert_eq!(table.len(), 2);
        assert_eq!(table.next_id(), Some(4));
    }

    #[test]
    fn test_max_id_is_reused_after_delete() {
        let mut table: Table<Member> = Table::default();
        table.insert(person("A"));
        table.insert(person("B"));
        table.remove(2);

        assert_eq!(table.insert(person("C")), Some(2));
    }

    #[test]
    fn test_insert_refuses_when_max_id_is_taken() {
        let top = Member::from_draft(EntityId::MAX, person("Top"));
        let mut table = Table::new(vec![top]);
        let before = table.clone();

        assert_eq!(table.next_id(), None);
        assert_eq!(table.insert(person("Overflow")), None);
        assert_eq!(table, before);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut table: Table<GymClass> = Table::default();
        table.insert(GymClassDraft::new("Crossfit", "Lun 08:00", 20));
        table.insert(GymClassDraft::new("Yoga", "Mar 18:00", 15));
        table.insert(GymClassDraft::new("Boxeo", "Vie 17:00", 10));

        let updated = GymClass::from_draft(2, GymClassDraft::new("Pilates", "Mar 19:00", 12));
        assert!(table.replace(updated.clone()));

        assert_eq!(table.rows()[1], updated);
        assert_eq!(table.rows()[0].details.name, "Crossfit");
        assert_eq!(table.rows()[2].details.name, "Boxeo");
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let mut table: Table<GymClass> = Table::default();
        table.insert(GymClassDraft::new("Yoga", "Mar 18:00", 15));
        let before = table.clone();

        let ghost = GymClass::from_draft(9, GymClassDraft::new("Ghost", "-", 1));
        assert!(!table.replace(ghost));
        assert_eq!(table, before);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut table: Table<Member> = Table::default();
        table.insert(person("A"));
        table.insert(person("B"));

        assert!(table.remove(1));
        let after_first = table.clone();
        assert!(!table.remove(1));
        assert_eq!(table, after_first);
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let mut table: Table<Member> = Table::default();
        table.insert(person("Zoe"));
        table.insert(person("Adam"));

        let json = table.to_json().unwrap();
        let restored = Table::<Member>::from_json(&json).unwrap();
        assert_eq!(restored, table);
    }
}
