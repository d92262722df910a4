//! Whole-dataset checks, used when importing seed fixtures

use std::collections::HashSet;

use crate::model::{Collection, Entity, EntityId};
use crate::seed::SeedData;

/// Ids that occur more than once in `rows`, in first-seen order
pub fn find_duplicate_ids<E: Entity>(rows: &[E]) -> Vec<EntityId> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for row in rows {
        if !seen.insert(row.id()) && !duplicates.contains(&row.id()) {
            duplicates.push(row.id());
        }
    }
    duplicates
}

/// Every duplicated id across the four collections
pub fn find_all_duplicate_ids(data: &SeedData) -> Vec<(Collection, EntityId)> {
    let mut found = Vec::new();
    found.extend(tag(Collection::Members, find_duplicate_ids(&data.members)));
    found.extend(tag(Collection::Instructors, find_duplicate_ids(&data.instructors)));
    found.extend(tag(Collection::Classes, find_duplicate_ids(&data.classes)));
    found.extend(tag(Collection::Reservations, find_duplicate_ids(&data.reservations)));
    found
}

fn tag(collection: Collection, ids: Vec<EntityId>) -> impl Iterator<Item = (Collection, EntityId)> {
    ids.into_iter().map(move |id| (collection, id))
}

/// Reservations whose member or class does not exist
///
/// Returns (reservation id, field, referenced id).
pub fn find_dangling_reservations(data: &SeedData) -> Vec<(EntityId, &'static str, EntityId)> {
    let members: HashSet<EntityId> = data.members.iter().map(|m| m.id).collect();
    let classes: HashSet<EntityId> = data.classes.iter().map(|c| c.id).collect();

    let mut dangling = Vec::new();
    for reservation in &data.reservations {
        if !members.contains(&reservation.member_id()) {
            dangling.push((reservation.id, "memberId", reservation.member_id()));
        }
        if !classes.contains(&reservation.class_id()) {
            dangling.push((reservation.id, "classId", reservation.class_id()));
        }
    }
    dangling
}
