//! Seed digest canonicalization
//!
//! Computes stable SHA256 digests of seeds for reproducibility

use gymadmin_core::model::Entity;
use gymadmin_core::SeedData;
use sha2::{Digest, Sha256};

/// Compute a stable digest for a seed
///
/// Every collection is sorted by id and serialized as compact JSON before
/// hashing, so YAML formatting and record order do not affect the digest.
pub fn compute_seed_digest(seed: &SeedData) -> String {
    let canonical = canonicalize_seed(seed);

    let mut hasher = Sha256::new();
    // SeedData only holds strings, integers and dates, which always serialize
    if let Ok(json) = serde_json::to_vec(&canonical) {
        hasher.update(&json);
    }
    hex::encode(hasher.finalize())
}

fn canonicalize_seed(seed: &SeedData) -> SeedData {
    let mut canonical = seed.clone();
    sort_by_id(&mut canonical.members);
    sort_by_id(&mut canonical.instructors);
    sort_by_id(&mut canonical.classes);
    sort_by_id(&mut canonical.reservations);
    canonical
}

fn sort_by_id<E: Entity>(rows: &mut [E]) {
    rows.sort_by_key(|row| row.id());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::parser::parse_seed_str;

    const CLASSES_AB: &str = r#"
classes:
  - id: 1
    nombre: Yoga
    horario: "Mar 18:00"
    cupo: 15
  - id: 2
    nombre: Boxeo
    horario: "Vie 17:00"
    cupo: 10
"#;

    #[test]
    fn test_seed_digest_stable() {
        let digest1 = compute_seed_digest(&parse_seed_str(CLASSES_AB).unwrap());
        let digest2 = compute_seed_digest(&parse_seed_str(CLASSES_AB).unwrap());
        assert_eq!(digest1, digest2);
        assert_eq!(digest1.len(), 64);
    }

    #[test]
    fn test_seed_digest_independent_of_order_and_layout() {
        let reordered = r#"
classes:
  - { id: 2, nombre: Boxeo, horario: "Vie 17:00", cupo: 10 }
  - { id: 1, nombre: Yoga, horario: "Mar 18:00", cupo: 15 }
"#;
        assert_eq!(
            compute_seed_digest(&parse_seed_str(CLASSES_AB).unwrap()),
            compute_seed_digest(&parse_seed_str(reordered).unwrap())
        );
    }

    #[test]
    fn test_seed_digest_changes_with_content() {
        let changed = CLASSES_AB.replace("cupo: 10", "cupo: 12");
        assert_ne!(
            compute_seed_digest(&parse_seed_str(CLASSES_AB).unwrap()),
            compute_seed_digest(&parse_seed_str(&changed).unwrap())
        );
    }
}
