use chrono::NaiveDate;

use crate::errors::{GymError, Result};
use crate::model::{EntityId, GymClassDraft, PersonDraft, ReservationDraft};
use crate::ops::GymStore;
use crate::storage::KvStorage;

/// Wire format of reservation dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GymError::validation(field, "is required"));
    }
    Ok(())
}

/// Every contact field is required and the email must look like one
///
/// # Errors
///
/// `Validation` naming the first offending field by its persisted name.
pub fn validate_person(draft: &PersonDraft) -> Result<()> {
    require("nombre", &draft.first_name)?;
    require("apellido", &draft.last_name)?;
    require("dni", &draft.national_id)?;
    require("telefono", &draft.phone)?;
    require("correo", &draft.email)?;
    validate_email(&draft.email)
}

fn validate_email(email: &str) -> Result<()> {
    let Some((local, domain)) = email.trim().split_once('@') else {
        return Err(GymError::validation("correo", "must contain '@'"));
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(GymError::validation("correo", "is not a valid address"));
    }
    Ok(())
}

/// # Errors
///
/// `Validation` for an empty name or schedule, or a zero capacity.
pub fn validate_class(draft: &GymClassDraft) -> Result<()> {
    require("nombre", &draft.name)?;
    require("horario", &draft.schedule)?;
    if draft.capacity == 0 {
        return Err(GymError::validation("cupo", "must be a positive integer"));
    }
    Ok(())
}

/// Parse a capacity typed by the operator
///
/// # Errors
///
/// `Validation` unless the input is an integer of at least 1.
pub fn parse_capacity(raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(0) | Err(_) => Err(GymError::validation("cupo", "must be a positive integer")),
        Ok(n) => Ok(n),
    }
}

/// Parse a `YYYY-MM-DD` calendar date
///
/// # Errors
///
/// `Validation` on any other shape or an impossible date.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| GymError::validation("fecha", format!("expected YYYY-MM-DD, got '{}'", raw)))
}

/// Both ends of a new reservation must exist
///
/// The store itself accepts dangling references; only the form refuses them.
///
/// # Errors
///
/// `Validation` on `memberId` or `classId`.
pub fn validate_reservation_refs<S: KvStorage>(
    store: &GymStore<S>,
    draft: &ReservationDraft,
) -> Result<()> {
    check_ref("memberId", draft.member_id, store.member(draft.member_id).is_some())?;
    check_ref("classId", draft.class_id, store.class(draft.class_id).is_some())
}

fn check_ref(field: &str, id: EntityId, exists: bool) -> Result<()> {
    if exists {
        Ok(())
    } else {
        Err(GymError::validation(field, format!("no record with id {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::HydrationPolicy;
    use crate::seed::SeedData;
    use crate::storage::MemoryStorage;

    fn field_of(err: GymError) -> String {
        match err {
            GymError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_person_passes() {
        let draft = PersonDraft::new("Ana", "Diaz", "30111222", "555-0000", "ana@example.com");
        assert!(validate_person(&draft).is_ok());
    }

    #[test]
    fn test_blank_field_is_reported_by_persisted_name() {
        let draft = PersonDraft::new("Ana", "  ", "30111222", "555-0000", "ana@example.com");
        assert_eq!(field_of(validate_person(&draft).unwrap_err()), "apellido");
    }

    #[test]
    fn test_email_without_at_is_rejected() {
        for email in ["ana.example.com", "@example.com", "ana@", "a@b@c"] {
            let draft = PersonDraft::new("Ana", "Diaz", "1", "2", email);
            assert_eq!(field_of(validate_person(&draft).unwrap_err()), "correo", "{}", email);
        }
    }

    #[test]
    fn test_capacity_parsing() {
        assert_eq!(parse_capacity("15").unwrap(), 15);
        assert_eq!(parse_capacity(" 3 ").unwrap(), 3);
        for bad in ["0", "-2", "abc", "", "1.5"] {
            assert!(parse_capacity(bad).is_err(), "{}", bad);
        }
    }

    #[test]
    fn test_class_requires_positive_capacity() {
        let draft = GymClassDraft::new("Yoga", "Mar 18:00", 0);
        assert_eq!(field_of(validate_class(&draft).unwrap_err()), "cupo");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("29/02/2024").is_err());
    }

    #[test]
    fn test_reservation_refs_must_exist() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let store = GymStore::open_with_seed(
            MemoryStorage::new(),
            HydrationPolicy::default(),
            SeedData::demo(today),
        )
        .unwrap();

        assert!(validate_reservation_refs(&store, &ReservationDraft::new(1, 4, today)).is_ok());

        let err = validate_reservation_refs(&store, &ReservationDraft::new(9, 1, today)).unwrap_err();
        assert_eq!(field_of(err), "memberId");

        let err = validate_reservation_refs(&store, &ReservationDraft::new(1, 9, today)).unwrap_err();
        assert_eq!(field_of(err), "classId");
    }
}
