//! Form fields shared by members and instructors

use clap::Args;
use gymadmin_core::model::PersonDraft;
use gymadmin_core::rules::validation::validate_person;

#[derive(Debug, Args)]
pub struct PersonFields {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    /// National id (DNI)
    #[arg(long)]
    pub dni: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub email: String,
}

impl PersonFields {
    /// Validated draft
    pub fn into_draft(self) -> gymadmin_core::Result<PersonDraft> {
        let draft = PersonDraft::new(
            self.first_name.trim(),
            self.last_name.trim(),
            self.dni.trim(),
            self.phone.trim(),
            self.email.trim(),
        );
        validate_person(&draft)?;
        Ok(draft)
    }
}

/// Fields for an update; anything omitted keeps its current value
#[derive(Debug, Args)]
pub struct PersonPatch {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub dni: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

impl PersonPatch {
    /// Apply over `current` and validate the result
    pub fn apply_to(self, current: &PersonDraft) -> gymadmin_core::Result<PersonDraft> {
        let pick = |new: Option<String>, old: &str| new.map_or_else(|| old.to_string(), |v| v.trim().to_string());
        let draft = PersonDraft {
            first_name: pick(self.first_name, &current.first_name),
            last_name: pick(self.last_name, &current.last_name),
            national_id: pick(self.dni, &current.national_id),
            phone: pick(self.phone, &current.phone),
            email: pick(self.email, &current.email),
        };
        validate_person(&draft)?;
        Ok(draft)
    }
}

/// One table row per person
pub fn print_people<'a>(rows: impl IntoIterator<Item = (u32, &'a PersonDraft)>) {
    println!(
        "{:>4}  {:<24}  {:<10}  {:<12}  {}",
        "ID", "NOMBRE", "DNI", "TELEFONO", "CORREO"
    );
    for (id, p) in rows {
        println!(
            "{:>4}  {:<24}  {:<10}  {:<12}  {}",
            id,
            format!("{} {}", p.first_name, p.last_name),
            p.national_id,
            p.phone,
            p.email
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current() -> PersonDraft {
        PersonDraft::new("Juan", "Perez", "12345678", "555-0101", "juan@example.com")
    }

    #[test]
    fn test_patch_keeps_omitted_fields() {
        let patch = PersonPatch {
            first_name: None,
            last_name: None,
            dni: None,
            phone: Some(" 555-7777 ".to_string()),
            email: None,
        };
        let draft = patch.apply_to(&current()).unwrap();
        assert_eq!(draft.phone, "555-7777");
        assert_eq!(draft.first_name, "Juan");
    }

    #[test]
    fn test_patch_revalidates() {
        let patch = PersonPatch {
            first_name: None,
            last_name: None,
            dni: None,
            phone: None,
            email: Some("no-at-sign".to_string()),
        };
        assert!(patch.apply_to(&current()).is_err());
    }
}
