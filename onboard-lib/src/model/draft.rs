//! In-progress registration form state

use chrono::NaiveDate;

use crate::validate::phone::normalize_phone;

/// Identifies one text field of the registration form.
///
/// Front-ends route raw edits through [`RegistrationDraft::set`] keyed by
/// field, so input normalization stays in one place instead of being wired
/// per widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Phone,
    Email,
    Username,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Stable name of the field, usable as a registry key.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Username => "username",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
        }
    }
}

/// Mutable, possibly invalid form state held during entry.
///
/// Text fields hold what the user has typed so far, after per-edit
/// normalization: `email`, `username` and the password fields never contain
/// whitespace, and `phone` holds the masked display form
/// `(XXX) XXX-XXXX`. Names are stored verbatim and only trimmed when the
/// payload is derived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub dob: Option<NaiveDate>,
}

impl RegistrationDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a raw edit to the given field, normalizing the input.
    pub fn set(&mut self, field: Field, raw: &str) {
        match field {
            Field::FirstName => self.first_name = raw.to_string(),
            Field::LastName => self.last_name = raw.to_string(),
            Field::Phone => self.phone = normalize_phone(raw, &self.phone),
            Field::Email => self.email = strip_whitespace(raw),
            Field::Username => self.username = strip_whitespace(raw),
            Field::Password => self.password = strip_whitespace(raw),
            Field::ConfirmPassword => self.confirm_password = strip_whitespace(raw),
        }
    }

    /// Returns the current value of the given field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Username => &self.username,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Sets the date of birth (date picker confirmation).
    pub fn set_dob(&mut self, date: NaiveDate) {
        self.dob = Some(date);
    }

    /// Clears the date of birth.
    pub fn clear_dob(&mut self) {
        self.dob = None;
    }
}

/// Removes every whitespace character from the input.
fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_edits_strip_whitespace() {
        let mut draft = RegistrationDraft::new();
        draft.set(Field::Email, " user @example. com ");
        assert_eq!(draft.email, "user@example.com");

        draft.set(Field::Username, "some user\t1");
        assert_eq!(draft.username, "someuser1");

        draft.set(Field::Password, "pass word");
        assert_eq!(draft.password, "password");
    }

    #[test]
    fn test_names_stored_verbatim() {
        let mut draft = RegistrationDraft::new();
        draft.set(Field::FirstName, "  Mary Ann ");
        assert_eq!(draft.first_name, "  Mary Ann ");
    }

    #[test]
    fn test_phone_edits_masked_incrementally() {
        let mut draft = RegistrationDraft::new();
        for digit in ["5", "55", "555", "5551", "55512", "555123"] {
            // Simulate typing: each raw edit is the unmasked previous value
            // plus one digit, as a widget would hand it back.
            let raw = format!(
                "{}{}",
                draft.phone,
                &digit[digit.len() - 1..]
            );
            draft.set(Field::Phone, &raw);
        }
        assert_eq!(draft.phone, "(555) 123");
    }

    #[test]
    fn test_field_registry_roundtrip() {
        let mut draft = RegistrationDraft::new();
        draft.set(Field::Username, "wanderer");
        assert_eq!(draft.get(Field::Username), "wanderer");
        assert_eq!(Field::Username.name(), "username");
    }
}
