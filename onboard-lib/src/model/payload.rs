//! Server-ready registration payload

use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::RegistrationDraft;
use crate::error::Rejection;
use crate::validate;
use crate::validate::messages;
use crate::validate::phone::digits;

/// The immutable, validated request body for account creation.
///
/// A payload can only be obtained through [`RegistrationPayload::from_draft`],
/// which validates first; a partial or invalid payload is never constructed.
/// Compared to the draft, the confirmation password is dropped, all strings
/// are trimmed, the phone number is reduced to digits and prefixed with the
/// country code `1`, and the date of birth is rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationPayload {
    pub(crate) username: String,
    pub(crate) phone: String,
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) private: bool,
    pub(crate) dob: String,
}

impl RegistrationPayload {
    /// Validates the draft at the given moment and derives the payload.
    ///
    /// Returns the first failing rule's user-facing message as a
    /// [`Rejection`] if validation does not pass.
    pub fn from_draft(
        draft: &RegistrationDraft,
        now: DateTime<Utc>,
    ) -> Result<Self, Rejection> {
        validate::validate(draft, now)?;

        // Validation guarantees a date of birth is present.
        let dob = draft
            .dob
            .ok_or_else(|| Rejection::new(messages::ALL_FIELDS_REQUIRED))?;

        Ok(Self {
            username: draft.username.trim().to_string(),
            phone: format!("1{}", digits(&draft.phone)),
            email: draft.email.trim().to_string(),
            password: draft.password.trim().to_string(),
            first_name: draft.first_name.trim().to_string(),
            last_name: draft.last_name.trim().to_string(),
            private: false,
            dob: dob.format("%Y-%m-%d").to_string(),
        })
    }

    /// The digits-only phone number including the country code prefix.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// The formatted date of birth (`YYYY-MM-DD`).
    pub fn dob(&self) -> &str {
        &self.dob
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use chrono::TimeZone;

    use super::*;
    use crate::model::Field;

    fn valid_draft() -> RegistrationDraft {
        let mut draft = RegistrationDraft::new();
        draft.set(Field::FirstName, " Jane ");
        draft.set(Field::LastName, "Doe");
        draft.set(Field::Phone, "5551234567");
        draft.set(Field::Email, "jane.doe@example.com");
        draft.set(Field::Username, "janedoe");
        draft.set(Field::Password, "hunter22");
        draft.set(Field::ConfirmPassword, "hunter22");
        draft.set_dob(NaiveDate::from_ymd_opt(1990, 4, 7).unwrap());
        draft
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_payload_derivation() {
        let payload = RegistrationPayload::from_draft(&valid_draft(), now()).unwrap();

        assert_eq!(payload.first_name, "Jane");
        assert_eq!(payload.phone, "15551234567");
        assert_eq!(payload.dob, "1990-04-07");
        assert!(!payload.private);
    }

    #[test]
    fn test_payload_serialization_shape() {
        let payload = RegistrationPayload::from_draft(&valid_draft(), now()).unwrap();
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["username"], "janedoe");
        assert_eq!(json["phone"], "15551234567");
        assert_eq!(json["email"], "jane.doe@example.com");
        assert_eq!(json["first_name"], "Jane");
        assert_eq!(json["last_name"], "Doe");
        assert_eq!(json["private"], false);
        assert_eq!(json["dob"], "1990-04-07");
        // The confirmation password never leaves the client.
        assert!(json.get("confirm_password").is_none());
    }

    #[test]
    fn test_invalid_draft_never_becomes_payload() {
        let mut draft = valid_draft();
        draft.set(Field::ConfirmPassword, "different");

        let err = RegistrationPayload::from_draft(&draft, now()).unwrap_err();
        assert_eq!(err.message(), "Passwords do not match.");
    }
}
