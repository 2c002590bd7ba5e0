//! Pre-submit form validation
//!
//! The validator is an ordered table of (predicate, message) rules evaluated
//! in sequence over the assembled draft; the first failing rule wins and
//! later rules are not evaluated. It is a pure decision function: no side
//! effects, identical input yields identical output.

pub mod age;
pub mod email;
pub mod phone;

use chrono::DateTime;
use chrono::Utc;

use crate::error::Rejection;
use crate::model::RegistrationDraft;

/// The exact user-facing messages of the validation rules.
pub mod messages {
    pub const ALL_FIELDS_REQUIRED: &str = "All fields are required.";
    pub const TOO_YOUNG: &str = "You must be 13 years or older to create an account.";
    pub const USERNAME_TOO_SHORT: &str = "Usernames must consist of 6 or more characters.";
    pub const INVALID_PHONE: &str = "Please enter a valid phone number.";
    pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
    pub const PASSWORD_TOO_SHORT: &str = "Passwords must consist of 6 or more characters.";
    pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match.";
}

/// The draft as the rules see it: trimmed text, digits-only phone, and the
/// age at the moment of validation.
struct RuleCtx<'a> {
    first_name: &'a str,
    last_name: &'a str,
    email: &'a str,
    username: &'a str,
    password: &'a str,
    confirm_password: &'a str,
    phone_digits: String,
    age: Option<i32>,
}

impl<'a> RuleCtx<'a> {
    fn new(draft: &'a RegistrationDraft, now: DateTime<Utc>) -> Self {
        Self {
            first_name: draft.first_name.trim(),
            last_name: draft.last_name.trim(),
            email: draft.email.trim(),
            username: draft.username.trim(),
            password: draft.password.trim(),
            confirm_password: draft.confirm_password.trim(),
            phone_digits: phone::digits(&draft.phone),
            age: draft.dob.map(|dob| age::age_years(dob, now)),
        }
    }
}

fn missing_required(ctx: &RuleCtx) -> bool {
    ctx.age.is_none()
        || ctx.email.is_empty()
        || ctx.first_name.is_empty()
        || ctx.last_name.is_empty()
        || ctx.password.is_empty()
        || ctx.confirm_password.is_empty()
        || ctx.phone_digits.is_empty()
        || ctx.username.is_empty()
}

fn under_age(ctx: &RuleCtx) -> bool {
    ctx.age.is_some_and(|age| age < 13)
}

fn username_too_short(ctx: &RuleCtx) -> bool {
    ctx.username.chars().count() < 6
}

fn invalid_phone(ctx: &RuleCtx) -> bool {
    ctx.phone_digits.len() != 10
}

fn invalid_email(ctx: &RuleCtx) -> bool {
    !email::is_valid_email(ctx.email)
}

fn password_too_short(ctx: &RuleCtx) -> bool {
    ctx.password.chars().count() < 6
}

fn passwords_mismatch(ctx: &RuleCtx) -> bool {
    ctx.password != ctx.confirm_password
}

/// Ordered rule table; the first predicate returning `true` rejects the
/// draft with the paired message.
const RULES: &[(fn(&RuleCtx) -> bool, &str)] = &[
    (missing_required, messages::ALL_FIELDS_REQUIRED),
    (under_age, messages::TOO_YOUNG),
    (username_too_short, messages::USERNAME_TOO_SHORT),
    (invalid_phone, messages::INVALID_PHONE),
    (invalid_email, messages::INVALID_EMAIL),
    (password_too_short, messages::PASSWORD_TOO_SHORT),
    (passwords_mismatch, messages::PASSWORDS_DO_NOT_MATCH),
];

/// Validates the assembled draft at the given moment.
///
/// Returns `Ok(())` when every rule passes, or the first failing rule's
/// user-facing message as a [`Rejection`].
pub fn validate(draft: &RegistrationDraft, now: DateTime<Utc>) -> Result<(), Rejection> {
    let ctx = RuleCtx::new(draft, now);
    for (failed, message) in RULES {
        if failed(&ctx) {
            return Err(Rejection::new(*message));
        }
    }
    Ok(())
}
