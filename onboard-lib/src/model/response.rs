//! Account service response types

use serde::Deserialize;

/// JSON response from the account-creation endpoint.
///
/// `auth` is the authentication flag: when `true` the account was created
/// and the session fields are expected to be present; when `false` the
/// service declined the request and `message` explains why.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupResponse {
    /// Whether account creation succeeded and session tokens were issued.
    pub auth: bool,
    /// Session token, present when `auth` is `true`.
    pub token: Option<String>,
    /// Server-provided rejection message, present when `auth` is `false`.
    pub message: Option<String>,
    /// Created user record, present when `auth` is `true`.
    pub user: Option<SignupUser>,
}

/// The user record embedded in an authenticated signup response.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupUser {
    /// Opaque user identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Opaque QR identifier string for the new account.
    pub qr_string: String,
}
