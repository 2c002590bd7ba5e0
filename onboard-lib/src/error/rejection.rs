//! User-facing rejection type

/// A user-facing rejection of a signup attempt.
///
/// Carries the exact message the form surfaces to the user, whether the
/// rejection came from a local validation rule or from the account service
/// declining the request. Fully recoverable by editing input and
/// resubmitting; nothing about the draft is mutated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Rejection {
    message: String,
}

impl Rejection {
    /// Creates a new rejection with the given user-facing message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message to surface to the user.
    pub fn message(&self) -> &str {
        &self.message
    }
}
