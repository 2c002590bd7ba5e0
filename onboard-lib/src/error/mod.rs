//! Error types

mod api;
mod rejection;
mod store;

pub use api::*;
pub use rejection::*;
pub use store::*;

/// Top-level error type for the signup flow.
///
/// User-facing rejections (validation failures and server-declined signups)
/// are not errors; they are reported through
/// [`SubmitOutcome`](crate::flow::SubmitOutcome). This type covers the
/// terminal failures of a submission attempt: transport/parse problems and
/// session persistence problems. No variant is retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error during the account-creation request.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Error persisting session tokens.
    #[error(transparent)]
    Store(#[from] StoreError),
}
