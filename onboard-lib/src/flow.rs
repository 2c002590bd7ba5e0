//! Signup submission flow
//!
//! The submission is an explicit sequential pipeline: validate, derive the
//! payload, issue the one network request, persist the session, navigate.
//! Each step's result feeds the next; the pipeline stops on the first
//! failure with no partial rollback.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::client::SignupClient;
use crate::error::Error;
use crate::model::RegistrationDraft;
use crate::model::RegistrationPayload;
use crate::session::Session;
use crate::store::StoreProvider;

/// Named routes the flow transitions to.
pub mod routes {
    /// Destination after a successful signup.
    pub const PROFILE_SETUP: &str = "Profile Setup";
    /// Destination for the "already have an account" affordance.
    pub const LOGIN: &str = "Login";
}

/// Navigation collaborator: a named-route transition, opaque to the flow.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Transitions to the named route.
    async fn navigate(&self, route: &str);
}

/// How a submission attempt concluded, as far as the user is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The account was created; the session is persisted and the flow has
    /// navigated onward.
    Completed(Session),
    /// The attempt was rejected, either by a local validation rule or by
    /// the account service. The message is surfaced to the user and the
    /// form state is untouched.
    Rejected(String),
}

/// Drives one registration form instance through submission.
///
/// Exactly one request is in flight at a time: `submit` takes `&mut self`,
/// so a second concurrent submission is unrepresentable. While a submit is
/// awaited the flow reports [`SignupFlow::is_submitting`], which front-ends
/// mirror as their loading state.
pub struct SignupFlow {
    client: SignupClient,
    store: Arc<dyn StoreProvider>,
    navigator: Arc<dyn Navigator>,
    submitting: bool,
}

impl SignupFlow {
    /// Creates a flow over the given collaborators.
    pub fn new(
        client: SignupClient,
        store: Arc<dyn StoreProvider>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            client,
            store,
            navigator,
            submitting: false,
        }
    }

    /// Returns `true` while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Submits the draft: validate, request, persist, navigate.
    ///
    /// - A validation failure returns [`SubmitOutcome::Rejected`] without
    ///   issuing a network request.
    /// - An authenticated response persists the session token, QR string
    ///   and user id sequentially, then navigates to
    ///   [`routes::PROFILE_SETUP`].
    /// - An unauthenticated response returns the server's message as a
    ///   rejection; nothing is persisted.
    /// - A transport or parse failure is logged and propagated as
    ///   [`Error::Api`]; the attempt is terminal and nothing is retried.
    pub async fn submit(&mut self, draft: &RegistrationDraft) -> Result<SubmitOutcome, Error> {
        let payload = match RegistrationPayload::from_draft(draft, Utc::now()) {
            Ok(payload) => payload,
            Err(rejection) => {
                log::debug!("signup rejected locally: {}", rejection.message());
                return Ok(SubmitOutcome::Rejected(rejection.message().to_string()));
            }
        };

        self.submitting = true;
        let result = self.client.create_account(&payload).await;
        self.submitting = false;

        let response = match result {
            Ok(response) => response,
            Err(err) => {
                log::error!("account creation request failed: {err}");
                return Err(err.into());
            }
        };

        match Session::from_response(&response) {
            Some(session) => {
                session.persist(self.store.as_ref()).await?;
                self.navigator.navigate(routes::PROFILE_SETUP).await;
                log::debug!("signup completed for user {}", session.user_id);
                Ok(SubmitOutcome::Completed(session))
            }
            None if !response.auth => {
                let message = response
                    .message
                    .unwrap_or_else(|| "Account could not be created.".to_string());
                log::debug!("signup declined by server: {message}");
                Ok(SubmitOutcome::Rejected(message))
            }
            None => {
                // Authenticated but the token or user record is missing.
                let err = crate::error::ApiError::parse(
                    "authenticated response missing token or user record",
                );
                log::error!("{err}");
                Err(err.into())
            }
        }
    }

    /// The "already have an account" affordance: navigate to the login
    /// route without touching the draft.
    pub async fn go_to_login(&self) {
        self.navigator.navigate(routes::LOGIN).await;
    }
}
