//! Persisted signup session

use crate::error::StoreError;
use crate::model::SignupResponse;
use crate::store::keys;
use crate::store::StoreProvider;

/// The three opaque values persisted after a successful signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Session token issued by the account service.
    pub token: String,
    /// QR identifier string for the new account.
    pub qr_string: String,
    /// Opaque user identifier.
    pub user_id: String,
}

impl Session {
    /// Extracts the session from an authenticated signup response.
    ///
    /// Returns `None` when the response is not authenticated or is missing
    /// the token or user record.
    pub fn from_response(response: &SignupResponse) -> Option<Self> {
        if !response.auth {
            return None;
        }
        let token = response.token.clone()?;
        let user = response.user.as_ref()?;
        Some(Self {
            token,
            qr_string: user.qr_string.clone(),
            user_id: user.id.clone(),
        })
    }

    /// Persists the session values as a strictly sequential chain.
    ///
    /// Each write is awaited before the next is issued, in the order token,
    /// QR string, user id. A failed write stops the chain; earlier writes
    /// are not rolled back.
    pub async fn persist(&self, store: &dyn StoreProvider) -> Result<(), StoreError> {
        store.set(keys::JWT_TOKEN, &self.token).await?;
        store.set(keys::QR_STRING, &self.qr_string).await?;
        store.set(keys::USER_ID, &self.user_id).await?;
        Ok(())
    }

    /// Loads a previously persisted session, if all three values are present.
    pub async fn load(store: &dyn StoreProvider) -> Result<Option<Self>, StoreError> {
        let token = store.get(keys::JWT_TOKEN).await?;
        let qr_string = store.get(keys::QR_STRING).await?;
        let user_id = store.get(keys::USER_ID).await?;

        Ok(match (token, qr_string, user_id) {
            (Some(token), Some(qr_string), Some(user_id)) => Some(Self {
                token,
                qr_string,
                user_id,
            }),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn authenticated_response() -> SignupResponse {
        serde_json::from_str(r#"{"auth":true,"token":"t1","user":{"_id":"u1","qr_string":"q1"}}"#)
            .unwrap()
    }

    #[test]
    fn test_from_response() {
        let session = Session::from_response(&authenticated_response()).unwrap();
        assert_eq!(session.token, "t1");
        assert_eq!(session.qr_string, "q1");
        assert_eq!(session.user_id, "u1");
    }

    #[test]
    fn test_from_declined_response() {
        let response: SignupResponse =
            serde_json::from_str(r#"{"auth":false,"message":"nope"}"#).unwrap();
        assert!(Session::from_response(&response).is_none());
    }

    #[test]
    fn test_from_authenticated_response_missing_user() {
        let response: SignupResponse =
            serde_json::from_str(r#"{"auth":true,"token":"t1"}"#).unwrap();
        assert!(Session::from_response(&response).is_none());
    }

    #[tokio::test]
    async fn test_persist_and_load() {
        let store = MemoryStore::new();
        let session = Session::from_response(&authenticated_response()).unwrap();

        session.persist(&store).await.unwrap();

        assert_eq!(
            store.get(keys::JWT_TOKEN).await.unwrap().as_deref(),
            Some("t1")
        );
        assert_eq!(
            store.get(keys::QR_STRING).await.unwrap().as_deref(),
            Some("q1")
        );
        assert_eq!(
            store.get(keys::USER_ID).await.unwrap().as_deref(),
            Some("u1")
        );

        let loaded = Session::load(&store).await.unwrap().unwrap();
        assert_eq!(loaded, session);
    }
}
