//! Login state, passed around explicitly as [`Credentials`].

use std::fmt;

use crate::error::ClientError;
use crate::ports::{BlogApi, SessionStore};

/// Opaque auth token issued by `/account/login`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

// Keep the token out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials").finish_non_exhaustive()
    }
}

/// Log in and persist the token.
///
/// Returns the credentials and the server's message for display.
pub async fn login(
    api: &dyn BlogApi,
    store: &dyn SessionStore,
    username: &str,
    password: &str,
) -> Result<(Credentials, Option<String>), ClientError> {
    if username.is_empty() || password.is_empty() {
        return Err(ClientError::Validation(
            "username and password are required".to_string(),
        ));
    }

    let grant = api.login(username, password).await?;
    store.save(&grant.token).await?;

    tracing::info!(username = %username, "Logged in");
    Ok((Credentials::new(grant.token), grant.message))
}

/// Forget the stored token.
pub async fn logout(store: &dyn SessionStore) -> Result<(), ClientError> {
    store.clear().await?;
    tracing::info!("Logged out");
    Ok(())
}

/// Read the token saved by an earlier login. `None` means logged out.
pub async fn restore(store: &dyn SessionStore) -> Result<Option<Credentials>, ClientError> {
    let token = store.load().await?;
    Ok(token.filter(|t| !t.is_empty()).map(Credentials::new))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeApi, MemoryStore};

    #[tokio::test]
    async fn test_login_persists_token() {
        let api = FakeApi::new();
        let store = MemoryStore::default();

        let (creds, message) = login(&api, &store, "admin", "secret").await.unwrap();

        assert_eq!(creds.token(), "token-admin");
        assert_eq!(message.as_deref(), Some("welcome"));
        assert_eq!(restore(&store).await.unwrap(), Some(creds));
    }

    #[tokio::test]
    async fn test_failed_login_keeps_store_empty() {
        let api = FakeApi::new();
        let store = MemoryStore::default();

        let err = login(&api, &store, "admin", "wrong").await.unwrap_err();

        assert_eq!(err, ClientError::Api("bad credentials".to_string()));
        assert_eq!(restore(&store).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_empty_credentials_rejected_without_request() {
        let api = FakeApi::new();
        let store = MemoryStore::default();

        let err = login(&api, &store, "", "secret").await.unwrap_err();

        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(api.request_count(), 0);
    }

    #[tokio::test]
    async fn test_logout_clears_token() {
        let store = MemoryStore::default();
        store.save("abc").await.unwrap();

        logout(&store).await.unwrap();

        assert_eq!(restore(&store).await.unwrap(), None);
    }

    #[test]
    fn test_debug_hides_token() {
        let creds = Credentials::new("super-secret");
        assert!(!format!("{creds:?}").contains("super-secret"));
    }
}
