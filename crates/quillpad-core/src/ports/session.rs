//! Session storage port - where the auth token lives between runs.

use async_trait::async_trait;

use crate::error::ClientError;

/// Persistent token storage (browser local storage, a file, memory).
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the stored token, if any.
    async fn load(&self) -> Result<Option<String>, SessionError>;

    async fn save(&self, token: &str) -> Result<(), SessionError>;

    /// Remove the stored token. Clearing an empty store is not an error.
    async fn clear(&self) -> Result<(), SessionError>;
}

/// Session storage errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Storage unavailable: {0}")]
    Io(String),

    #[error("Stored token is unreadable: {0}")]
    Corrupt(String),
}

impl From<SessionError> for ClientError {
    fn from(err: SessionError) -> Self {
        ClientError::Session(err.to_string())
    }
}
