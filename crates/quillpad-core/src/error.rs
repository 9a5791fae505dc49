//! Client-level error types.

use thiserror::Error;

/// Failures of a user-triggered action. None of them are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Transport failure, unexpected HTTP status, or an undecodable body.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with `status: false`.
    #[error("{0}")]
    Api(String),

    /// Rejected on the client before any request was sent.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not logged in")]
    Unauthenticated,

    #[error("Session storage error: {0}")]
    Session(String),
}

/// An image upload inside the editor failed.
///
/// `inserted` counts the images of the same batch that were uploaded and
/// spliced into the draft before the failure. They stay in the draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Image upload failed: {source}")]
pub struct UploadError {
    pub inserted: usize,
    #[source]
    pub source: ClientError,
}

impl UploadError {
    pub fn new(source: ClientError) -> Self {
        Self {
            inserted: 0,
            source,
        }
    }

    pub(crate) fn after(mut self, inserted: usize) -> Self {
        self.inserted = inserted;
        self
    }

    /// The message shown to the user.
    pub fn message(&self) -> String {
        self.source.to_string()
    }
}

impl From<UploadError> for ClientError {
    fn from(err: UploadError) -> Self {
        err.source
    }
}
