//! Backend API port.

use async_trait::async_trait;

use crate::domain::{Post, PostId};
use crate::error::ClientError;
use crate::session::Credentials;

/// One binary file attached to a paste or drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

/// Successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginGrant {
    pub token: String,
    pub message: Option<String>,
}

/// Blog backend trait - abstraction over the remote REST service.
///
/// Every method maps to one endpoint. Implementations turn `status: false`
/// envelopes into [`ClientError::Api`] and transport failures into
/// [`ClientError::Network`]. Mutations return the server message, if any.
#[async_trait]
pub trait BlogApi: Send + Sync {
    /// Base origin that relative upload paths are resolved against.
    fn origin(&self) -> &str;

    /// `POST /post/get`. An id of 0 lists every post.
    async fn get_posts(&self, id: PostId) -> Result<Vec<Post>, ClientError>;

    /// `POST /post/add`. The post id is sent as 0.
    async fn add_post(&self, creds: &Credentials, post: Post)
    -> Result<Option<String>, ClientError>;

    /// `POST /post/update`.
    async fn update_post(
        &self,
        creds: &Credentials,
        post: Post,
    ) -> Result<Option<String>, ClientError>;

    /// `POST /post/delete`.
    async fn delete_post(
        &self,
        creds: &Credentials,
        id: PostId,
    ) -> Result<Option<String>, ClientError>;

    /// `POST /post/search`.
    async fn search(&self, keyword: &str) -> Result<Vec<Post>, ClientError>;

    /// `POST /post/uploadImage`. Returns the stored path exactly as the
    /// backend reported it, relative or absolute.
    async fn upload_image(&self, creds: &Credentials, file: &ImageFile)
    -> Result<String, ClientError>;

    /// `POST /account/login`.
    async fn login(&self, username: &str, password: &str) -> Result<LoginGrant, ClientError>;
}
