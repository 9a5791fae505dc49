//! In-memory backend - a stand-in for the REST service in tests.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use quillpad_core::domain::{Post, PostId};
use quillpad_core::ports::{BlogApi, ImageFile, LoginGrant};
use quillpad_core::search::NO_RESULTS;
use quillpad_core::{ClientError, Credentials};

#[derive(Default)]
struct Store {
    posts: Vec<Post>,
    next_id: PostId,
    uploads: usize,
    tokens: HashSet<String>,
}

/// Backend that keeps posts, accounts and tokens in process memory.
///
/// Behaves like the REST service from the client's point of view: mutations
/// need a token issued by `login`, uploads return relative paths, an empty
/// search is rejected. Note: Data is lost on process exit.
pub struct InMemoryBlogApi {
    origin: String,
    accounts: HashMap<String, String>,
    store: RwLock<Store>,
}

impl InMemoryBlogApi {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            accounts: HashMap::new(),
            store: RwLock::new(Store {
                next_id: 1,
                ..Store::default()
            }),
        }
    }

    /// Register an account that `login` accepts.
    pub fn with_account(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.accounts.insert(username.into(), password.into());
        self
    }

    /// Insert a post directly, bypassing authentication. Returns it with its id.
    pub async fn seed(&self, mut post: Post) -> Post {
        let mut store = self.store.write().await;
        post.id = store.next_id;
        store.next_id += 1;
        store.posts.push(post.clone());
        post
    }

    async fn authorize(&self, creds: &Credentials) -> Result<(), ClientError> {
        if self.store.read().await.tokens.contains(creds.token()) {
            Ok(())
        } else {
            Err(ClientError::Api("invalid token".to_string()))
        }
    }
}

impl Default for InMemoryBlogApi {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

#[async_trait]
impl BlogApi for InMemoryBlogApi {
    fn origin(&self) -> &str {
        &self.origin
    }

    async fn get_posts(&self, id: PostId) -> Result<Vec<Post>, ClientError> {
        let store = self.store.read().await;
        Ok(store
            .posts
            .iter()
            .filter(|p| id == 0 || p.id == id)
            .cloned()
            .collect())
    }

    async fn add_post(
        &self,
        creds: &Credentials,
        mut post: Post,
    ) -> Result<Option<String>, ClientError> {
        self.authorize(creds).await?;
        let mut store = self.store.write().await;
        post.id = store.next_id;
        store.next_id += 1;
        tracing::debug!(id = post.id, "Post stored in memory");
        store.posts.push(post);
        Ok(Some("post added".to_string()))
    }

    async fn update_post(
        &self,
        creds: &Credentials,
        post: Post,
    ) -> Result<Option<String>, ClientError> {
        self.authorize(creds).await?;
        let mut store = self.store.write().await;
        let existing = store
            .posts
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or_else(|| ClientError::Api(format!("post {} not found", post.id)))?;
        *existing = post;
        Ok(Some("post updated".to_string()))
    }

    async fn delete_post(
        &self,
        creds: &Credentials,
        id: PostId,
    ) -> Result<Option<String>, ClientError> {
        self.authorize(creds).await?;
        let mut store = self.store.write().await;
        let before = store.posts.len();
        store.posts.retain(|p| p.id != id);
        if store.posts.len() == before {
            return Err(ClientError::Api(format!("post {id} not found")));
        }
        Ok(Some("post deleted".to_string()))
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Post>, ClientError> {
        let store = self.store.read().await;
        let found: Vec<Post> = store
            .posts
            .iter()
            .filter(|p| p.title.contains(keyword) || p.content.contains(keyword))
            .cloned()
            .collect();
        if found.is_empty() {
            return Err(ClientError::Api(NO_RESULTS.to_string()));
        }
        Ok(found)
    }

    async fn upload_image(
        &self,
        creds: &Credentials,
        file: &ImageFile,
    ) -> Result<String, ClientError> {
        self.authorize(creds).await?;
        if file.bytes.is_empty() {
            return Err(ClientError::Api("empty file".to_string()));
        }
        let mut store = self.store.write().await;
        store.uploads += 1;
        Ok(format!("/uploads/{}-{}", store.uploads, file.name))
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginGrant, ClientError> {
        match self.accounts.get(username) {
            Some(expected) if expected == password => {
                let mut store = self.store.write().await;
                let token = format!("mem-{}-{}", username, store.tokens.len() + 1);
                store.tokens.insert(token.clone());
                Ok(LoginGrant {
                    token,
                    message: Some("login successful".to_string()),
                })
            }
            _ => Err(ClientError::Api("invalid username or password".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn logged_in() -> (InMemoryBlogApi, Credentials) {
        let api = InMemoryBlogApi::default().with_account("admin", "pw");
        let grant = api.login("admin", "pw").await.unwrap();
        (api, Credentials::new(grant.token))
    }

    #[tokio::test]
    async fn test_mutations_need_issued_token() {
        let api = InMemoryBlogApi::default();
        let err = api
            .add_post(&Credentials::new("forged"), Post::new(0, "t", "c", "d"))
            .await
            .unwrap_err();
        assert_eq!(err, ClientError::Api("invalid token".to_string()));
    }

    #[tokio::test]
    async fn test_add_update_delete() {
        let (api, creds) = logged_in().await;

        api.add_post(&creds, Post::new(0, "t", "c", "2024-01-01"))
            .await
            .unwrap();
        let mut post = api.get_posts(0).await.unwrap().remove(0);
        assert_eq!(post.id, 1);

        post.title = "changed".to_string();
        api.update_post(&creds, post.clone()).await.unwrap();
        assert_eq!(api.get_posts(1).await.unwrap(), vec![post]);

        api.delete_post(&creds, 1).await.unwrap();
        assert!(api.get_posts(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_without_match_is_rejected() {
        let api = InMemoryBlogApi::default();
        api.seed(Post::new(0, "rust", "", "2024-01-01")).await;

        assert_eq!(api.search("rust").await.unwrap().len(), 1);
        assert_eq!(
            api.search("go").await.unwrap_err(),
            ClientError::Api(NO_RESULTS.to_string())
        );
    }

    #[tokio::test]
    async fn test_uploads_get_distinct_relative_paths() {
        let (api, creds) = logged_in().await;
        let file = ImageFile::new("a.png", "image/png", vec![1, 2, 3]);

        let first = api.upload_image(&creds, &file).await.unwrap();
        let second = api.upload_image(&creds, &file).await.unwrap();

        assert!(first.starts_with("/uploads/"));
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_wrong_password() {
        let api = InMemoryBlogApi::default().with_account("admin", "pw");
        assert!(api.login("admin", "nope").await.is_err());
    }
}
