//! Scripted fakes for the ports, shared by the unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Post, PostId};
use crate::error::ClientError;
use crate::ports::{
    BlogApi, ImageFile, LoginGrant, Notice, Notifier, SessionError, SessionStore,
};
use crate::session::Credentials;

pub fn image(name: &str) -> ImageFile {
    ImageFile::new(name, "image/png", vec![0x89, b'P', b'N', b'G'])
}

#[derive(Default)]
struct FakeState {
    posts: Vec<Post>,
    next_id: PostId,
    uploads: VecDeque<Result<String, ClientError>>,
    upload_count: usize,
    uploaded: Vec<String>,
    fail_save: Option<ClientError>,
    fail_list: Option<ClientError>,
    requests: Vec<&'static str>,
}

/// In-process backend with scriptable failures.
pub struct FakeApi {
    state: Mutex<FakeState>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeState {
                next_id: 1,
                ..FakeState::default()
            }),
        }
    }

    /// Queue the result of the next upload. Unscripted uploads succeed.
    pub fn script_upload(&self, result: Result<String, ClientError>) {
        self.state.lock().unwrap().uploads.push_back(result);
    }

    pub fn fail_next_save(&self, err: ClientError) {
        self.state.lock().unwrap().fail_save = Some(err);
    }

    pub fn fail_next_list(&self, err: ClientError) {
        self.state.lock().unwrap().fail_list = Some(err);
    }

    /// Store a post as if created earlier, assigning it an id.
    pub fn seed(&self, mut post: Post) -> Post {
        let mut state = self.state.lock().unwrap();
        post.id = state.next_id;
        state.next_id += 1;
        state.posts.push(post.clone());
        post
    }

    pub fn posts(&self) -> Vec<Post> {
        self.state.lock().unwrap().posts.clone()
    }

    pub fn uploaded_names(&self) -> Vec<String> {
        self.state.lock().unwrap().uploaded.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    pub fn requests(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().requests.clone()
    }

    fn record(&self, endpoint: &'static str) -> std::sync::MutexGuard<'_, FakeState> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(endpoint);
        state
    }
}

#[async_trait]
impl BlogApi for FakeApi {
    fn origin(&self) -> &str {
        "http://api.test"
    }

    async fn get_posts(&self, id: PostId) -> Result<Vec<Post>, ClientError> {
        let mut state = self.record("/post/get");
        if let Some(err) = state.fail_list.take() {
            return Err(err);
        }
        Ok(state
            .posts
            .iter()
            .filter(|p| id == 0 || p.id == id)
            .cloned()
            .collect())
    }

    async fn add_post(
        &self,
        _creds: &Credentials,
        mut post: Post,
    ) -> Result<Option<String>, ClientError> {
        let mut state = self.record("/post/add");
        if let Some(err) = state.fail_save.take() {
            return Err(err);
        }
        post.id = state.next_id;
        state.next_id += 1;
        state.posts.push(post);
        Ok(Some("added".to_string()))
    }

    async fn update_post(
        &self,
        _creds: &Credentials,
        post: Post,
    ) -> Result<Option<String>, ClientError> {
        let mut state = self.record("/post/update");
        if let Some(err) = state.fail_save.take() {
            return Err(err);
        }
        match state.posts.iter_mut().find(|p| p.id == post.id) {
            Some(existing) => {
                *existing = post;
                Ok(Some("updated".to_string()))
            }
            None => Err(ClientError::Api("post not found".to_string())),
        }
    }

    async fn delete_post(
        &self,
        _creds: &Credentials,
        id: PostId,
    ) -> Result<Option<String>, ClientError> {
        let mut state = self.record("/post/delete");
        let before = state.posts.len();
        state.posts.retain(|p| p.id != id);
        if state.posts.len() == before {
            return Err(ClientError::Api("post not found".to_string()));
        }
        Ok(Some("deleted".to_string()))
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Post>, ClientError> {
        let state = self.record("/post/search");
        Ok(state
            .posts
            .iter()
            .filter(|p| p.title.contains(keyword) || p.content.contains(keyword))
            .cloned()
            .collect())
    }

    async fn upload_image(
        &self,
        _creds: &Credentials,
        file: &ImageFile,
    ) -> Result<String, ClientError> {
        let mut state = self.record("/post/uploadImage");
        state.uploaded.push(file.name.clone());
        state.upload_count += 1;
        let n = state.upload_count;
        state
            .uploads
            .pop_front()
            .unwrap_or_else(|| Ok(format!("/uploads/{n}.png")))
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginGrant, ClientError> {
        let _state = self.record("/account/login");
        if password == "secret" {
            Ok(LoginGrant {
                token: format!("token-{username}"),
                message: Some("welcome".to_string()),
            })
        } else {
            Err(ClientError::Api("bad credentials".to_string()))
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    token: Mutex<Option<String>>,
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn load(&self) -> Result<Option<String>, SessionError> {
        Ok(self.token.lock().unwrap().clone())
    }

    async fn save(&self, token: &str) -> Result<(), SessionError> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

/// Keeps every notice for inspection.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}
