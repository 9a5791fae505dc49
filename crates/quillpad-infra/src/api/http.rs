//! reqwest client for the blog REST API.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde::de::DeserializeOwned;

use quillpad_core::domain::{Post, PostId};
use quillpad_core::editor::UPLOAD_FAILED;
use quillpad_core::ports::{BlogApi, ImageFile, LoginGrant};
use quillpad_core::search::NO_RESULTS;
use quillpad_core::{ClientError, Credentials};
use quillpad_shared::Envelope;
use quillpad_shared::dto::{
    DeletePostRequest, GetPostsRequest, LoginRequest, PostDto, PostRef, SavePostRequest,
    SearchRequest, upload_fields,
};
use quillpad_shared::response::Ack;

const DEFAULT_API_URL: &str = "http://localhost:8080";

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Backend origin, e.g. `http://localhost:8080`. Also the base for
    /// relative upload paths.
    pub base_url: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl HttpConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("QUILLPAD_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        }
    }
}

/// Blog backend reached over HTTP. Every call is a `POST`.
pub struct HttpBlogApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBlogApi {
    pub fn new(config: HttpConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        tracing::debug!(base_url = %base_url, "HTTP blog client ready");

        Ok(Self { base_url, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<Envelope<T>, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(endpoint = path, "POST");
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| network(path, e))?;
        decode(path, response).await
    }
}

fn network(path: &str, err: reqwest::Error) -> ClientError {
    tracing::warn!(endpoint = path, error = %err, "Request failed");
    ClientError::Network(format!("{path}: {err}"))
}

async fn decode<T: DeserializeOwned>(
    path: &str,
    response: reqwest::Response,
) -> Result<Envelope<T>, ClientError> {
    let status = response.status();
    let body = response.bytes().await.map_err(|e| network(path, e))?;

    // The backend may reject with an error status and still send an envelope.
    match serde_json::from_slice::<Envelope<T>>(&body) {
        Ok(envelope) => {
            if !status.is_success() {
                tracing::debug!(endpoint = path, %status, "Envelope on error status");
            }
            Ok(envelope)
        }
        Err(_) if !status.is_success() => {
            tracing::warn!(endpoint = path, %status, "Unexpected HTTP status");
            Err(ClientError::Network(format!("{path} returned HTTP {status}")))
        }
        Err(e) => Err(ClientError::Network(format!(
            "invalid response from {path}: {e}"
        ))),
    }
}

fn message(ack: Ack, default: &str) -> Result<Option<String>, ClientError> {
    let text = ack.message.clone().filter(|m| !m.is_empty());
    ack.into_result(default).map_err(ClientError::Api)?;
    Ok(text)
}

#[async_trait]
impl BlogApi for HttpBlogApi {
    fn origin(&self) -> &str {
        &self.base_url
    }

    async fn get_posts(&self, id: PostId) -> Result<Vec<Post>, ClientError> {
        let envelope: Envelope<Vec<PostDto>> = self
            .post_json("/post/get", &GetPostsRequest { id })
            .await?;
        let posts = envelope
            .into_result("failed to load posts")
            .map_err(ClientError::Api)?;
        // `status: true` with no data means there are no posts.
        Ok(posts
            .unwrap_or_default()
            .into_iter()
            .map(Post::from)
            .collect())
    }

    async fn add_post(
        &self,
        creds: &Credentials,
        mut post: Post,
    ) -> Result<Option<String>, ClientError> {
        post.id = 0;
        let body = SavePostRequest {
            token: creds.token().to_string(),
            post: post.into(),
        };
        let ack: Ack = self.post_json("/post/add", &body).await?;
        message(ack, "failed to add post")
    }

    async fn update_post(
        &self,
        creds: &Credentials,
        post: Post,
    ) -> Result<Option<String>, ClientError> {
        let body = SavePostRequest {
            token: creds.token().to_string(),
            post: post.into(),
        };
        let ack: Ack = self.post_json("/post/update", &body).await?;
        message(ack, "failed to update post")
    }

    async fn delete_post(
        &self,
        creds: &Credentials,
        id: PostId,
    ) -> Result<Option<String>, ClientError> {
        let body = DeletePostRequest {
            token: creds.token().to_string(),
            post: PostRef { id },
        };
        let ack: Ack = self.post_json("/post/delete", &body).await?;
        message(ack, "failed to delete post")
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Post>, ClientError> {
        let body = SearchRequest {
            content: keyword.to_string(),
        };
        let envelope: Envelope<Vec<PostDto>> = self.post_json("/post/search", &body).await?;
        let posts = envelope.into_result(NO_RESULTS).map_err(ClientError::Api)?;
        Ok(posts
            .unwrap_or_default()
            .into_iter()
            .map(Post::from)
            .collect())
    }

    async fn upload_image(
        &self,
        creds: &Credentials,
        file: &ImageFile,
    ) -> Result<String, ClientError> {
        const PATH: &str = "/post/uploadImage";

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)
            .map_err(|e| {
                ClientError::Validation(format!("invalid mime type {}: {e}", file.mime_type))
            })?;
        let form = Form::new()
            .text(upload_fields::TOKEN, creds.token().to_string())
            .part(upload_fields::FILE, part);

        tracing::debug!(endpoint = PATH, file = %file.name, "POST multipart");
        let response = self
            .client
            .post(self.url(PATH))
            .multipart(form)
            .send()
            .await
            .map_err(|e| network(PATH, e))?;

        let envelope: Envelope<String> = decode(PATH, response).await?;
        envelope
            .into_result(UPLOAD_FAILED)
            .map_err(ClientError::Api)?
            .filter(|path| !path.is_empty())
            .ok_or_else(|| ClientError::Api(UPLOAD_FAILED.to_string()))
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginGrant, ClientError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let envelope: Envelope<String> = self.post_json("/account/login", &body).await?;
        let message = envelope.message.clone().filter(|m| !m.is_empty());
        let token = envelope
            .into_result("login failed")
            .map_err(ClientError::Api)?
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ClientError::Api("login response carried no token".to_string()))?;

        Ok(LoginGrant { token, message })
    }
}
