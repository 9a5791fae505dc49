//! Data Transfer Objects - request bodies and payloads for the backend API.

use serde::{Deserialize, Serialize};

/// Post as it travels over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDto {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub date: String,
}

/// `POST /post/get`. An id of 0 asks for every post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPostsRequest {
    pub id: i64,
}

/// `POST /post/add` and `POST /post/update`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavePostRequest {
    pub token: String,
    pub post: PostDto,
}

/// Only the id is sent when deleting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRef {
    pub id: i64,
}

/// `POST /post/delete`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePostRequest {
    pub token: String,
    pub post: PostRef,
}

/// `POST /post/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub content: String,
}

/// `POST /account/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Multipart field names for `POST /post/uploadImage`.
pub mod upload_fields {
    pub const TOKEN: &str = "token";
    pub const FILE: &str = "file";
}
