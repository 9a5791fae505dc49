use quillpad_shared::dto::PostDto;
use serde::{Deserialize, Serialize};

/// Server-assigned post identifier. 0 marks a post that was never saved.
pub type PostId = i64;

const PREVIEW_CHARS: usize = 50;

/// Post entity - a blog post as held by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    /// Markdown source.
    pub content: String,
    pub date: String,
}

impl Post {
    pub fn new(
        id: PostId,
        title: impl Into<String>,
        content: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            date: date.into(),
        }
    }

    /// List-view excerpt: the first 50 characters, with `...` when cut.
    pub fn preview(&self) -> String {
        let mut chars = self.content.chars();
        let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
        if chars.next().is_some() {
            format!("{head}...")
        } else {
            head
        }
    }
}

impl From<PostDto> for Post {
    fn from(dto: PostDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            content: dto.content,
            date: dto.date,
        }
    }
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            date: post.date,
        }
    }
}
