use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::post::{Post, PostId};

/// Editable draft of a post's title, content and date. Carries no id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditForm {
    pub title: String,
    pub content: String,
    pub date: String,
}

impl EditForm {
    /// Empty draft dated `day`.
    pub fn dated(day: NaiveDate) -> Self {
        Self {
            date: day.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    /// Empty draft dated today (UTC).
    pub fn for_today() -> Self {
        Self::dated(Utc::now().date_naive())
    }

    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            date: post.date.clone(),
        }
    }

    /// Build the post to send, with `id` 0 for a new one.
    pub fn to_post(&self, id: PostId) -> Post {
        Post::new(id, &self.title, &self.content, &self.date)
    }
}

/// Lifecycle of the editor dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftPhase {
    #[default]
    Closed,
    Creating,
    Editing,
    /// A save is in flight. Holds the phase to return to if it fails.
    Submitting { origin: Origin },
}

/// The phase a submission started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Creating,
    Editing,
}

impl From<Origin> for DraftPhase {
    fn from(origin: Origin) -> Self {
        match origin {
            Origin::Creating => DraftPhase::Creating,
            Origin::Editing => DraftPhase::Editing,
        }
    }
}

impl DraftPhase {
    pub fn is_open(&self) -> bool {
        !matches!(self, DraftPhase::Closed)
    }
}
