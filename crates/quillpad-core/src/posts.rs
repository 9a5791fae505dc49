//! Read-only post access for the public list and detail views.

use crate::domain::{Post, PostId};
use crate::error::ClientError;
use crate::ports::BlogApi;

/// Every post, in backend order.
pub async fn list(api: &dyn BlogApi) -> Result<Vec<Post>, ClientError> {
    api.get_posts(0).await
}

/// The post with `id`, or `None` when the backend does not return it.
pub async fn find(api: &dyn BlogApi, id: PostId) -> Result<Option<Post>, ClientError> {
    if id == 0 {
        return Err(ClientError::Validation("post id must not be 0".to_string()));
    }
    let posts = api.get_posts(id).await?;
    Ok(posts.into_iter().find(|p| p.id == id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeApi;

    #[tokio::test]
    async fn test_find_picks_matching_id() {
        let api = FakeApi::new();
        api.seed(Post::new(0, "one", "", "2024-01-01"));
        let two = api.seed(Post::new(0, "two", "", "2024-01-02"));

        assert_eq!(find(&api, two.id).await.unwrap(), Some(two));
    }

    #[tokio::test]
    async fn test_find_missing_is_none() {
        let api = FakeApi::new();
        api.seed(Post::new(0, "one", "", "2024-01-01"));

        assert_eq!(find(&api, 42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_returns_all() {
        let api = FakeApi::new();
        api.seed(Post::new(0, "one", "", "2024-01-01"));
        api.seed(Post::new(0, "two", "", "2024-01-02"));

        assert_eq!(list(&api).await.unwrap().len(), 2);
    }
}
