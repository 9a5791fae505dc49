//! Keyword search over posts.

use crate::domain::Post;
use crate::error::ClientError;
use crate::ports::BlogApi;

/// Longest keyword accepted, in characters after trimming.
pub const MAX_KEYWORD_CHARS: usize = 20;

/// Message used when the backend rejects a search without saying why.
pub const NO_RESULTS: &str = "no search results";

/// A keyword that passed client-side validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trim and validate a raw keyword.
    pub fn parse(raw: &str) -> Result<Self, ClientError> {
        let keyword = raw.trim();
        if keyword.is_empty() {
            return Err(ClientError::Validation("keyword is empty".to_string()));
        }
        let len = keyword.chars().count();
        if len > MAX_KEYWORD_CHARS {
            return Err(ClientError::Validation(format!(
                "keyword too long ({len} characters, at most {MAX_KEYWORD_CHARS})"
            )));
        }
        Ok(Self(keyword.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validate `raw` and run the search. Nothing is sent if validation fails.
pub async fn search(api: &dyn BlogApi, raw: &str) -> Result<Vec<Post>, ClientError> {
    let query = SearchQuery::parse(raw)?;
    tracing::debug!(keyword = %query.as_str(), "Searching posts");
    api.search(query.as_str()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeApi;

    #[test]
    fn test_parse_trims() {
        assert_eq!(SearchQuery::parse("  rust  ").unwrap().as_str(), "rust");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert!(matches!(
            SearchQuery::parse("   "),
            Err(ClientError::Validation(_))
        ));
    }

    #[test]
    fn test_length_counts_characters() {
        assert!(SearchQuery::parse(&"搜".repeat(20)).is_ok());
        assert!(SearchQuery::parse(&"搜".repeat(21)).is_err());
    }

    #[tokio::test]
    async fn test_twenty_one_chars_rejected_before_request() {
        let api = FakeApi::new();

        let err = search(&api, &"a".repeat(21)).await.unwrap_err();

        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(api.request_count(), 0);
    }

    #[tokio::test]
    async fn test_twenty_chars_sent() {
        let api = FakeApi::new();
        api.seed(Post::new(0, "a".repeat(20), "", "2024-01-01"));

        let found = search(&api, &"a".repeat(20)).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(api.requests(), vec!["/post/search"]);
    }
}
