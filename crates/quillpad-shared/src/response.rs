//! The uniform `{status, message, data}` response wrapper used by the backend.

use serde::{Deserialize, Serialize};

/// Standard backend response envelope.
///
/// `data` is absent on most mutations and on failures; `message` may be
/// missing or empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Server message, or `default` when missing or empty.
    pub fn message_or(&self, default: &str) -> String {
        match self.message.as_deref() {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => default.to_string(),
        }
    }

    /// Split into the payload on success or the rejection message on failure.
    pub fn into_result(self, default_message: &str) -> Result<Option<T>, String> {
        if self.status {
            Ok(self.data)
        } else {
            Err(self.message_or(default_message))
        }
    }
}

/// Envelope for endpoints that never carry a payload.
pub type Ack = Envelope<serde_json::Value>;
