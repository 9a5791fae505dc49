//! # Quillpad Infrastructure
//!
//! Concrete implementations of the ports defined in `quillpad-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No network, in-memory backend only
//! - `http` - reqwest-backed client for the blog REST API

pub mod api;
pub mod files;
pub mod session;

// Re-exports - In-Memory
pub use api::InMemoryBlogApi;
pub use session::{FileSessionStore, InMemorySessionStore};

// Re-exports - HTTP
#[cfg(feature = "http")]
pub use api::{HttpBlogApi, HttpConfig};
