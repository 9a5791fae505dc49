//! # Quillpad Core
//!
//! Client-side logic for the blog admin: domain types, the ports the
//! infrastructure layer implements, and the post editor controller.
//! This crate performs no I/O of its own.

pub mod admin;
pub mod domain;
pub mod editor;
pub mod error;
pub mod ports;
pub mod posts;
pub mod search;
pub mod session;

#[cfg(test)]
mod testing;

pub use admin::AdminPanel;
pub use editor::PostEditor;
pub use error::{ClientError, UploadError};
pub use session::Credentials;
