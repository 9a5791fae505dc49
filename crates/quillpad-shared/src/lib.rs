//! # Quillpad Shared
//!
//! Wire types exchanged with the blog backend.
//! Kept free of client logic so any transport can reuse them.

pub mod dto;
pub mod response;

pub use response::Envelope;
