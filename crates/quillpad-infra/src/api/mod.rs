//! Backend API implementations - HTTP and an in-memory stand-in.

mod memory;

#[cfg(feature = "http")]
mod http;


pub use memory::InMemoryBlogApi;

#[cfg(feature = "http")]
pub use http::{HttpBlogApi, HttpConfig};
