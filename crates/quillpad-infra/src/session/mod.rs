//! Session stores - where the auth token is kept between runs.

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::InMemorySessionStore;
