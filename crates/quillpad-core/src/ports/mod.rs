//! Ports - trait definitions for everything outside the client logic.
//! Infrastructure and the presentation shell implement these.

mod api;
mod input;
mod notify;
mod session;

pub use api::{BlogApi, ImageFile, LoginGrant};
pub use input::{Selection, TextInput};
pub use notify::{Notice, NoticeLevel, Notifier};
pub use session::{SessionError, SessionStore};
