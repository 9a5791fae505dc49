//! Domain entities - the objects the client edits and displays.

mod draft;
mod post;

pub use draft::{DraftPhase, EditForm, Origin};
pub use post::{Post, PostId};
