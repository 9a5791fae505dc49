//! Post editor controller.
//!
//! Owns the draft of the post being created or edited and keeps it in step
//! with the text input the content is typed into. Pasted or dropped images
//! are uploaded one at a time and linked into the draft at the caret.

mod buffer;
mod caret;
mod transfer;
mod upload;

use std::sync::Arc;

pub use buffer::BufferInput;
pub use caret::splice;
pub use transfer::{ClipboardItem, DropEvent, PasteEvent, TransferOutcome};
pub use upload::{UPLOAD_FAILED, image_markdown, resolve_upload_url};

use crate::domain::{DraftPhase, EditForm, Origin, Post};
use crate::error::{ClientError, UploadError};
use crate::ports::{BlogApi, ImageFile, Selection, TextInput};
use crate::session::Credentials;

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved {
    pub origin: Origin,
    pub message: Option<String>,
}

/// Editor for a single post draft, bound to one text input.
pub struct PostEditor<I> {
    api: Arc<dyn BlogApi>,
    input: I,
    form: EditForm,
    phase: DraftPhase,
    editing: Option<Post>,
    /// Caret to restore once the inserted content has been rendered.
    pending_caret: Option<usize>,
}

impl<I: TextInput> PostEditor<I> {
    pub fn new(api: Arc<dyn BlogApi>, input: I) -> Self {
        Self {
            api,
            input,
            form: EditForm::default(),
            phase: DraftPhase::Closed,
            editing: None,
            pending_caret: None,
        }
    }

    pub fn phase(&self) -> DraftPhase {
        self.phase
    }

    pub fn form(&self) -> &EditForm {
        &self.form
    }

    /// The saved post being edited; `None` while creating.
    pub fn editing(&self) -> Option<&Post> {
        self.editing.as_ref()
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Start a new post, dated today.
    pub fn open_create(&mut self) {
        self.open(EditForm::for_today(), None, DraftPhase::Creating);
    }

    /// Start editing `post` with its current values.
    pub fn open_edit(&mut self, post: Post) {
        let form = EditForm::from_post(&post);
        self.open(form, Some(post), DraftPhase::Editing);
    }

    fn open(&mut self, form: EditForm, editing: Option<Post>, phase: DraftPhase) {
        self.form = form;
        self.editing = editing;
        self.phase = phase;
        self.pending_caret = None;
        self.input.set_value(&self.form.content);
        tracing::debug!(?phase, "Draft opened");
    }

    /// Dismiss the dialog and discard the draft.
    pub fn close(&mut self) {
        self.form = EditForm::default();
        self.editing = None;
        self.phase = DraftPhase::Closed;
        self.pending_caret = None;
        self.input.set_value("");
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.form.date = date.into();
    }

    /// Content typed by the user.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.form.content = content.into();
        self.pending_caret = None;
        self.input.set_value(&self.form.content);
    }

    /// Replace the input's selection with `text`.
    ///
    /// Falls back to the end of the content when the input reports no
    /// selection. Returns the caret offset that [`after_render`] restores.
    ///
    /// [`after_render`]: PostEditor::after_render
    pub fn insert_at_cursor(&mut self, text: &str) -> usize {
        // A restore still queued from an earlier insertion must land first,
        // otherwise the selection read below is stale.
        self.after_render();

        let len = self.form.content.chars().count();
        let selection = self
            .input
            .selection()
            .unwrap_or(Selection::collapsed(len));
        let (next, caret) = splice(&self.form.content, selection, text);

        self.form.content = next;
        self.input.set_value(&self.form.content);
        self.pending_caret = Some(caret);
        caret
    }

    /// Post-render hook: collapse the selection to the queued caret and focus.
    ///
    /// Returns the restored caret, or `None` when nothing was queued.
    pub fn after_render(&mut self) -> Option<usize> {
        let caret = self.pending_caret.take()?;
        self.input.set_selection(Selection::collapsed(caret));
        self.input.focus();
        Some(caret)
    }

    /// Upload one image and return its absolute URL.
    pub async fn upload_image(
        &self,
        creds: &Credentials,
        file: &ImageFile,
    ) -> Result<String, UploadError> {
        tracing::debug!(file = %file.name, size = file.bytes.len(), "Uploading image");

        let path = self
            .api
            .upload_image(creds, file)
            .await
            .map_err(|e| match e {
                ClientError::Api(message) if message.is_empty() => {
                    ClientError::Api(UPLOAD_FAILED.to_string())
                }
                other => other,
            })
            .map_err(UploadError::new)?;

        Ok(resolve_upload_url(self.api.origin(), &path))
    }

    /// Save the draft: add when creating, update when editing.
    ///
    /// On success the editor closes. On failure it returns to the phase the
    /// submission started from so the user can retry.
    pub async fn submit(&mut self, creds: &Credentials) -> Result<Saved, ClientError> {
        let origin = match self.phase {
            DraftPhase::Creating => Origin::Creating,
            DraftPhase::Editing => Origin::Editing,
            DraftPhase::Closed => {
                return Err(ClientError::Validation("no draft is open".to_string()));
            }
            DraftPhase::Submitting { .. } => {
                return Err(ClientError::Validation(
                    "a save is already in progress".to_string(),
                ));
            }
        };

        self.phase = DraftPhase::Submitting { origin };

        let result = match (origin, &self.editing) {
            (Origin::Creating, _) => self.api.add_post(creds, self.form.to_post(0)).await,
            (Origin::Editing, Some(post)) => {
                self.api
                    .update_post(creds, self.form.to_post(post.id))
                    .await
            }
            (Origin::Editing, None) => Err(ClientError::Validation(
                "no post selected for editing".to_string(),
            )),
        };

        match result {
            Ok(message) => {
                tracing::info!(?origin, title = %self.form.title, "Draft saved");
                self.close();
                Ok(Saved { origin, message })
            }
            Err(e) => {
                tracing::warn!(?origin, error = %e, "Draft save failed");
                self.phase = origin.into();
                Err(e)
            }
        }
    }
}
