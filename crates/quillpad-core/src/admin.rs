//! Admin panel - post list plus the editor dialog.
//!
//! Every operation catches its own failure, reports it through the
//! [`Notifier`], and hands it back to the caller. Nothing here is fatal.

use std::sync::Arc;

use crate::domain::{Origin, Post, PostId};
use crate::editor::{DropEvent, PasteEvent, PostEditor, TransferOutcome};
use crate::error::{ClientError, UploadError};
use crate::ports::{BlogApi, Notice, Notifier, SessionStore, TextInput};
use crate::session::{self, Credentials};

pub struct AdminPanel<I> {
    api: Arc<dyn BlogApi>,
    notifier: Arc<dyn Notifier>,
    creds: Credentials,
    posts: Vec<Post>,
    editor: PostEditor<I>,
}

impl<I: TextInput> AdminPanel<I> {
    /// Open the panel for the stored session and load the post list.
    ///
    /// Fails with [`ClientError::Unauthenticated`] when no token is stored.
    /// A failed initial load is notified but still yields a usable panel.
    pub async fn open(
        api: Arc<dyn BlogApi>,
        store: &dyn SessionStore,
        notifier: Arc<dyn Notifier>,
        input: I,
    ) -> Result<Self, ClientError> {
        let Some(creds) = session::restore(store).await? else {
            tracing::info!("No stored token, admin panel unavailable");
            return Err(ClientError::Unauthenticated);
        };

        let mut panel = Self::with_credentials(api, notifier, creds, input);
        let _ = panel.refresh().await;
        Ok(panel)
    }

    pub fn with_credentials(
        api: Arc<dyn BlogApi>,
        notifier: Arc<dyn Notifier>,
        creds: Credentials,
        input: I,
    ) -> Self {
        let editor = PostEditor::new(api.clone(), input);
        Self {
            api,
            notifier,
            creds,
            posts: Vec::new(),
            editor,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn editor(&self) -> &PostEditor<I> {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut PostEditor<I> {
        &mut self.editor
    }

    /// Reload the post list. The previous list is kept on failure.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        match self.api.get_posts(0).await {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "Posts loaded");
                self.posts = posts;
                Ok(())
            }
            Err(e) => Err(self.report("Load failed", e)),
        }
    }

    pub fn open_create(&mut self) {
        self.editor.open_create();
    }

    /// Open the editor on a post from the current list.
    pub fn open_edit(&mut self, id: PostId) -> Result<(), ClientError> {
        let Some(post) = self.posts.iter().find(|p| p.id == id).cloned() else {
            let err = ClientError::Validation(format!("post {id} is not in the list"));
            return Err(self.report("Edit failed", err));
        };
        self.editor.open_edit(post);
        Ok(())
    }

    /// Save the open draft, then refresh the list.
    pub async fn submit_draft(&mut self) -> Result<(), ClientError> {
        let failure_title = match self.editor.editing() {
            Some(_) => "Update failed",
            None => "Add failed",
        };

        let saved = match self.editor.submit(&self.creds).await {
            Ok(saved) => saved,
            Err(e) => return Err(self.report(failure_title, e)),
        };

        let title = match saved.origin {
            Origin::Creating => "Post added",
            Origin::Editing => "Post updated",
        };
        self.notifier
            .notify(Notice::success(title, saved.message.unwrap_or_default()));

        // The save went through; a failed reload is reported on its own.
        let _ = self.refresh().await;
        Ok(())
    }

    pub async fn delete(&mut self, id: PostId) -> Result<(), ClientError> {
        match self.api.delete_post(&self.creds, id).await {
            Ok(message) => {
                tracing::info!(id, "Post deleted");
                self.notifier
                    .notify(Notice::success("Post deleted", message.unwrap_or_default()));
                let _ = self.refresh().await;
                Ok(())
            }
            Err(e) => Err(self.report("Delete failed", e)),
        }
    }

    pub async fn paste(&mut self, event: &PasteEvent) -> Result<TransferOutcome, UploadError> {
        let result = self.editor.handle_paste(&self.creds, event).await;
        self.report_transfer(result)
    }

    pub async fn drop_files(&mut self, event: &DropEvent) -> Result<TransferOutcome, UploadError> {
        let result = self.editor.handle_drop(&self.creds, event).await;
        self.report_transfer(result)
    }

    fn report_transfer(
        &self,
        result: Result<TransferOutcome, UploadError>,
    ) -> Result<TransferOutcome, UploadError> {
        match &result {
            Ok(TransferOutcome::Inserted { count }) => self.notifier.notify(Notice::success(
                "Upload complete",
                format!("Inserted {count} image(s)"),
            )),
            Ok(TransferOutcome::Passthrough) => {}
            Err(e) => {
                tracing::warn!(inserted = e.inserted, error = %e, "Image upload failed");
                self.notifier
                    .notify(Notice::error("Upload failed", e.message()));
            }
        }
        result
    }

    /// End the session and drop the panel.
    pub async fn logout(self, store: &dyn SessionStore) -> Result<(), ClientError> {
        session::logout(store).await.map_err(|e| self.report("Logout failed", e))
    }

    fn report(&self, title: &str, err: ClientError) -> ClientError {
        tracing::warn!(action = title, error = %err, "Admin action failed");
        self.notifier.notify(Notice::error(title, err.to_string()));
        err
    }
}
