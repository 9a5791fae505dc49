//! Paste and drop events carrying files.

use crate::ports::{ImageFile, TextInput};
use crate::session::Credentials;
use crate::UploadError;

use super::PostEditor;
use super::upload::image_markdown;

/// One entry of a clipboard payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardItem {
    File(ImageFile),
    Text(String),
}

/// A paste into the content input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasteEvent {
    pub items: Vec<ClipboardItem>,
}

impl PasteEvent {
    pub fn new(items: Vec<ClipboardItem>) -> Self {
        Self { items }
    }

    /// The file items, in clipboard order.
    pub fn files(&self) -> Vec<ImageFile> {
        self.items
            .iter()
            .filter_map(|item| match item {
                ClipboardItem::File(file) => Some(file.clone()),
                ClipboardItem::Text(_) => None,
            })
            .collect()
    }
}

/// A drag-and-drop onto the content input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropEvent {
    pub files: Vec<ImageFile>,
}

impl DropEvent {
    pub fn new(files: Vec<ImageFile>) -> Self {
        Self { files }
    }
}

/// What the shell should do with the original event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOutcome {
    /// No files attached: let the default paste/drop happen.
    Passthrough,
    /// Default suppressed; `count` images were uploaded and inserted.
    Inserted { count: usize },
}

impl TransferOutcome {
    pub fn prevents_default(&self) -> bool {
        matches!(self, TransferOutcome::Inserted { .. })
    }
}

impl<I: TextInput> PostEditor<I> {
    pub async fn handle_paste(
        &mut self,
        creds: &Credentials,
        event: &PasteEvent,
    ) -> Result<TransferOutcome, UploadError> {
        self.insert_images(creds, &event.files()).await
    }

    pub async fn handle_drop(
        &mut self,
        creds: &Credentials,
        event: &DropEvent,
    ) -> Result<TransferOutcome, UploadError> {
        self.insert_images(creds, &event.files).await
    }

    /// Upload each file and insert its link before starting the next one.
    ///
    /// The first failure ends the batch. Links inserted before it are kept.
    /// Nothing is uploaded while no draft is open.
    async fn insert_images(
        &mut self,
        creds: &Credentials,
        files: &[ImageFile],
    ) -> Result<TransferOutcome, UploadError> {
        if files.is_empty() {
            return Ok(TransferOutcome::Passthrough);
        }
        if !self.phase.is_open() {
            tracing::debug!(files = files.len(), "No open draft, ignoring images");
            return Ok(TransferOutcome::Passthrough);
        }

        for (inserted, file) in files.iter().enumerate() {
            let url = match self.upload_image(creds, file).await {
                Ok(url) => url,
                Err(e) => {
                    tracing::warn!(
                        file = %file.name,
                        inserted,
                        remaining = files.len() - inserted,
                        error = %e,
                        "Image batch aborted"
                    );
                    return Err(e.after(inserted));
                }
            };
            self.insert_at_cursor(&image_markdown(&url));
            self.after_render();
        }

        tracing::info!(count = files.len(), "Inserted uploaded images");
        Ok(TransferOutcome::Inserted { count: files.len() })
    }
}
