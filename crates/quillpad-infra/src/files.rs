//! Reading image files from disk into [`ImageFile`]s.

use std::path::Path;

use quillpad_core::ClientError;
use quillpad_core::ports::ImageFile;

/// Guess a MIME type from the file extension.
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("avif") => "image/avif",
        _ => "application/octet-stream",
    }
}

pub async fn load_image(path: &Path) -> Result<ImageFile, ClientError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ClientError::Validation(format!("cannot read {}: {e}", path.display())))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    Ok(ImageFile::new(name, mime_for(path), bytes))
}

/// Load every path in order, stopping at the first unreadable one.
pub async fn load_images<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<ImageFile>, ClientError> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        files.push(load_image(path.as_ref()).await?);
    }
    Ok(files)
}
