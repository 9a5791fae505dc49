//! File-backed token store - the CLI's counterpart of browser local storage.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use quillpad_core::ports::{SessionError, SessionStore};

/// Stores the token as the whole content of a single file.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/quillpad/token`, used when `QUILLPAD_TOKEN_FILE` is unset.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("quillpad")
            .join("token")
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<String>, SessionError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                let token = String::from_utf8(bytes)
                    .map_err(|e| SessionError::Corrupt(e.to_string()))?;
                let token = token.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::Io(format!("{}: {e}", self.path.display()))),
        }
    }

    async fn save(&self, token: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| SessionError::Io(format!("{}: {e}", parent.display())))?;
        }
        tokio::fs::write(&self.path, token)
            .await
            .map_err(|e| SessionError::Io(format!("{}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            if let Err(e) = tokio::fs::set_permissions(&self.path, perms).await {
                tracing::warn!(path = %self.path.display(), error = %e, "Could not restrict token file permissions");
            }
        }

        tracing::debug!(path = %self.path.display(), "Token saved");
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Io(format!("{}: {e}", self.path.display()))),
        }
    }
}
