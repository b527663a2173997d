//! Persisted Session Cookies
//!
//! The backend keeps the admin session in cookies. Between CLI invocations
//! they are stored as a single `Cookie` header value in a small file.

use std::path::{Path, PathBuf};

use crate::error::ApiResult;

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved cookie header, if a non-empty session file exists
    pub fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let content = content.trim();
        if content.is_empty() {
            None
        } else {
            Some(content.to_string())
        }
    }

    pub fn save(&self, cookie_header: &str) -> ApiResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, cookie_header)?;
        tracing::debug!("Saved session to {:?}", self.path);
        Ok(())
    }

    /// Remove the session file; a missing file is not an error
    pub fn clear(&self) -> ApiResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_load_clear() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested").join("session"));

        assert!(store.load().is_none());
        store.save("session=abc").unwrap();
        assert_eq!(store.load().as_deref(), Some("session=abc"));

        store.clear().unwrap();
        assert!(store.load().is_none());
        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_blank_file_is_no_session() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session");
        std::fs::write(&path, "  \n").unwrap();
        assert!(SessionStore::new(path).load().is_none());
    }
}
