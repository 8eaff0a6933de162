//! Session token kept in a file between runs.

use docqa_core::{StoreError, TokenStore};
use std::fs;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

/// [`TokenStore`] backed by a single file holding the raw token.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Some(content.trim().to_string()).filter(|t| !t.is_empty()),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Unreadable token file");
                None
            }
        }
    }

    fn set(&self, token: &str) -> Result<(), StoreError> {
        let failed = |e: std::io::Error| StoreError(format!("{}: {}", self.path.display(), e));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(failed)?;
        }
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path).map_err(failed)?;

        // open() keeps the mode of an existing file
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(failed)?;
        }
        file.write_all(token.as_bytes()).map_err(failed)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError(format!("{}: {}", self.path.display(), e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docqa_core::Session;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_means_no_token() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_set_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/token");
        let store = FileTokenStore::new(&path);

        store.set("T").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "T");
        assert_eq!(store.get().as_deref(), Some("T"));
    }

    #[test]
    fn test_token_survives_new_store_instance() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token");

        FileTokenStore::new(&path).set("persisted").unwrap();
        let session = Session::new(FileTokenStore::new(&path));
        assert_eq!(session.token().as_deref(), Some("persisted"));
    }

    #[test]
    fn test_clear_removes_file_and_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token");
        let store = FileTokenStore::new(&path);

        store.set("T").unwrap();
        store.clear().unwrap();
        assert!(!path.exists());
        store.clear().unwrap();
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, "abc\n").unwrap();
        assert_eq!(FileTokenStore::new(&path).get().as_deref(), Some("abc"));
    }

    #[cfg(unix)]
    #[test]
    fn test_token_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token");
        FileTokenStore::new(&path).set("T").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_token_file_is_narrowed_and_truncated() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, "a-much-longer-old-token").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let store = FileTokenStore::new(&path);
        store.set("T").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(store.get().as_deref(), Some("T"));
    }
}
