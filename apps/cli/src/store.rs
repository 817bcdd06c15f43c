//! JSON file holding the saved session.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use quiz_core::{SessionState, SessionStore, StoreError};

/// File name of the session record in the home directory.
pub const STATE_FILE_NAME: &str = ".js-questions-cli.json";

/// Per-user location of the session record.
pub fn default_state_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(STATE_FILE_NAME)
}

/// Session store backed by a single JSON file, written and deleted whole.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<Option<SessionState>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    fn write(&self, state: &SessionState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content =
            serde_json::to_string(state).map_err(|e| StoreError::Encode(e.to_string()))?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn remove(&self) -> Result<bool, StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
