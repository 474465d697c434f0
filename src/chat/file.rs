//! JSON file mirror of the transcript.
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;

use super::Message;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl PersistenceError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// The backing file for a transcript. The whole message list is
/// rewritten on every save.
#[derive(Debug, Clone)]
pub struct HistoryFile {
    path: PathBuf,
}

impl HistoryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Reads the saved messages. A missing, unreadable, or unparseable
    /// file all come back as `None` so the caller can reseed.
    pub async fn load(&self) -> Option<Vec<Message>> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No history file at {}", self.path.display());
                return None;
            }
            Err(e) => {
                tracing::warn!("Unable to read {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<Vec<Message>>(&data) {
            Ok(messages) if messages.is_empty() => None,
            Ok(messages) => Some(messages),
            Err(e) => {
                tracing::warn!("Ignoring unparseable {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Writes the full transcript to a sibling temp file and renames it
    /// over the target so a crash mid-write never truncates history.
    pub async fn save(&self, messages: &[Message]) -> Result<(), PersistenceError> {
        let data = serde_json::to_string_pretty(messages)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| PersistenceError::io(parent, e))?;
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, data)
            .await
            .map_err(|e| PersistenceError::io(&tmp, e))?;
        if let Err(e) = fs::rename(&tmp, &self.path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(PersistenceError::io(&self.path, e));
        }

        tracing::debug!(
            "Saved {} messages to {}",
            messages.len(),
            self.path.display()
        );
        Ok(())
    }

    pub async fn erase(&self) -> Result<(), PersistenceError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PersistenceError::io(&self.path, e)),
        }
    }
}
