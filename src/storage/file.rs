//! JSON file backend

use crate::storage::{decode, encode, StorageBackend};
use crate::task::Task;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Storage backend holding the whole collection in a single JSON file
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Create a backend for the file at `path`; the file need not exist yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "todos.json".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", name, Uuid::new_v4().simple()))
    }
}

#[async_trait]
impl StorageBackend for FileBackend {
    async fn load(&self) -> crate::Result<Vec<Task>> {
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No data file at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(crate::TaskListError::StorageError(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        decode(&data)
    }

    async fn save(&self, tasks: &[Task]) -> crate::Result<()> {
        let data = encode(tasks)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                crate::TaskListError::StorageError(format!(
                    "failed to create {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        // Write to a sibling temp file and rename it over the target
        let tmp = self.temp_path();
        if let Err(e) = tokio::fs::write(&tmp, &data).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(crate::TaskListError::StorageError(format!(
                "failed to write {}: {}",
                tmp.display(),
                e
            )));
        }
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(crate::TaskListError::StorageError(format!(
                "failed to rename {} -> {}: {}",
                tmp.display(),
                self.path.display(),
                e
            )));
        }

        debug!("Saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }
}
