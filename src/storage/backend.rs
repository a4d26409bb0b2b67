//! Backend

use crate::storage::{decode, encode, StorageBackend};
use crate::task::Task;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory storage backend.
///
/// Keeps the encoded bytes rather than the decoded tasks so it behaves like
/// the file backend, corrupt content included.
#[derive(Clone)]
pub struct MemoryBackend {
    storage: Arc<RwLock<Option<Vec<u8>>>>,
}

impl MemoryBackend {
    /// Create an empty in-memory storage backend
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a backend that already holds `data`
    pub fn with_contents(data: impl Into<Vec<u8>>) -> Self {
        Self {
            storage: Arc::new(RwLock::new(Some(data.into()))),
        }
    }

    /// Raw persisted bytes, if anything has been stored
    pub async fn contents(&self) -> Option<Vec<u8>> {
        self.storage.read().await.clone()
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    async fn load(&self) -> crate::Result<Vec<Task>> {
        let storage = self.storage.read().await;
        match storage.as_deref() {
            Some(data) => decode(data),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, tasks: &[Task]) -> crate::Result<()> {
        let data = encode(tasks)?;
        let mut storage = self.storage.write().await;
        *storage = Some(data);
        Ok(())
    }
}
