/// In-memory backend
pub mod backend;
/// JSON file backend
pub mod file;

use crate::task::Task;
use async_trait::async_trait;

/// Trait for storage backend implementations.
///
/// A backend persists the whole task collection as one record and rewrites it
/// wholesale on every save.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Load the full collection.
    ///
    /// Returns an empty collection when nothing has been persisted yet, and
    /// [`crate::TaskListError::StorageCorrupt`] when the persisted content
    /// cannot be decoded.
    async fn load(&self) -> crate::Result<Vec<Task>>;

    /// Overwrite the persisted collection
    async fn save(&self, tasks: &[Task]) -> crate::Result<()>;
}

/// Encode a collection as pretty-printed JSON
pub fn encode(tasks: &[Task]) -> crate::Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(tasks)?)
}

/// Decode a collection previously written by [`encode`]
pub fn decode(data: &[u8]) -> crate::Result<Vec<Task>> {
    serde_json::from_slice(data).map_err(|e| crate::TaskListError::StorageCorrupt(e.to_string()))
}
