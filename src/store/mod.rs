//! Task store

use crate::config::IdStrategy;
use crate::storage::StorageBackend;
use crate::task::{Task, TaskPatch};
use crate::TaskListError;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Authoritative load-mutate-save cycle over the persisted task collection.
///
/// Nothing is cached between operations: each one reloads the collection from
/// the backend and, if it mutates, writes the whole collection back. The
/// internal lock keeps concurrent requests from interleaving their cycles.
pub struct TaskStore<B: StorageBackend> {
    backend: B,
    id_strategy: IdStrategy,
    lock: Mutex<()>,
}

impl<B: StorageBackend> TaskStore<B> {
    /// Create a store over `backend` using the default id strategy
    pub fn new(backend: B) -> Self {
        Self::with_id_strategy(backend, IdStrategy::default())
    }

    /// Create a store with a specific id strategy
    pub fn with_id_strategy(backend: B, id_strategy: IdStrategy) -> Self {
        Self {
            backend,
            id_strategy,
            lock: Mutex::new(()),
        }
    }

    /// Id strategy used by [`TaskStore::create`]
    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }

    /// Load the collection, treating missing or corrupt storage as empty
    pub async fn load(&self) -> crate::Result<Vec<Task>> {
        match self.backend.load().await {
            Ok(tasks) => Ok(tasks),
            Err(TaskListError::StorageCorrupt(reason)) => {
                warn!("Stored tasks are unreadable, starting empty: {}", reason);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Overwrite the persisted collection
    pub async fn save(&self, tasks: &[Task]) -> crate::Result<()> {
        self.backend.save(tasks).await
    }

    /// All tasks in creation order
    pub async fn list(&self) -> crate::Result<Vec<Task>> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// Create and persist a new task
    pub async fn create(&self, text: &str) -> crate::Result<Task> {
        if text.trim().is_empty() {
            return Err(TaskListError::Validation("Todo text is required".to_string()));
        }

        let _guard = self.lock.lock().await;
        let mut tasks = self.load().await?;

        let task = Task::new(self.id_strategy.next_id(&tasks)?, text);
        tasks.push(task.clone());
        self.save(&tasks).await?;

        info!("Task {} created", task.id);
        Ok(task)
    }

    /// Apply `patch` to the first task with `id` and persist
    pub async fn update(&self, id: u64, patch: &TaskPatch) -> crate::Result<Task> {
        let _guard = self.lock.lock().await;
        let mut tasks = self.load().await?;

        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskListError::TaskNotFound(id))?;
        task.apply(patch);
        let updated = task.clone();

        self.save(&tasks).await?;

        debug!("Task {} updated", id);
        Ok(updated)
    }

    /// Remove the first task with `id` and persist
    pub async fn delete(&self, id: u64) -> crate::Result<()> {
        let _guard = self.lock.lock().await;
        let mut tasks = self.load().await?;

        let index = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskListError::TaskNotFound(id))?;
        tasks.remove(index);

        self.save(&tasks).await?;

        info!("Task {} deleted", id);
        Ok(())
    }

    /// Remove every completed task, returning the removed ids in order
    pub async fn clear_completed(&self) -> crate::Result<Vec<u64>> {
        let _guard = self.lock.lock().await;
        let tasks = self.load().await?;

        let (removed, active): (Vec<Task>, Vec<Task>) =
            tasks.into_iter().partition(|t| t.completed);
        self.save(&active).await?;

        let removed: Vec<u64> = removed.into_iter().map(|t| t.id).collect();
        info!("Cleared {} completed tasks", removed.len());
        Ok(removed)
    }
}
