//! Task List RS - a single-user task list service
//!
//! This library provides the task store behind a small JSON REST API: loading
//! the whole task collection from storage, applying one mutation and writing
//! the collection back.

/// HTTP routes and handlers
pub mod api;
/// Configuration management for the task list service
pub mod config;
/// Storage backend implementations
pub mod storage;
/// Load-mutate-save task store
pub mod store;
/// Task definitions and partial updates
pub mod task;

pub use config::Config;
pub use store::TaskStore;
pub use task::{Task, TaskPatch};

use thiserror::Error;

/// Result type for task list operations
pub type Result<T> = std::result::Result<T, TaskListError>;

/// Error types for the task list service
#[derive(Error, Debug)]
pub enum TaskListError {
    /// Required input was missing or blank
    #[error("Validation error: {0}")]
    Validation(String),

    /// Task with the specified ID was not found
    #[error("Task not found: {0}")]
    TaskNotFound(u64),

    /// Persisted data could not be decoded
    #[error("Storage corrupt: {0}")]
    StorageCorrupt(String),

    /// Storage backend error occurred
    #[error("Storage error: {0}")]
    StorageError(String),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
