//! HTTP API for the task list.
//!
//! # Endpoints
//!
//! - `GET /api/todos` - list all tasks
//! - `POST /api/todos` - create a task
//! - `PUT /api/todos/{id}` - update completion and/or text
//! - `DELETE /api/todos/{id}` - delete a task
//! - `DELETE /api/todos/clear-completed` - delete every completed task

/// Request and response bodies
pub mod dto;
/// Error responses
pub mod error;
/// Route handlers
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{delete, get, put},
    Router,
};

use crate::storage::StorageBackend;
use crate::store::TaskStore;

pub use error::ApiError;
pub use handlers::AppState;

/// Build the router serving the task API
pub fn router<B: StorageBackend + 'static>(store: Arc<TaskStore<B>>) -> Router {
    let state = AppState { store };

    Router::new()
        .route(
            "/api/todos",
            get(handlers::list_tasks::<B>).post(handlers::create_task::<B>),
        )
        .route(
            "/api/todos/clear-completed",
            delete(handlers::clear_completed::<B>),
        )
        .route(
            "/api/todos/{id}",
            put(handlers::update_task::<B>).delete(handlers::delete_task::<B>),
        )
        .with_state(state)
}
