use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use super::dto::{ClearCompletedResponse, CreateTaskRequest, MessageResponse};
use super::error::ApiError;
use crate::storage::StorageBackend;
use crate::store::TaskStore;
use crate::task::{Task, TaskPatch};

/// Shared handler dependencies
pub struct AppState<B: StorageBackend> {
    /// The task store every request goes through
    pub store: Arc<TaskStore<B>>,
}

impl<B: StorageBackend> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

/// `GET /api/todos`
pub async fn list_tasks<B: StorageBackend + 'static>(
    State(state): State<AppState<B>>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.store.list().await?;
    Ok(Json(tasks))
}

/// `POST /api/todos`
///
/// Responds 201 with the created task, or 400 when the body is missing, is
/// not JSON, or has no non-blank `text`.
pub async fn create_task<B: StorageBackend + 'static>(
    State(state): State<AppState<B>>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!("Rejected create body: {}", rejection.body_text());
            CreateTaskRequest::default()
        }
    };

    let text = request
        .text
        .ok_or_else(|| ApiError::bad_request("Todo text is required"))?;
    let task = state.store.create(&text).await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// `PUT /api/todos/{id}`
pub async fn update_task<B: StorageBackend + 'static>(
    State(state): State<AppState<B>>,
    Path(id): Path<u64>,
    payload: Result<Json<TaskPatch>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Json(patch) = payload.map_err(|rejection| {
        ApiError::bad_request(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let task = state.store.update(id, &patch).await?;
    Ok(Json(task))
}

/// `DELETE /api/todos/{id}`
pub async fn delete_task<B: StorageBackend + 'static>(
    State(state): State<AppState<B>>,
    Path(id): Path<u64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.delete(id).await?;
    Ok(Json(MessageResponse::new("Todo deleted successfully")))
}

/// `DELETE /api/todos/clear-completed`
pub async fn clear_completed<B: StorageBackend + 'static>(
    State(state): State<AppState<B>>,
) -> Result<Json<ClearCompletedResponse>, ApiError> {
    let removed = state.store.clear_completed().await?;
    Ok(Json(ClearCompletedResponse {
        message: "Completed todos cleared".to_string(),
        removed,
    }))
}
