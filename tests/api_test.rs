use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use task_list_rs::api::dto::CreateTaskRequest;
use task_list_rs::api::handlers::{
    clear_completed, create_task, delete_task, list_tasks, update_task,
};
use task_list_rs::api::{self, ApiError, AppState};
use task_list_rs::storage::backend::MemoryBackend;
use task_list_rs::task::TaskPatch;
use task_list_rs::{TaskListError, TaskStore};

fn state() -> AppState<MemoryBackend> {
    AppState {
        store: Arc::new(TaskStore::new(MemoryBackend::new())),
    }
}

fn create_body(text: Option<&str>) -> CreateTaskRequest {
    CreateTaskRequest {
        text: text.map(str::to_string),
    }
}

#[tokio::test]
async fn test_create_returns_created() {
    let state = state();

    let body = create_body(Some(" milk "));
    let (status, Json(task)) = create_task(State(state), Ok(Json(body))).await.unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(task.id, 1);
    assert_eq!(task.text, "milk");
    assert!(!task.completed);
}

#[tokio::test]
async fn test_create_without_text_is_bad_request() {
    let state = state();

    let error = create_task(State(state.clone()), Ok(Json(create_body(None))))
        .await
        .unwrap_err();
    assert_eq!(error.status, StatusCode::BAD_REQUEST);
    assert_eq!(error.message, "Todo text is required");

    let error = create_task(State(state.clone()), Ok(Json(create_body(Some("  ")))))
        .await
        .unwrap_err();
    assert_eq!(error.status, StatusCode::BAD_REQUEST);

    let Json(tasks) = list_tasks(State(state)).await.unwrap();
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_list_returns_tasks_in_order() {
    let state = state();
    for text in ["first", "second", "third"] {
        create_task(State(state.clone()), Ok(Json(create_body(Some(text)))))
            .await
            .unwrap();
    }

    let Json(tasks) = list_tasks(State(state)).await.unwrap();
    let texts: Vec<&str> = tasks.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn test_update_task() {
    let state = state();
    create_task(State(state.clone()), Ok(Json(create_body(Some("toggle me")))))
        .await
        .unwrap();

    let Json(task) = update_task(
        State(state.clone()),
        Path(1),
        Ok(Json(TaskPatch::completed(true))),
    )
    .await
    .unwrap();

    assert!(task.completed);
    assert_eq!(task.text, "toggle me");
}

#[tokio::test]
async fn test_update_unknown_task_is_not_found() {
    let error = update_task(State(state()), Path(999), Ok(Json(TaskPatch::completed(true))))
        .await
        .unwrap_err();

    assert_eq!(error.status, StatusCode::NOT_FOUND);
    assert_eq!(error.message, "Todo not found");
}

#[tokio::test]
async fn test_delete_task() {
    let state = state();
    create_task(State(state.clone()), Ok(Json(create_body(Some("remove me")))))
        .await
        .unwrap();

    let Json(response) = delete_task(State(state.clone()), Path(1)).await.unwrap();
    assert_eq!(response.message, "Todo deleted successfully");

    let error = delete_task(State(state), Path(1)).await.unwrap_err();
    assert_eq!(error.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_clear_completed_reports_removed_ids() {
    let state = state();
    for text in ["a", "b", "c"] {
        create_task(State(state.clone()), Ok(Json(create_body(Some(text)))))
            .await
            .unwrap();
    }
    update_task(State(state.clone()), Path(2), Ok(Json(TaskPatch::completed(true))))
        .await
        .unwrap();

    let Json(response) = clear_completed(State(state.clone())).await.unwrap();
    assert_eq!(response.message, "Completed todos cleared");
    assert_eq!(response.removed, vec![2]);

    let Json(tasks) = list_tasks(State(state)).await.unwrap();
    let ids: Vec<u64> = tasks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_error_status_mapping() {
    let error = ApiError::from(TaskListError::Validation("Todo text is required".to_string()));
    assert_eq!(error.status, StatusCode::BAD_REQUEST);

    let error = ApiError::from(TaskListError::TaskNotFound(3));
    assert_eq!(error.status, StatusCode::NOT_FOUND);

    let error = ApiError::from(TaskListError::StorageError("disk full".to_string()));
    assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_error_into_response_status() {
    let response = ApiError::not_found("Todo not found").into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_router_builds() {
    let store = Arc::new(TaskStore::new(MemoryBackend::new()));
    let _router = api::router(store);
}
