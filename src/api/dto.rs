use serde::{Deserialize, Serialize};

/// Body of `POST /api/todos`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTaskRequest {
    /// Task text; missing and blank are both rejected
    #[serde(default)]
    pub text: Option<String>,
}

/// Confirmation body for deletions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// Body returned by `DELETE /api/todos/clear-completed`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearCompletedResponse {
    /// Human-readable confirmation
    pub message: String,
    /// Ids of the removed tasks
    pub removed: Vec<u64>,
}

impl MessageResponse {
    /// Create a message response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
