use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the task list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Positive identifier, assigned at creation
    pub id: u64,

    /// Task description
    pub text: String,

    /// Whether the task is done
    pub completed: bool,

    /// Creation timestamp, never changed after creation
    pub created_at: String,
}

/// Partial update for a task.
///
/// A `None` field is left untouched; `Some` replaces the current value, an
/// empty string included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskPatch {
    /// New completion state
    #[serde(default)]
    pub completed: Option<bool>,

    /// New text, trimmed when applied
    #[serde(default)]
    pub text: Option<String>,
}

impl Task {
    /// Create a new open task stamped with the current time.
    ///
    /// The text is trimmed but not validated; callers reject blank text.
    pub fn new(id: u64, text: &str) -> Self {
        Self {
            id,
            text: text.trim().to_string(),
            completed: false,
            created_at: now_timestamp(),
        }
    }

    /// Apply the fields present in `patch`
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(text) = &patch.text {
            self.text = text.trim().to_string();
        }
    }
}

impl TaskPatch {
    /// Patch that only sets the completion state
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            text: None,
        }
    }

    /// Patch that only replaces the text
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            completed: None,
            text: Some(text.into()),
        }
    }
}

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
