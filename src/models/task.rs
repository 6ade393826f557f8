//! Asynchronous task responses.
//!
//! Every write returns a task ID; the write is effective once the task
//! reaches the `published` state (see `Index::wait_task`).

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Response of an update-style write (settings, move, copy, clear, ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRes {
    /// Task performing the write.
    #[serde(rename = "taskID")]
    pub task_id: u64,
    /// Update time.
    pub updated_at: DateTime<Utc>,
}

/// Response of a delete-style write.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTaskRes {
    /// Task performing the deletion.
    #[serde(rename = "taskID")]
    pub task_id: u64,
    /// Deletion time.
    pub deleted_at: DateTime<Utc>,
}

/// Response of an object creation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateObjectRes {
    /// The (possibly server-assigned) object ID.
    #[serde(rename = "objectID")]
    pub object_id: String,
    /// Task performing the write.
    #[serde(rename = "taskID")]
    pub task_id: u64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Response of an object replacement or partial update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateObjectRes {
    /// The updated object ID.
    #[serde(rename = "objectID")]
    pub object_id: String,
    /// Task performing the write.
    #[serde(rename = "taskID")]
    pub task_id: u64,
    /// Update time.
    pub updated_at: DateTime<Utc>,
}

/// Status of a task.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatusRes {
    /// `published` once the task has been applied, `notPublished` before.
    pub status: String,
    /// Whether the index still has pending tasks.
    #[serde(default)]
    pub pending_task: bool,
}

impl TaskStatusRes {
    /// Returns `true` once the task has been applied.
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.status == "published"
    }
}
