//! Batched write operations.

use super::Object;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The action of a batch operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BatchAction {
    /// Add a record, letting the service assign the object ID.
    AddObject,
    /// Add or replace a record by its `objectID`.
    UpdateObject,
    /// Partially update a record, creating it if missing.
    PartialUpdateObject,
    /// Partially update a record, skipping missing records.
    PartialUpdateObjectNoCreate,
    /// Delete a record by its `objectID`.
    DeleteObject,
    /// Remove every record from the index.
    Clear,
}

/// One operation of an index-scoped batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchOperation {
    /// What to do.
    pub action: BatchAction,
    /// The record payload; `None` for [`BatchAction::Clear`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Object>,
}

impl BatchOperation {
    /// Creates an operation carrying a record payload.
    #[must_use]
    pub const fn new(action: BatchAction, body: Object) -> Self {
        Self {
            action,
            body: Some(body),
        }
    }

    /// Creates a clear operation.
    #[must_use]
    pub const fn clear() -> Self {
        Self {
            action: BatchAction::Clear,
            body: None,
        }
    }
}

/// One operation of a multi-index batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchOperationIndexed {
    /// Index the operation applies to.
    #[serde(rename = "indexName")]
    pub index_name: String,
    /// The operation itself.
    #[serde(flatten)]
    pub operation: BatchOperation,
}

/// Response of an index-scoped batch.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRes {
    /// Object IDs touched by the batch, in operation order.
    #[serde(default, rename = "objectIDs")]
    pub object_ids: Vec<String>,
    /// Task performing the batch.
    #[serde(rename = "taskID")]
    pub task_id: u64,
}

/// Response of a multi-index batch.
#[derive(Debug, Clone, Deserialize)]
pub struct MultipleBatchRes {
    /// Object IDs touched by the batch, in operation order.
    #[serde(default, rename = "objectIDs")]
    pub object_ids: Vec<String>,
    /// Task per index.
    #[serde(rename = "taskID")]
    pub task_id: HashMap<String, u64>,
}
