//! Index metadata.

use serde::Deserialize;

/// One entry of the application's index listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexRes {
    /// Index name.
    pub name: String,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update time.
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Number of records.
    #[serde(default)]
    pub entries: u64,
    /// Size of the records in bytes.
    #[serde(default)]
    pub data_size: u64,
    /// Size of the index on disk in bytes.
    #[serde(default)]
    pub file_size: u64,
    /// Duration of the last build in seconds.
    #[serde(default)]
    pub last_build_time_s: u64,
    /// Number of tasks not yet applied.
    #[serde(default)]
    pub number_of_pending_tasks: u64,
    /// Whether the index has pending tasks.
    #[serde(default)]
    pub pending_task: bool,
    /// Primary index, set on replicas.
    #[serde(default)]
    pub primary: Option<String>,
    /// Replica indexes.
    #[serde(default)]
    pub replicas: Option<Vec<String>>,
}

/// Wrapper of the index listing response.
#[derive(Debug, Deserialize)]
pub(crate) struct ListIndexesRes {
    #[serde(default)]
    pub items: Vec<IndexRes>,
}
