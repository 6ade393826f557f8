//! API keys and ACLs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An API key as reported by the service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    /// The key value.
    #[serde(default)]
    pub value: String,
    /// Permissions granted to the key (`search`, `browse`, `addObject`, ...).
    #[serde(default)]
    pub acl: Vec<String>,
    /// Creation time as a Unix timestamp.
    #[serde(default)]
    pub created_at: Option<i64>,
    /// Remaining validity in seconds, 0 for unlimited.
    #[serde(default)]
    pub validity: Option<u64>,
    /// Rate limit per IP and hour.
    #[serde(default, rename = "maxQueriesPerIPPerHour")]
    pub max_queries_per_ip_per_hour: Option<u64>,
    /// Maximum hits a query with this key can retrieve.
    #[serde(default)]
    pub max_hits_per_query: Option<u64>,
    /// Indexes the key is restricted to.
    #[serde(default)]
    pub indexes: Option<Vec<String>>,
    /// HTTP referers the key is restricted to.
    #[serde(default)]
    pub referers: Option<Vec<String>>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Query parameters forced on every call with this key.
    #[serde(default)]
    pub query_parameters: Option<String>,
}

/// Parameters for creating or updating an API key.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyParams {
    /// Permissions granted to the key.
    pub acl: Vec<String>,
    /// Validity in seconds, 0 for unlimited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity: Option<u64>,
    /// Rate limit per IP and hour.
    #[serde(
        rename = "maxQueriesPerIPPerHour",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_queries_per_ip_per_hour: Option<u64>,
    /// Maximum hits a query with this key can retrieve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_hits_per_query: Option<u64>,
    /// Indexes the key is restricted to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexes: Option<Vec<String>>,
    /// HTTP referers the key is restricted to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referers: Option<Vec<String>>,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Query parameters forced on every call with this key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_parameters: Option<String>,
}

impl KeyParams {
    /// Creates parameters granting the given permissions.
    #[must_use]
    pub fn with_acl(acl: Vec<String>) -> Self {
        Self {
            acl,
            ..Self::default()
        }
    }

    /// Sets the validity in seconds.
    #[must_use]
    pub const fn with_validity(mut self, seconds: u64) -> Self {
        self.validity = Some(seconds);
        self
    }

    /// Sets the per-IP hourly rate limit.
    #[must_use]
    pub const fn with_max_queries_per_ip_per_hour(mut self, max: u64) -> Self {
        self.max_queries_per_ip_per_hour = Some(max);
        self
    }

    /// Sets the maximum hits per query.
    #[must_use]
    pub const fn with_max_hits_per_query(mut self, max: u64) -> Self {
        self.max_hits_per_query = Some(max);
        self
    }

    /// Restricts the key to the given indexes.
    #[must_use]
    pub fn with_indexes(mut self, indexes: Vec<String>) -> Self {
        self.indexes = Some(indexes);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Response of a key creation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddKeyRes {
    /// The new key value.
    pub key: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// Response of a key update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKeyRes {
    /// The updated key value.
    pub key: String,
    /// Update time.
    pub updated_at: DateTime<Utc>,
}

/// Response of a key (or synonym-free resource) deletion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRes {
    /// Deletion time.
    pub deleted_at: DateTime<Utc>,
}

/// Wrapper of key-listing responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ListKeysRes {
    #[serde(default)]
    pub keys: Vec<ApiKey>,
}
