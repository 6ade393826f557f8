//! API log entries.

use serde::Deserialize;

/// Kind of log entries to retrieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogType {
    /// Every entry.
    #[default]
    All,
    /// Query operations only.
    Query,
    /// Build operations only.
    Build,
    /// Errors only.
    Error,
}

impl LogType {
    /// Returns the type as the API's string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Query => "query",
            Self::Build => "build",
            Self::Error => "error",
        }
    }
}

/// Filters for log retrieval.
#[derive(Debug, Clone, Default)]
pub struct LogsParams {
    /// Number of entries to retrieve.
    pub length: Option<u64>,
    /// Offset of the first entry.
    pub offset: Option<u64>,
    /// Restrict to one index.
    pub index_name: Option<String>,
    /// Kind of entries.
    pub log_type: Option<LogType>,
}

impl LogsParams {
    /// Creates empty filters (service defaults).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            length: None,
            offset: None,
            index_name: None,
            log_type: None,
        }
    }

    /// Sets the number of entries.
    #[must_use]
    pub const fn with_length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    /// Sets the offset of the first entry.
    #[must_use]
    pub const fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Restricts the entries to one index.
    #[must_use]
    pub fn with_index_name(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = Some(index_name.into());
        self
    }

    /// Sets the kind of entries.
    #[must_use]
    pub const fn with_log_type(mut self, log_type: LogType) -> Self {
        self.log_type = Some(log_type);
        self
    }

    /// Encodes the filters as URL query parameters.
    #[must_use]
    pub fn to_url_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(length) = self.length {
            params.push(("length".to_string(), length.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(index_name) = &self.index_name {
            params.push(("indexName".to_string(), index_name.clone()));
        }
        if let Some(log_type) = self.log_type {
            params.push(("type".to_string(), log_type.as_str().to_string()));
        }
        params
    }
}

/// One API log entry.
#[derive(Debug, Clone, Deserialize)]
pub struct LogRes {
    /// Entry timestamp.
    #[serde(default)]
    pub timestamp: String,
    /// HTTP method of the logged call.
    #[serde(default)]
    pub method: String,
    /// HTTP status answered.
    #[serde(default)]
    pub answer_code: String,
    /// Request body of the logged call.
    #[serde(default)]
    pub query_body: String,
    /// Response body answered.
    #[serde(default)]
    pub answer: String,
    /// URL of the logged call.
    #[serde(default)]
    pub url: String,
    /// Caller IP.
    #[serde(default)]
    pub ip: String,
    /// Request headers of the logged call.
    #[serde(default)]
    pub query_headers: String,
    /// SHA1 of the entry.
    #[serde(default)]
    pub sha1: String,
    /// Number of API calls the operation performed.
    #[serde(default)]
    pub nb_api_calls: String,
    /// Server-side processing time.
    #[serde(default)]
    pub processing_time_ms: String,
    /// Number of hits returned, for query entries.
    #[serde(default)]
    pub query_nb_hits: String,
    /// Index targeted by the logged call.
    #[serde(default)]
    pub index: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(LogType::All, "all")]
    #[test_case(LogType::Query, "query")]
    #[test_case(LogType::Build, "build")]
    #[test_case(LogType::Error, "error")]
    fn test_log_type_wire_value(log_type: LogType, expected: &str) {
        assert_eq!(log_type.as_str(), expected);
    }

    #[test]
    fn test_logs_params_url_encoding() {
        let params = LogsParams::new()
            .with_length(10)
            .with_index_name("contacts")
            .with_log_type(LogType::Error);

        assert_eq!(
            params.to_url_params(),
            vec![
                ("length".to_string(), "10".to_string()),
                ("indexName".to_string(), "contacts".to_string()),
                ("type".to_string(), "error".to_string()),
            ]
        );
    }
}
