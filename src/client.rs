//! Application-scoped operations.

use crate::config::ClientConfig;
use crate::index::Index;
use crate::models::{
    AddKeyRes, ApiKey, BatchOperationIndexed, DeleteRes, DeleteTaskRes, IndexRes, IndexedQuery,
    KeyParams, ListIndexesRes, ListKeysRes, LogRes, LogsParams, MultipleBatchRes,
    MultipleQueriesStrategy, QueryRes, UpdateKeyRes, UpdateTaskRes,
};
use crate::transport::{CallKind, RequestOptions, Transport};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A handle on an Algolia application.
///
/// Cheap to clone; every [`Index`] created from it shares one HTTP
/// transport. All methods are blocking and perform one round-trip (plus
/// host failover) unless noted.
#[derive(Debug, Clone)]
pub struct Client {
    transport: Arc<Transport>,
}

#[derive(Serialize)]
struct OperationBody<'a> {
    operation: &'static str,
    destination: &'a str,
}

#[derive(Serialize)]
struct MultipleQueriesBody {
    requests: Vec<MultipleQueriesRequest>,
}

#[derive(Serialize)]
struct MultipleQueriesRequest {
    #[serde(rename = "indexName")]
    index_name: String,
    params: String,
}

#[derive(Deserialize)]
struct MultipleQueriesRes {
    results: Vec<QueryRes>,
}

#[derive(Serialize)]
struct MultipleBatchBody<'a> {
    requests: &'a [BatchOperationIndexed],
}

#[derive(Deserialize)]
struct GetLogsRes {
    #[serde(default)]
    logs: Vec<LogRes>,
}

impl Client {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] on missing credentials or invalid
    /// extra headers, [`Error::Transport`] if the HTTP client cannot be
    /// built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = Transport::new(&config)?;
        Ok(Self {
            transport: Arc::new(transport),
        })
    }

    /// Creates a client from `ALGOLIA_APPLICATION_ID` / `ALGOLIA_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if either variable is unset.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Returns a handle targeting the named index. Performs no I/O.
    #[must_use]
    pub fn init_index(&self, name: &str) -> Index {
        Index::new(Arc::clone(&self.transport), name)
    }

    /// Lists every index of the application.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn list_indexes(&self, opts: Option<&RequestOptions>) -> Result<Vec<IndexRes>> {
        let res: ListIndexesRes = self.transport.get("/1/indexes", CallKind::Read, opts)?;
        Ok(res.items)
    }

    /// Renames the index `source` as `destination`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn move_index(
        &self,
        source: &str,
        destination: &str,
        opts: Option<&RequestOptions>,
    ) -> Result<UpdateTaskRes> {
        self.index_operation("move", source, destination, opts)
    }

    /// Duplicates the index `source` as `destination`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn copy_index(
        &self,
        source: &str,
        destination: &str,
        opts: Option<&RequestOptions>,
    ) -> Result<UpdateTaskRes> {
        self.index_operation("copy", source, destination, opts)
    }

    fn index_operation(
        &self,
        operation: &'static str,
        source: &str,
        destination: &str,
        opts: Option<&RequestOptions>,
    ) -> Result<UpdateTaskRes> {
        if source.is_empty() || destination.is_empty() {
            return Err(Error::InvalidInput("index name is empty".to_string()));
        }
        let path = format!("/1/indexes/{}/operation", urlencoding::encode(source));
        let body = OperationBody {
            operation,
            destination,
        };
        self.transport.post(&path, &body, CallKind::Write, opts)
    }

    /// Deletes the named index.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn delete_index(
        &self,
        name: &str,
        opts: Option<&RequestOptions>,
    ) -> Result<DeleteTaskRes> {
        self.init_index(name).delete(opts)
    }

    /// Removes every record from the named index.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn clear_index(&self, name: &str, opts: Option<&RequestOptions>) -> Result<UpdateTaskRes> {
        self.init_index(name).clear(opts)
    }

    /// Lists the application's API keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn list_keys(&self, opts: Option<&RequestOptions>) -> Result<Vec<ApiKey>> {
        let res: ListKeysRes = self.transport.get("/1/keys", CallKind::Read, opts)?;
        Ok(res.keys)
    }

    /// Creates an API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn add_key(&self, params: &KeyParams, opts: Option<&RequestOptions>) -> Result<AddKeyRes> {
        self.transport.post("/1/keys", params, CallKind::Write, opts)
    }

    /// Updates the API key identified by its value.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn update_key(
        &self,
        key: &str,
        params: &KeyParams,
        opts: Option<&RequestOptions>,
    ) -> Result<UpdateKeyRes> {
        let path = key_path(key)?;
        self.transport.put(&path, params, opts)
    }

    /// Retrieves the API key identified by its value.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn get_key(&self, key: &str, opts: Option<&RequestOptions>) -> Result<ApiKey> {
        let path = key_path(key)?;
        self.transport.get(&path, CallKind::Read, opts)
    }

    /// Deletes the API key identified by its value.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn delete_key(&self, key: &str, opts: Option<&RequestOptions>) -> Result<DeleteRes> {
        let path = key_path(key)?;
        self.transport.delete(&path, opts)
    }

    /// Retrieves the application's last API logs.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn get_logs(
        &self,
        params: &LogsParams,
        opts: Option<&RequestOptions>,
    ) -> Result<Vec<LogRes>> {
        let mut merged = opts.cloned().unwrap_or_default();
        merged.extra_url_params.extend(params.to_url_params());
        let res: GetLogsRes = self.transport.get("/1/logs", CallKind::Write, Some(&merged))?;
        Ok(res.logs)
    }

    /// Runs every query and aggregates the per-index results.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn multiple_queries(
        &self,
        queries: &[IndexedQuery],
        strategy: MultipleQueriesStrategy,
        opts: Option<&RequestOptions>,
    ) -> Result<Vec<QueryRes>> {
        let requests = queries
            .iter()
            .map(|q| {
                let mut params = q.params.clone();
                params.insert("query", q.query.clone());
                MultipleQueriesRequest {
                    index_name: q.index_name.clone(),
                    params: params.to_query_string(),
                }
            })
            .collect();

        let path = format!("/1/indexes/*/queries?strategy={}", strategy.as_str());
        let res: MultipleQueriesRes = self.transport.post(
            &path,
            &MultipleQueriesBody { requests },
            CallKind::Read,
            opts,
        )?;
        Ok(res.results)
    }

    /// Performs write operations across several indexes in one call.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn batch(
        &self,
        operations: &[BatchOperationIndexed],
        opts: Option<&RequestOptions>,
    ) -> Result<MultipleBatchRes> {
        self.transport.post(
            "/1/indexes/*/batch",
            &MultipleBatchBody {
                requests: operations,
            },
            CallKind::Write,
            opts,
        )
    }
}

fn key_path(key: &str) -> Result<String> {
    if key.is_empty() {
        return Err(Error::InvalidInput("key value is empty".to_string()));
    }
    Ok(format!("/1/keys/{}", urlencoding::encode(key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_path_encoding() {
        assert_eq!(key_path("abc123").unwrap(), "/1/keys/abc123");
        assert_eq!(key_path("a/b").unwrap(), "/1/keys/a%2Fb");
        assert!(key_path("").is_err());
    }

    #[test]
    fn test_init_index_performs_no_io() {
        // Host list resolves lazily, so constructing handles never touches
        // the network even with unreachable hosts.
        let client = Client::new(
            ClientConfig::new("app", "key").with_hosts(vec!["localhost:1".to_string()]),
        )
        .unwrap();
        let index = client.init_index("TestIndexOperations");
        assert_eq!(index.name(), "TestIndexOperations");
    }

    #[test]
    fn test_multiple_queries_body_shape() {
        let mut q = IndexedQuery::new("contacts", "jim");
        q.params.insert("hitsPerPage", 5);
        let body = MultipleQueriesRequest {
            index_name: q.index_name.clone(),
            params: {
                let mut params = q.params.clone();
                params.insert("query", q.query.clone());
                params.to_query_string()
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["indexName"], "contacts");
        assert_eq!(json["params"], "hitsPerPage=5&query=jim");
    }
}
