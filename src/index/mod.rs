//! Index-scoped operations.
//!
//! An [`Index`] is a cheap handle: it carries the shared transport and the
//! pre-encoded route of one index. Submodules group the operation families
//! (records, synonyms, rules, tasks); searching, settings, browsing and
//! index lifecycle live here.

mod objects;
mod rules;
mod synonyms;
mod tasks;

pub use tasks::{WAIT_TASK_DEADLINE, WAIT_TASK_INITIAL_DELAY, WAIT_TASK_MAX_DELAY};

use crate::browse::BrowseIter;
use crate::models::{
    AddKeyRes, ApiKey, BrowseRes, DeleteRes, DeleteTaskRes, KeyParams, ListKeysRes, ParamsBody,
    QueryRes, SearchFacetRes, SearchParams, Settings, UpdateKeyRes, UpdateTaskRes,
};
use crate::transport::{CallKind, RequestOptions, Transport};
use crate::{Error, Result};
use serde::Serialize;
use std::sync::Arc;

/// A handle on one Algolia index.
///
/// Created by [`Client::init_index`](crate::Client::init_index); creation
/// performs no I/O and does not require the index to exist.
#[derive(Debug, Clone)]
pub struct Index {
    transport: Arc<Transport>,
    name: String,
    route: String,
}

#[derive(Serialize)]
struct BrowseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cursor: Option<String>,
}

impl Index {
    pub(crate) fn new(transport: Arc<Transport>, name: &str) -> Self {
        Self {
            transport,
            name: name.to_string(),
            route: format!("/1/indexes/{}", urlencoding::encode(name)),
        }
    }

    /// Returns the index name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn transport(&self) -> &Transport {
        &self.transport
    }

    pub(crate) fn route(&self) -> &str {
        &self.route
    }

    /// Deletes the index.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn delete(&self, opts: Option<&RequestOptions>) -> Result<DeleteTaskRes> {
        self.transport.delete(&self.route, opts)
    }

    /// Removes every record from the index.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn clear(&self, opts: Option<&RequestOptions>) -> Result<UpdateTaskRes> {
        let path = format!("{}/clear", self.route);
        self.transport
            .post(&path, &serde_json::json!({}), CallKind::Write, opts)
    }

    /// Retrieves the index settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn get_settings(&self, opts: Option<&RequestOptions>) -> Result<Settings> {
        let path = format!("{}/settings?getVersion=2", self.route);
        self.transport.get(&path, CallKind::Read, opts)
    }

    /// Changes the index settings. Only set fields are sent.
    ///
    /// To propagate the change to replicas, pass a `forwardToReplicas=true`
    /// URL parameter through `opts`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn set_settings(
        &self,
        settings: &Settings,
        opts: Option<&RequestOptions>,
    ) -> Result<UpdateTaskRes> {
        let path = format!("{}/settings", self.route);
        self.transport.put(&path, settings, opts)
    }

    /// Searches the index.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn search(
        &self,
        query: &str,
        params: &SearchParams,
        opts: Option<&RequestOptions>,
    ) -> Result<QueryRes> {
        let mut params = params.clone();
        params.insert("query", query);
        let path = format!("{}/query", self.route);
        let body = ParamsBody {
            params: params.to_query_string(),
        };
        self.transport.post(&path, &body, CallKind::Read, opts)
    }

    /// Searches inside a facet's values, optionally restricted by regular
    /// search parameters. Pagination parameters are ignored by the service.
    ///
    /// # Errors
    ///
    /// Returns an error if `facet` is empty or the request fails.
    pub fn search_for_facet_values(
        &self,
        facet: &str,
        query: &str,
        params: &SearchParams,
        opts: Option<&RequestOptions>,
    ) -> Result<SearchFacetRes> {
        if facet.is_empty() {
            return Err(Error::InvalidInput("facet name is empty".to_string()));
        }
        let mut params = params.clone();
        params.insert("facetQuery", query);
        let path = format!(
            "{}/facets/{}/query",
            self.route,
            urlencoding::encode(facet)
        );
        let body = ParamsBody {
            params: params.to_query_string(),
        };
        self.transport.post(&path, &body, CallKind::Read, opts)
    }

    /// Deletes every record matching the given filters.
    ///
    /// Only filter-style parameters are supported (`filters`,
    /// `numericFilters`, `facetFilters`, `tagFilters`, geo parameters); the
    /// service rejects anything else.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` is empty or the request fails.
    pub fn delete_by(
        &self,
        params: &SearchParams,
        opts: Option<&RequestOptions>,
    ) -> Result<DeleteTaskRes> {
        if params.is_empty() {
            return Err(Error::InvalidInput(
                "delete_by requires at least one filter".to_string(),
            ));
        }
        let path = format!("{}/deleteByQuery", self.route);
        let body = ParamsBody {
            params: params.to_query_string(),
        };
        self.transport.post(&path, &body, CallKind::Write, opts)
    }

    /// Fetches one browse page.
    ///
    /// `cursor` must be `None` for the first page and the previously
    /// returned cursor afterwards. This is the low-level primitive; use
    /// [`browse_all`](Self::browse_all) to iterate through every record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn browse(
        &self,
        params: &SearchParams,
        cursor: Option<&str>,
        opts: Option<&RequestOptions>,
    ) -> Result<BrowseRes> {
        let path = format!("{}/browse", self.route);
        // A cursor encodes the original parameters; the service rejects
        // requests carrying both.
        let body = cursor.map_or_else(
            || BrowseBody {
                params: Some(params.to_query_string()),
                cursor: None,
            },
            |cursor| BrowseBody {
                params: None,
                cursor: Some(cursor.to_string()),
            },
        );
        self.transport.post(&path, &body, CallKind::Read, opts)
    }

    /// Returns an iterator over every record matching `params`, without the
    /// result-count limit of [`search`](Self::search).
    ///
    /// The first page is fetched eagerly; later pages are fetched as the
    /// iteration reaches them.
    ///
    /// # Errors
    ///
    /// Returns the first fetch's error as-is.
    pub fn browse_all(
        &self,
        params: SearchParams,
        opts: Option<&RequestOptions>,
    ) -> Result<BrowseIter<&Self>> {
        BrowseIter::new(self, params, opts.cloned())
    }

    /// Lists the keys that can access this index.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn list_keys(&self, opts: Option<&RequestOptions>) -> Result<Vec<ApiKey>> {
        let path = format!("{}/keys", self.route);
        let res: ListKeysRes = self.transport.get(&path, CallKind::Read, opts)?;
        Ok(res.keys)
    }

    /// Creates a key scoped to this index.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn add_key(&self, params: &KeyParams, opts: Option<&RequestOptions>) -> Result<AddKeyRes> {
        let path = format!("{}/keys", self.route);
        self.transport.post(&path, params, CallKind::Write, opts)
    }

    /// Updates an index-scoped key.
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
        let path = self.key_path(key)?;
        self.transport.put(&path, params, opts)
    }

    /// Retrieves an index-scoped key.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn get_key(&self, key: &str, opts: Option<&RequestOptions>) -> Result<ApiKey> {
        let path = self.key_path(key)?;
        self.transport.get(&path, CallKind::Read, opts)
    }

    /// Deletes an index-scoped key.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub fn delete_key(&self, key: &str, opts: Option<&RequestOptions>) -> Result<DeleteRes> {
        let path = self.key_path(key)?;
        self.transport.delete(&path, opts)
    }

    fn key_path(&self, key: &str) -> Result<String> {
        if key.is_empty() {
            return Err(Error::InvalidInput("key value is empty".to_string()));
        }
        Ok(format!("{}/keys/{}", self.route, urlencoding::encode(key)))
    }
}
