//! Search parameters and query/browse responses.

use super::Object;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Query parameters for search, browse and delete-by operations.
///
/// Keys are the parameter names of the REST API (`hitsPerPage`, `filters`,
/// `attributesToRetrieve`, ...). String values are sent verbatim; any other
/// JSON value is serialized, which matches how the service expects arrays
/// and booleans in the `params` string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams(BTreeMap<String, serde_json::Value>);

impl SearchParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets a parameter, consuming and returning `self`.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Sets a parameter in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns a parameter value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    /// Returns `true` when no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Encodes the parameters as a URL-encoded `k=v&k=v` string, the form
    /// the POST-bodied query endpoints expect in their `params` field.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(&value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Response of a search query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRes {
    /// Matching records for the requested page.
    #[serde(default)]
    pub hits: Vec<Object>,
    /// Total number of matching records.
    #[serde(default)]
    pub nb_hits: u64,
    /// Zero-based page of this response.
    #[serde(default)]
    pub page: u64,
    /// Total number of pages.
    #[serde(default)]
    pub nb_pages: u64,
    /// Page size used.
    #[serde(default)]
    pub hits_per_page: u64,
    /// Server-side processing time.
    #[serde(default, rename = "processingTimeMS")]
    pub processing_time_ms: u64,
    /// The query string that was run.
    #[serde(default)]
    pub query: String,
    /// The full parameter string that was run.
    #[serde(default)]
    pub params: String,
    /// Index name, present in multi-query responses.
    #[serde(default)]
    pub index: Option<String>,
    /// Facet counts, when faceting was requested.
    #[serde(default)]
    pub facets: Option<HashMap<String, HashMap<String, u64>>>,
    /// Whether the hit count is exhaustive.
    #[serde(default)]
    pub exhaustive_nb_hits: Option<bool>,
}

/// One page of a browse: records plus an optional continuation cursor.
///
/// The cursor is an opaque server-issued token; it is absent exactly when
/// this is the final page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseRes {
    /// Records of this page, in index order.
    #[serde(default)]
    pub hits: Vec<Object>,
    /// Continuation token for the next page, absent on the last page.
    #[serde(default)]
    pub cursor: Option<String>,
    /// Total number of matching records.
    #[serde(default)]
    pub nb_hits: u64,
    /// Server-side processing time.
    #[serde(default, rename = "processingTimeMS")]
    pub processing_time_ms: u64,
}

/// Response of a facet-values search.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFacetRes {
    /// Matching facet values.
    #[serde(default)]
    pub facet_hits: Vec<FacetHit>,
    /// Whether the facet count is exhaustive.
    #[serde(default)]
    pub exhaustive_facets_count: bool,
    /// Server-side processing time.
    #[serde(default, rename = "processingTimeMS")]
    pub processing_time_ms: u64,
}

/// One matching facet value.
#[derive(Debug, Clone, Deserialize)]
pub struct FacetHit {
    /// The facet value.
    pub value: String,
    /// The value with highlighting markup applied.
    #[serde(default)]
    pub highlighted: String,
    /// Number of records carrying this value.
    #[serde(default)]
    pub count: u64,
}

/// One query of a multi-index search.
#[derive(Debug, Clone)]
pub struct IndexedQuery {
    /// Index to query.
    pub index_name: String,
    /// Full-text query.
    pub query: String,
    /// Additional parameters.
    pub params: SearchParams,
}

impl IndexedQuery {
    /// Creates a query against `index_name`.
    #[must_use]
    pub fn new(index_name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
            query: query.into(),
            params: SearchParams::new(),
        }
    }

    /// Sets the additional parameters.
    #[must_use]
    pub fn with_params(mut self, params: SearchParams) -> Self {
        self.params = params;
        self
    }
}

/// Aggregation strategy for multi-index queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultipleQueriesStrategy {
    /// Execute every query.
    #[default]
    None,
    /// Stop once `hitsPerPage` results have been gathered.
    StopIfEnoughMatches,
}

impl MultipleQueriesStrategy {
    /// Returns the strategy as the API's string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::StopIfEnoughMatches => "stopIfEnoughMatches",
        }
    }
}

/// Request body for the POST-bodied query endpoints.
#[derive(Debug, Serialize)]
pub(crate) struct ParamsBody {
    pub params: String,
}
