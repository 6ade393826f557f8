//! # algoliasearch
//!
//! Client for the Algolia hosted search REST API.
//!
//! The crate exposes the service as typed method calls: index CRUD, record
//! indexing (single and batched), settings management, key/ACL management,
//! synonyms, query rules, faceted search, and cursor-based browsing. All
//! ranking, tokenization and typo-tolerance happen on the remote service;
//! this library is the HTTP binding plus a pull-based iterator for walking
//! an entire index.
//!
//! ## Example
//!
//! ```rust,ignore
//! use algoliasearch::{Client, ClientConfig, SearchParams};
//!
//! let client = Client::new(ClientConfig::new("APP_ID", "API_KEY"))?;
//! let index = client.init_index("contacts");
//!
//! let res = index.search("jim", &SearchParams::new(), None)?;
//! println!("{} hits", res.nb_hits);
//!
//! for record in index.browse_all(SearchParams::new(), None)? {
//!     let record = record?;
//!     // ...
//! }
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod browse;
pub mod client;
pub mod config;
pub mod index;
pub mod models;
pub mod transport;

// Re-exports for convenience
pub use browse::{BrowseIter, BrowsePages};
pub use client::Client;
pub use config::ClientConfig;
pub use index::Index;
pub use models::{
    BatchOperation, BrowseRes, KeyParams, Object, QueryRes, Rule, SearchParams, Settings, Synonym,
};
pub use transport::RequestOptions;

/// Error type for Algolia operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Missing credentials, empty object IDs, malformed parameters |
/// | `Transport` | Network-layer failures (connect, timeout, TLS, body read) |
/// | `Api` | The service answered with a non-2xx status |
/// | `Decode` | A 2xx payload did not match the expected shape |
/// | `TaskTimeout` | `wait_task` exceeded its overall deadline |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised before any network I/O:
    /// - Required credentials are missing (empty application ID or API key)
    /// - An object ID, key value or facet name is empty
    /// - `delete_by` is called with no filter parameters
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The HTTP layer failed before a response could be read.
    ///
    /// The original [`reqwest::Error`] is preserved as the error source so
    /// callers can inspect timeouts vs. connection failures.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    ///
    /// `message` carries the service's own error message when the error body
    /// could be decoded, or the raw body otherwise.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Error message reported by the service.
        message: String,
    },

    /// A successful response carried a payload that could not be decoded.
    #[error("failed to decode '{operation}' response: {cause}")]
    Decode {
        /// The operation whose response failed to decode.
        operation: String,
        /// The underlying serde error.
        cause: String,
    },

    /// A task did not reach the `published` state before the deadline.
    #[error("task {task_id} not published after {waited:?}")]
    TaskTimeout {
        /// The task that was being waited on.
        task_id: u64,
        /// Total time spent polling.
        waited: std::time::Duration,
    },
}

/// Result type alias for Algolia operations.
pub type Result<T> = std::result::Result<T, Error>;
