//! HTTP binding layer.
//!
//! Owns the blocking `reqwest` client, the read/write host lists and the
//! request/response plumbing shared by [`Client`](crate::Client) and
//! [`Index`](crate::Index). Read calls prefer the DSN host; write calls the
//! main host. A host is skipped only on connect or timeout errors; every
//! other failure is surfaced immediately.

use crate::{ClientConfig, Error, Result};
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Extra headers and URL parameters applied to a single call.
///
/// Every operation accepts an `Option<&RequestOptions>`; `None` means no
/// extras.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Headers added to this call only.
    pub extra_headers: Vec<(String, String)>,
    /// Query parameters added to this call only.
    pub extra_url_params: Vec<(String, String)>,
}

impl RequestOptions {
    /// Creates empty request options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            extra_headers: Vec::new(),
            extra_url_params: Vec::new(),
        }
    }

    /// Adds a header to this call.
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((key.into(), value.into()));
        self
    }

    /// Adds a query parameter to this call.
    #[must_use]
    pub fn with_url_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_url_params.push((key.into(), value.into()));
        self
    }
}

/// Whether a call goes through the read or the write host list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CallKind {
    /// Queries, browsing, object and settings retrieval.
    Read,
    /// Indexing, settings updates, key/synonym/rule mutations.
    Write,
}

/// Shared HTTP transport.
#[derive(Debug)]
pub(crate) struct Transport {
    http: reqwest::blocking::Client,
    read_hosts: Vec<String>,
    write_hosts: Vec<String>,
}

/// Error body shape returned by the service on non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl Transport {
    /// Builds the transport from a validated configuration.
    pub(crate) fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Algolia-Application-Id",
            header_value(&config.app_id, "application ID")?,
        );
        headers.insert("X-Algolia-API-Key", header_value(&config.api_key, "API key")?);
        for (key, value) in &config.extra_headers {
            headers.insert(header_name(key)?, header_value(value, key)?);
        }

        let mut builder = reqwest::blocking::Client::builder().default_headers(headers);
        if config.timeout_ms > 0 {
            builder = builder.timeout(Duration::from_millis(config.timeout_ms));
        }
        if config.connect_timeout_ms > 0 {
            builder = builder.connect_timeout(Duration::from_millis(config.connect_timeout_ms));
        }

        let http = builder.build()?;
        Ok(Self {
            http,
            read_hosts: config.read_hosts.clone(),
            write_hosts: config.write_hosts.clone(),
        })
    }

    /// Performs a GET request.
    pub(crate) fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        kind: CallKind,
        opts: Option<&RequestOptions>,
    ) -> Result<T> {
        self.send(Method::GET, path, None, kind, opts)
    }

    /// Performs a DELETE request.
    pub(crate) fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        opts: Option<&RequestOptions>,
    ) -> Result<T> {
        self.send(Method::DELETE, path, None, CallKind::Write, opts)
    }

    /// Performs a POST request with a JSON body.
    pub(crate) fn post<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        kind: CallKind,
        opts: Option<&RequestOptions>,
    ) -> Result<T> {
        let body = encode_body(body)?;
        self.send(Method::POST, path, Some(body), kind, opts)
    }

    /// Performs a PUT request with a JSON body.
    pub(crate) fn put<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        opts: Option<&RequestOptions>,
    ) -> Result<T> {
        let body = encode_body(body)?;
        self.send(Method::PUT, path, Some(body), CallKind::Write, opts)
    }

    fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        kind: CallKind,
        opts: Option<&RequestOptions>,
    ) -> Result<T> {
        let hosts = match kind {
            CallKind::Read => &self.read_hosts,
            CallKind::Write => &self.write_hosts,
        };

        tracing::debug!(method = %method, path = %path, "Algolia request");

        let mut last_err: Option<reqwest::Error> = None;
        for host in hosts {
            let url = format!("https://{host}{path}");
            let mut request = self.http.request(method.clone(), &url);
            if let Some(opts) = opts {
                for (key, value) in &opts.extra_headers {
                    request = request.header(key, value);
                }
                if !opts.extra_url_params.is_empty() {
                    request = request.query(&opts.extra_url_params);
                }
            }
            if let Some(body) = &body {
                request = request
                    .header(CONTENT_TYPE, "application/json")
                    .body(body.clone());
            }

            match request.send() {
                Ok(response) => return parse_response(response, path),
                Err(err) if err.is_connect() || err.is_timeout() => {
                    tracing::warn!(host = %host, error = %err, "host unreachable, trying next");
                    last_err = Some(err);
                }
                Err(err) => return Err(Error::Transport(err)),
            }
        }

        last_err.map_or_else(
            || Err(Error::InvalidInput("no hosts configured".to_string())),
            |err| Err(Error::Transport(err)),
        )
    }
}

/// Decodes a response: non-2xx becomes [`Error::Api`], 2xx is deserialized.
fn parse_response<T: DeserializeOwned>(
    response: reqwest::blocking::Response,
    operation: &str,
) -> Result<T> {
    let status = response.status();
    let text = response.text()?;

    if !status.is_success() {
        let message = error_message(&text);
        tracing::error!(
            status = %status,
            message = %message,
            operation = %operation,
            "API returned error status"
        );
        return Err(Error::Api {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&text).map_err(|err| Error::Decode {
        operation: operation.to_string(),
        cause: err.to_string(),
    })
}

/// Extracts the service's error message from a non-2xx body.
///
/// Falls back to the raw body when it is not the expected JSON shape.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body).map_or_else(|_| body.trim().to_string(), |b| b.message)
}

fn encode_body<B: serde::Serialize>(body: &B) -> Result<String> {
    serde_json::to_string(body)
        .map_err(|err| Error::InvalidInput(format!("unserializable request body: {err}")))
}

fn header_name(key: &str) -> Result<HeaderName> {
    key.parse()
        .map_err(|_| Error::InvalidInput(format!("invalid header name: {key}")))
}

fn header_value(value: &str, what: &str) -> Result<HeaderValue> {
    value
        .parse()
        .map_err(|_| Error::InvalidInput(format!("invalid header value for {what}")))
}
