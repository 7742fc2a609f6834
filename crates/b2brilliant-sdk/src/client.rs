//! HTTP transport for the B2Brilliant API.

use std::error::Error as StdError;
use std::fmt;

use b2brilliant_core::{ApiError, Error, Result, ValidationError};
use reqwest::header::{ACCEPT_ENCODING, CONTENT_TYPE};
use reqwest::Client;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::ClientOptions;

const API_KEY_HEADER: &str = "x-api-key";

/// Authenticated JSON-over-HTTP transport.
///
/// Holds the API key and base URL, both fixed at construction. Every call is a
/// single POST with no retry; any failure comes back as an [`ApiError`].
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    /// Create a client with default options.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `api_key` is empty, or an API error if
    /// the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        Self::with_options(api_key, base_url, &ClientOptions::default())
    }

    /// Create a client with custom options.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `api_key` is empty, or an API error if
    /// the HTTP client cannot be built.
    pub fn with_options(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        options: &ClientOptions,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ValidationError::field("api_key", "API key is required").into());
        }

        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|err| {
            ApiError::transport(
                format!("failed to build HTTP client: {}", describe(&err)),
                &err,
            )
        })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// API key sent in the `x-api-key` header.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Base URL that endpoint paths are appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `body` as JSON to `path` and return the decoded response.
    ///
    /// A missing body, or one that serializes to `null`, is sent as `{}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for non-2xx responses (with the HTTP status),
    /// and a status-0 [`ApiError`] for network failures, timeouts and
    /// responses whose body is not JSON.
    pub async fn post<B>(&self, path: &str, body: Option<&B>) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let payload = match body {
            Some(body) => serde_json::to_value(body).map_err(|err| {
                ApiError::transport(format!("failed to encode request body: {err}"), &err)
            })?,
            None => Value::Null,
        };
        let payload = if payload.is_null() {
            Value::Object(Map::new())
        } else {
            payload
        };

        let url = format!("{}{path}", self.base_url);
        tracing::debug!(path, "sending request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(ACCEPT_ENCODING, "deflate")
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|err| network_error(path, &err))?;

        let status = response.status();
        let body = response.bytes().await;

        if !status.is_success() {
            // An unreadable error body is treated like an unparsable one.
            let err = match &body {
                Ok(bytes) => http_error(status.as_u16(), bytes),
                Err(read_err) => {
                    tracing::debug!(
                        path,
                        error = %read_err,
                        "error response body could not be read"
                    );
                    http_error(status.as_u16(), &[])
                }
            };
            tracing::warn!(path, status = err.status, error = %err.message, "request rejected");
            return Err(err.into());
        }

        let bytes = body.map_err(|err| network_error(path, &err))?;
        tracing::debug!(path, status = status.as_u16(), "request succeeded");
        serde_json::from_slice(&bytes).map_err(|err| {
            tracing::warn!(path, error = %err, "response body is not valid JSON");
            Error::from(ApiError::transport(
                format!("failed to decode response body: {err}"),
                &err,
            ))
        })
    }

    /// POST an empty JSON object to `path`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::post`].
    pub async fn post_empty(&self, path: &str) -> Result<Value> {
        self.post::<Value>(path, None).await
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Map a non-2xx response to an [`ApiError`].
///
/// A JSON object body becomes `data`; its `message` is used when present.
fn http_error(status: u16, body: &[u8]) -> ApiError {
    let fallback = format!("HTTP error {status}");
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(data)) => {
            let message = data
                .get("message")
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
                .map_or(fallback, str::to_string);
            ApiError::new(message, status).with_data(data)
        }
        _ => ApiError::new(fallback, status),
    }
}

fn network_error(path: &str, err: &reqwest::Error) -> ApiError {
    let message = describe(err);
    tracing::warn!(path, error = %message, "request failed without a response");
    ApiError::transport(message.clone(), message)
}

/// Render an error with its source chain, skipping causes already quoted.
fn describe(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
