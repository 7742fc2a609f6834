//! Error types for the B2Brilliant SDK.
//!
//! Failures come in two kinds that are never merged:
//!
//! - [`ValidationError`]: the caller passed bad input. Detected locally,
//!   before any request is sent.
//! - [`ApiError`]: anything learned by attempting the request. Non-2xx
//!   responses carry the HTTP status; failures with no response at all
//!   (network, timeout, undecodable body) carry status `0`.

use serde_json::{Map, Value};

/// Key under which transport failures store the underlying error in `data`.
pub const ORIGINAL_ERROR_KEY: &str = "original_error";

/// Result type for SDK operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by SDK operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The request failed at or beyond the transport.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The caller's input was rejected before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Return the API error, if this is one.
    #[must_use]
    pub const fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            Self::Validation(_) => None,
        }
    }

    /// Return the validation error, if this is one.
    #[must_use]
    pub const fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Api(_) => None,
        }
    }
}

/// A failure surfaced by or through the HTTP transport.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable description.
    pub message: String,
    /// HTTP status code, or `0` when no response was obtained.
    pub status: u16,
    /// Decoded error body, or transport details under `original_error`.
    pub data: Map<String, Value>,
}

impl ApiError {
    /// Create an API error with an empty `data` object.
    #[must_use]
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
            data: Map::new(),
        }
    }

    /// Attach the raw decoded error body.
    #[must_use]
    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = data;
        self
    }

    /// Create a status-0 error for a failure that produced no usable response.
    ///
    /// The underlying error's text is kept under `original_error`.
    #[must_use]
    pub fn transport(message: impl Into<String>, original_error: impl std::fmt::Display) -> Self {
        let mut data = Map::new();
        data.insert(
            ORIGINAL_ERROR_KEY.to_string(),
            Value::String(original_error.to_string()),
        );
        Self::new(message, 0).with_data(data)
    }

    /// Whether an HTTP response was obtained before the failure.
    #[must_use]
    pub const fn is_http(&self) -> bool {
        self.status != 0
    }
}

/// A caller input defect detected before any network call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Human-readable description.
    pub message: String,
    /// Field name to complaint. May be arbitrarily nested.
    pub validation_errors: Map<String, Value>,
}

impl ValidationError {
    /// Create a validation error with no per-field details.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            validation_errors: Map::new(),
        }
    }

    /// Attach per-field details.
    #[must_use]
    pub fn with_errors(mut self, validation_errors: Map<String, Value>) -> Self {
        self.validation_errors = validation_errors;
        self
    }

    /// Create an error for a single offending field.
    ///
    /// The complaint doubles as the message.
    #[must_use]
    pub fn field(field: &str, complaint: impl Into<String>) -> Self {
        let complaint = complaint.into();
        let mut errors = Map::new();
        errors.insert(field.to_string(), Value::String(complaint.clone()));
        Self::new(complaint).with_errors(errors)
    }
}
