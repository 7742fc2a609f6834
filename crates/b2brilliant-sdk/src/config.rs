//! SDK configuration.

use std::fmt;
use std::time::Duration;

use b2brilliant_core::{Result, ValidationError};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "B2BRILLIANT_API_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_VAR: &str = "B2BRILLIANT_BASE_URL";

/// Environment variable setting a request timeout in whole seconds.
pub const TIMEOUT_SECONDS_VAR: &str = "B2BRILLIANT_TIMEOUT_SECONDS";

/// Transport options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    /// Per-request timeout. `None` leaves reqwest's default in place.
    pub timeout: Option<Duration>,
}

impl ClientOptions {
    /// Create options with a request timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// Everything needed to build a [`crate::B2BrilliantAgent`].
#[derive(Clone, PartialEq, Eq)]
pub struct AgentConfig {
    /// API key sent with every request.
    pub api_key: String,
    /// Base URL override. `None` or empty uses the public API.
    pub base_url: Option<String>,
    /// Per-request timeout.
    pub timeout: Option<Duration>,
}

impl AgentConfig {
    /// Create a configuration for the public API.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            timeout: None,
        }
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load configuration from the process environment.
    ///
    /// Reads `B2BRILLIANT_API_KEY` (required), `B2BRILLIANT_BASE_URL` and
    /// `B2BRILLIANT_TIMEOUT_SECONDS`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the API key is missing or empty, or the
    /// timeout is not a whole number of seconds.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AgentConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ValidationError::field("api_key", format!("{API_KEY_VAR} must be set"))
            })?;

        let timeout = match lookup(TIMEOUT_SECONDS_VAR) {
            Some(raw) => {
                let seconds = raw.trim().parse::<u64>().map_err(|_| {
                    ValidationError::field(
                        "timeout_seconds",
                        format!("{TIMEOUT_SECONDS_VAR} must be a whole number of seconds"),
                    )
                })?;
                Some(Duration::from_secs(seconds))
            }
            None => None,
        };

        Ok(Self {
            api_key,
            base_url: lookup(BASE_URL_VAR).filter(|url| !url.is_empty()),
            timeout,
        })
    }

    pub(crate) fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: self.timeout,
        }
    }
}

impl fmt::Debug for AgentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
