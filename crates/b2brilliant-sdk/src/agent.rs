//! SDK entry point.

use std::sync::Arc;

use b2brilliant_core::Result;

use crate::client::ApiClient;
use crate::config::AgentConfig;
use crate::services::{BusinessService, CampaignService, UserService};

/// Entry point to the B2Brilliant API.
///
/// Owns one [`ApiClient`] and hands the same instance to every service.
#[derive(Debug, Clone)]
pub struct B2BrilliantAgent {
    client: Arc<ApiClient>,
    user: UserService,
    business: BusinessService,
    campaigns: CampaignService,
}

impl B2BrilliantAgent {
    /// Base URL used when none is configured.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.b2brilliant.app";

    /// Create an agent for the public API.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `api_key` is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(AgentConfig::new(api_key))
    }

    /// Create an agent against `base_url`, or the public API when it is
    /// `None` or empty.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `api_key` is empty.
    pub fn with_base_url(api_key: impl Into<String>, base_url: Option<&str>) -> Result<Self> {
        let mut config = AgentConfig::new(api_key);
        config.base_url = base_url.map(str::to_string);
        Self::from_config(config)
    }

    /// Create an agent from environment variables.
    ///
    /// See [`AgentConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns a validation error if the environment is incomplete.
    pub fn from_env() -> Result<Self> {
        Self::from_config(AgentConfig::from_env()?)
    }

    /// Create an agent from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the API key is empty, or an API error if
    /// the HTTP client cannot be built.
    pub fn from_config(config: AgentConfig) -> Result<Self> {
        let options = config.client_options();
        let base_url = config
            .base_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());

        let client = Arc::new(ApiClient::with_options(config.api_key, base_url, &options)?);
        tracing::debug!(base_url = client.base_url(), "created B2Brilliant agent");

        Ok(Self {
            user: UserService::new(Arc::clone(&client)),
            business: BusinessService::new(Arc::clone(&client)),
            campaigns: CampaignService::new(Arc::clone(&client)),
            client,
        })
    }

    /// The transport shared by all services.
    #[must_use]
    pub fn api_client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    /// Operations on the caller's own business.
    #[must_use]
    pub fn user(&self) -> &UserService {
        &self.user
    }

    /// Operations on target businesses.
    #[must_use]
    pub fn business(&self) -> &BusinessService {
        &self.business
    }

    /// Campaign generation and refinement.
    #[must_use]
    pub fn campaigns(&self) -> &CampaignService {
        &self.campaigns
    }
}
