//! The caller's own business.

use std::sync::Arc;

use b2brilliant_core::{endpoints, DiscoveryOptions, Result};
use serde_json::Value;

use crate::client::ApiClient;

/// Operations on the caller's own business.
#[derive(Debug, Clone)]
pub struct UserService {
    client: Arc<ApiClient>,
}

impl UserService {
    /// Create the service over a shared transport.
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// The transport this service sends through.
    #[must_use]
    pub fn api_client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    /// Discover the caller's business from its website.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `urls` is empty or the point of contact
    /// is not an object, otherwise any [`crate::ApiError`] from the request.
    pub async fn discover(&self, urls: &[String], options: &DiscoveryOptions) -> Result<Value> {
        super::discover(&self.client, endpoints::user::DISCOVER, urls, options).await
    }

    /// Refine a previously discovered business with extra information.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `business_data` is not a non-empty object
    /// or `additional_info` is empty, otherwise any [`crate::ApiError`].
    pub async fn refine(&self, business_data: &Value, additional_info: &str) -> Result<Value> {
        super::refine(
            &self.client,
            endpoints::user::REFINE,
            business_data,
            additional_info,
        )
        .await
    }
}
