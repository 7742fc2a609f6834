//! Target businesses.

use std::sync::Arc;

use b2brilliant_core::{endpoints, validate, DiscoveryOptions, Result};
use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;

/// Body for `business/compatibility`.
#[derive(Debug, Serialize)]
struct CompatibilityPayload<'a> {
    #[serde(rename = "userBusiness")]
    user_business: &'a Value,
    #[serde(rename = "targetBusiness")]
    target_business: &'a Value,
}

/// Operations on prospective target businesses.
#[derive(Debug, Clone)]
pub struct BusinessService {
    client: Arc<ApiClient>,
}

impl BusinessService {
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

    /// Discover a target business from its website.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `urls` is empty or the point of contact
    /// is not an object, otherwise any [`crate::ApiError`] from the request.
    pub async fn discover(&self, urls: &[String], options: &DiscoveryOptions) -> Result<Value> {
        super::discover(&self.client, endpoints::business::DISCOVER, urls, options).await
    }

    /// Refine a previously discovered target business.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `business_data` is not a non-empty object
    /// or `additional_info` is empty, otherwise any [`crate::ApiError`].
    pub async fn refine(&self, business_data: &Value, additional_info: &str) -> Result<Value> {
        super::refine(
            &self.client,
            endpoints::business::REFINE,
            business_data,
            additional_info,
        )
        .await
    }

    /// Score how well the caller's business fits a target business.
    ///
    /// # Errors
    ///
    /// Returns a validation error if either business is not a non-empty
    /// object, otherwise any [`crate::ApiError`] from the request.
    pub async fn compatibility(
        &self,
        user_business: &Value,
        target_business: &Value,
    ) -> Result<Value> {
        let path = endpoints::business::COMPATIBILITY;
        validate::non_empty_object("user_business", user_business)
            .and_then(|_| validate::non_empty_object("target_business", target_business))
            .map_err(|err| super::rejected(path, err))?;

        let payload = CompatibilityPayload {
            user_business,
            target_business,
        };
        self.client.post(path, Some(&payload)).await
    }
}
