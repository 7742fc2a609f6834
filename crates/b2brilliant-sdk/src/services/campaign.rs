//! Outreach campaigns.

use std::sync::Arc;

use b2brilliant_core::{endpoints, validate, CampaignOptions, CampaignType, Result};
use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;

/// Body for `campaigns/create`.
#[derive(Debug, Serialize)]
struct CreatePayload<'a> {
    #[serde(rename = "userBusiness")]
    user_business: &'a Value,
    #[serde(rename = "targetBusiness")]
    target_business: &'a Value,
    #[serde(rename = "campaignTypes", skip_serializing_if = "Option::is_none")]
    campaign_types: Option<&'a [CampaignType]>,
}

/// Body for `campaigns/refine`.
#[derive(Debug, Serialize)]
struct RefinePayload<'a> {
    #[serde(rename = "campaignData")]
    campaign_data: &'a Value,
    #[serde(rename = "additionalInfo")]
    additional_info: &'a str,
}

/// Campaign generation and refinement.
#[derive(Debug, Clone)]
pub struct CampaignService {
    client: Arc<ApiClient>,
}

impl CampaignService {
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

    /// Generate campaigns aimed at `target_business` on behalf of
    /// `user_business`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if either business is not a non-empty
    /// object or `campaign_types` is set but empty, otherwise any
    /// [`crate::ApiError`] from the request.
    pub async fn create(
        &self,
        user_business: &Value,
        target_business: &Value,
        options: &CampaignOptions,
    ) -> Result<Value> {
        let path = endpoints::campaign::CREATE;
        let campaign_types = options.campaign_types.as_deref();

        validate::non_empty_object("user_business", user_business)
            .and_then(|_| validate::non_empty_object("target_business", target_business))
            .and_then(|_| match campaign_types {
                Some(types) => validate::non_empty_list("campaign_types", types),
                None => Ok(()),
            })
            .map_err(|err| super::rejected(path, err))?;

        let payload = CreatePayload {
            user_business,
            target_business,
            campaign_types,
        };
        self.client.post(path, Some(&payload)).await
    }

    /// Refine generated campaigns with extra information.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `campaign_data` is not a non-empty object
    /// or `additional_info` is empty, otherwise any [`crate::ApiError`].
    pub async fn refine(&self, campaign_data: &Value, additional_info: &str) -> Result<Value> {
        let path = endpoints::campaign::REFINE;
        validate::non_empty_object("campaign_data", campaign_data)
            .and_then(|_| validate::non_empty_str("additional_info", additional_info))
            .map_err(|err| super::rejected(path, err))?;

        let payload = RefinePayload {
            campaign_data,
            additional_info,
        };
        self.client.post(path, Some(&payload)).await
    }
}
