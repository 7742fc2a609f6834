//! Resource services.
//!
//! Each service validates its arguments, builds a camelCase payload and hands
//! it to the shared [`ApiClient`]. Responses are returned untouched.
//!
//! Payload structs carry an explicit `rename` on every field; together they
//! are the full snake_case to camelCase mapping for the wire.

mod business;
mod campaign;
mod user;

pub use business::BusinessService;
pub use campaign::CampaignService;
pub use user::UserService;

use b2brilliant_core::{validate, DiscoveryOptions, Error, Result, ValidationError};
use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;

/// Body for `user/discover` and `business/discover`.
#[derive(Debug, Serialize)]
pub(crate) struct DiscoverPayload<'a> {
    urls: &'a [String],
    #[serde(rename = "findCompetitors", skip_serializing_if = "Option::is_none")]
    find_competitors: Option<bool>,
    #[serde(rename = "findBranding", skip_serializing_if = "Option::is_none")]
    find_branding: Option<bool>,
    #[serde(rename = "deepSearch", skip_serializing_if = "Option::is_none")]
    deep_search: Option<bool>,
    #[serde(rename = "pointOfContact", skip_serializing_if = "Option::is_none")]
    point_of_contact: Option<&'a Value>,
}

impl<'a> DiscoverPayload<'a> {
    pub(crate) fn build(
        urls: &'a [String],
        options: &'a DiscoveryOptions,
    ) -> std::result::Result<Self, ValidationError> {
        validate::urls(urls)?;
        if let Some(contact) = &options.point_of_contact {
            validate::object("point_of_contact", contact)?;
        }

        Ok(Self {
            urls,
            find_competitors: options.find_competitors,
            find_branding: options.find_branding,
            deep_search: options.deep_search,
            point_of_contact: options.point_of_contact.as_ref(),
        })
    }
}

/// Body for `user/refine` and `business/refine`.
#[derive(Debug, Serialize)]
pub(crate) struct RefinePayload<'a> {
    #[serde(rename = "businessData")]
    business_data: &'a Value,
    #[serde(rename = "additionalInfo")]
    additional_info: &'a str,
}

impl<'a> RefinePayload<'a> {
    pub(crate) fn build(
        business_data: &'a Value,
        additional_info: &'a str,
    ) -> std::result::Result<Self, ValidationError> {
        validate::non_empty_object("business_data", business_data)?;
        validate::non_empty_str("additional_info", additional_info)?;

        Ok(Self {
            business_data,
            additional_info,
        })
    }
}

/// Discover a business at `path`.
async fn discover(
    client: &ApiClient,
    path: &str,
    urls: &[String],
    options: &DiscoveryOptions,
) -> Result<Value> {
    let payload = DiscoverPayload::build(urls, options).map_err(|err| rejected(path, err))?;
    client.post(path, Some(&payload)).await
}

/// Refine a business at `path`.
async fn refine(
    client: &ApiClient,
    path: &str,
    business_data: &Value,
    additional_info: &str,
) -> Result<Value> {
    let payload =
        RefinePayload::build(business_data, additional_info).map_err(|err| rejected(path, err))?;
    client.post(path, Some(&payload)).await
}

/// Log a validation failure and lift it into [`Error`].
fn rejected(path: &str, err: ValidationError) -> Error {
    tracing::debug!(path, error = %err, "request rejected before sending");
    err.into()
}
