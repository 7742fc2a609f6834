//! Caller-facing request options.
//!
//! Every optional setting is an `Option`; `None` means "not supplied" and the
//! corresponding key is left off the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options for business discovery.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoveryOptions {
    /// Look up competitors of the business.
    pub find_competitors: Option<bool>,
    /// Extract branding (voice, tone, style, phrases).
    pub find_branding: Option<bool>,
    /// Crawl beyond the supplied URLs.
    pub deep_search: Option<bool>,
    /// Known point of contact. Must be a JSON object when supplied.
    pub point_of_contact: Option<Value>,
}

impl DiscoveryOptions {
    /// Create options with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to find competitors.
    #[must_use]
    pub const fn with_find_competitors(mut self, enabled: bool) -> Self {
        self.find_competitors = Some(enabled);
        self
    }

    /// Set whether to find branding.
    #[must_use]
    pub const fn with_find_branding(mut self, enabled: bool) -> Self {
        self.find_branding = Some(enabled);
        self
    }

    /// Set whether to run a deep search.
    #[must_use]
    pub const fn with_deep_search(mut self, enabled: bool) -> Self {
        self.deep_search = Some(enabled);
        self
    }

    /// Set the point of contact from its typed form.
    #[must_use]
    pub fn with_point_of_contact(mut self, contact: &PointOfContact) -> Self {
        self.point_of_contact = Some(serde_json::json!({
            "name": contact.name,
            "position": contact.position,
        }));
        self
    }

    /// Set the point of contact from raw JSON.
    #[must_use]
    pub fn with_point_of_contact_value(mut self, contact: Value) -> Self {
        self.point_of_contact = Some(contact);
        self
    }
}

/// A named contact at a business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointOfContact {
    /// Contact's name.
    pub name: String,
    /// Contact's position or job title.
    pub position: String,
}

impl PointOfContact {
    /// Create a point of contact.
    #[must_use]
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
        }
    }
}

/// Outreach channel a campaign is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignType {
    /// Direct message.
    Dm,
    /// Email.
    Email,
    /// Text message.
    Sms,
}

/// Options for campaign creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignOptions {
    /// Channels to generate. The service picks when unset.
    pub campaign_types: Option<Vec<CampaignType>>,
}

impl CampaignOptions {
    /// Create options with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict generation to the given channels.
    #[must_use]
    pub fn with_campaign_types(mut self, types: impl Into<Vec<CampaignType>>) -> Self {
        self.campaign_types = Some(types.into());
        self
    }
}
