//! Typed views of service responses.
//!
//! The SDK returns responses as raw JSON. These types are for callers who want
//! structure: convert with `serde_json::from_value`. Unknown fields are
//! ignored so newer service versions still decode.

use serde::{Deserialize, Serialize};

use crate::options::{CampaignType, PointOfContact};

/// A discovered business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessObject {
    /// Profile information.
    pub profile: BusinessProfile,
    /// Contact information.
    pub contacts: BusinessContacts,
    /// Branding information.
    pub branding: BusinessBranding,
    /// Competitors, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitors: Option<Vec<Competitor>>,
    /// How confident the service is in this result.
    pub confidence: ConfidenceScore,
}

/// Score from 0 to 10 with an explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceScore {
    /// Score from 0 to 10.
    pub score: f64,
    /// Why the score was given.
    pub reasoning: String,
}

/// Descriptive profile of a business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessProfile {
    /// Business name.
    pub name: String,
    /// Short description.
    pub summary: String,
    /// Services offered.
    pub services: Vec<String>,
    /// What the business is currently doing.
    pub current_events: String,
    /// Who the business sells to.
    pub target_audience: String,
    /// Industry name.
    pub industry: String,
}

/// Kind of outreach channel a business is reachable on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum BusinessChannelType {
    Facebook,
    Instagram,
    Linkedin,
    Twitter,
    Tiktok,
    Email,
    Sms,
}

/// A social profile or other channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessChannel {
    /// Profile URL.
    pub url: String,
    /// Channel kind.
    #[serde(rename = "type")]
    pub kind: BusinessChannelType,
}

/// How to reach a business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessContacts {
    /// Main contact, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_of_contact: Option<PointOfContact>,
    /// Social channels.
    #[serde(default)]
    pub social: Vec<BusinessChannel>,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
}

/// Brand voice and identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessBranding {
    /// Brand voice.
    pub voice: String,
    /// Brand tone.
    pub tone: String,
    /// Brand style.
    pub style: String,
    /// Taglines and slogans.
    #[serde(default)]
    pub phrases: Vec<String>,
}

/// A competitor of a discovered business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    /// Competitor name.
    pub business_name: String,
    /// Competitor website.
    pub url: String,
    /// Where the competitor is stronger.
    pub advantages: Vec<String>,
    /// Where the competitor is weaker.
    pub disadvantages: Vec<String>,
    /// Suggested responses.
    pub recommendations: Vec<String>,
}

/// Result of a compatibility assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessCompatibilityScore {
    /// Target business name.
    pub target_business: String,
    /// Caller's business name.
    pub user_business: String,
    /// Compatibility score.
    pub score: f64,
    /// Why the score was given.
    pub reasoning: CompatibilityReasoning,
}

/// Breakdown behind a compatibility score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityReasoning {
    /// Points in favour.
    pub positives: Vec<String>,
    /// Points against.
    pub negatives: Vec<String>,
    /// Suggested next steps.
    pub recommendations: Vec<String>,
}

/// Generated campaigns for one pair of businesses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignObject {
    /// Target business name.
    pub target_business: String,
    /// Caller's business name.
    pub user_business: String,
    /// One campaign per channel.
    pub campaigns: Vec<Campaign>,
}

/// A single campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    /// Channel the campaign is written for.
    #[serde(rename = "type")]
    pub kind: CampaignType,
    /// Campaign copy.
    pub content: String,
    /// Service's rating of the campaign.
    pub rating: f64,
    /// Critique of the campaign.
    pub feedback: CampaignFeedback,
}

/// Critique attached to a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignFeedback {
    /// What works.
    pub strengths: Vec<String>,
    /// What does not.
    pub weaknesses: Vec<String>,
    /// How to improve it.
    pub suggestions: Vec<String>,
}
