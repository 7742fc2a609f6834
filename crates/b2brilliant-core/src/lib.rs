//! Core types for the B2Brilliant campaign SDK.
//!
//! This crate holds everything the SDK needs that does not touch the network:
//!
//! - **Errors**: `ApiError`, `ValidationError` and the `Error` union over both
//! - **Endpoints**: the fixed `/api/v1/...` path registry
//! - **Options**: `DiscoveryOptions`, `CampaignOptions`, `PointOfContact`
//! - **Validation**: input checks run before any request is built
//! - **Models**: typed views of the JSON the service returns
//!
//! # Wire format
//!
//! Caller-facing fields are snake_case; the service speaks camelCase JSON.
//! Each request payload renames its fields explicitly, so the mapping is
//! fixed at compile time rather than computed at runtime.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod endpoints;
pub mod error;
pub mod models;
pub mod options;
pub mod validate;

pub use error::{ApiError, Error, Result, ValidationError};
pub use models::{
    BusinessBranding, BusinessChannel, BusinessChannelType, BusinessCompatibilityScore,
    BusinessContacts, BusinessObject, BusinessProfile, Campaign, CampaignFeedback,
    CampaignObject, CompatibilityReasoning, Competitor, ConfidenceScore,
};
pub use options::{CampaignOptions, CampaignType, DiscoveryOptions, PointOfContact};
