//! B2Brilliant Client SDK.
//!
//! Typed access to the B2Brilliant campaign API: discover businesses, score
//! compatibility between them, and generate outreach campaigns.
//!
//! # Example
//!
//! ```no_run
//! use b2brilliant_sdk::{B2BrilliantAgent, CampaignOptions, DiscoveryOptions};
//!
//! # async fn example() -> Result<(), b2brilliant_sdk::Error> {
//! let agent = B2BrilliantAgent::new("your-api-key")?;
//!
//! let urls = vec!["https://your-company.example".to_string()];
//! let user_business = agent
//!     .user()
//!     .discover(&urls, &DiscoveryOptions::new().with_find_branding(true))
//!     .await?;
//!
//! let targets = vec!["https://target.example".to_string()];
//! let target_business = agent.business().discover(&targets, &DiscoveryOptions::new()).await?;
//!
//! let score = agent
//!     .business()
//!     .compatibility(&user_business, &target_business)
//!     .await?;
//! println!("compatibility: {}", score["score"]);
//!
//! let campaigns = agent
//!     .campaigns()
//!     .create(&user_business, &target_business, &CampaignOptions::new())
//!     .await?;
//! println!("{campaigns}");
//! # Ok(())
//! # }
//! ```
//!
//! Responses are returned as `serde_json::Value` exactly as the service sent
//! them. The typed models re-exported from `b2brilliant_core` can be used with
//! `serde_json::from_value` when a fixed shape is wanted.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod agent;
mod client;
mod config;
mod services;

pub use agent::B2BrilliantAgent;
pub use client::ApiClient;
pub use config::{AgentConfig, ClientOptions, API_KEY_VAR, BASE_URL_VAR, TIMEOUT_SECONDS_VAR};
pub use services::{BusinessService, CampaignService, UserService};

pub use b2brilliant_core::{
    endpoints, models, ApiError, CampaignOptions, CampaignType, DiscoveryOptions, Error,
    PointOfContact, Result, ValidationError,
};
