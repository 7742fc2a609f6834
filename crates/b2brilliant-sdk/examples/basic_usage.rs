//! Discover two businesses, score them, and generate campaigns.
//!
//! Run with `B2BRILLIANT_API_KEY` set:
//!
//! ```text
//! cargo run -p b2brilliant-sdk --example basic_usage
//! ```

use b2brilliant_sdk::models::{BusinessCompatibilityScore, CampaignObject};
use b2brilliant_sdk::{B2BrilliantAgent, CampaignOptions, CampaignType, DiscoveryOptions, Error};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let agent = B2BrilliantAgent::from_env()?;

    let options = DiscoveryOptions::new()
        .with_find_competitors(true)
        .with_find_branding(true);

    let mine = agent
        .user()
        .discover(&["https://your-business.example".to_string()], &options)
        .await?;
    let theirs = agent
        .business()
        .discover(&["https://target-business.example".to_string()], &options)
        .await?;

    let score: BusinessCompatibilityScore =
        serde_json::from_value(agent.business().compatibility(&mine, &theirs).await?)?;
    println!("Compatibility {}: {:?}", score.score, score.reasoning.positives);

    let options = CampaignOptions::new().with_campaign_types([CampaignType::Email]);
    match agent.campaigns().create(&mine, &theirs, &options).await {
        Ok(value) => {
            let campaigns: CampaignObject = serde_json::from_value(value)?;
            for campaign in campaigns.campaigns {
                println!("[{:?}] {}", campaign.kind, campaign.content);
            }
        }
        Err(Error::Api(err)) if err.is_http() => {
            eprintln!("API rejected the request ({}): {}", err.status, err.message);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
