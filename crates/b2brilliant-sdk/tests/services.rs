//! Resource service integration tests.

mod common;

use b2brilliant_sdk::{CampaignOptions, CampaignType, DiscoveryOptions, PointOfContact};
use common::{business, urls, TestHarness, TEST_API_KEY};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn ok(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

// ============================================================================
// User
// ============================================================================

#[tokio::test]
async fn user_discover_with_urls_only() {
    let harness = TestHarness::new().await;
    let response = json!({"name": "Test Business", "industry": "Tech"});
    Mock::given(method("POST"))
        .and(path("/api/v1/user/discover"))
        .and(header("x-api-key", TEST_API_KEY))
        .and(body_json(json!({"urls": ["https://example.com"]})))
        .respond_with(ok(response.clone()))
        .expect(1)
        .mount(&harness.server)
        .await;

    let result = harness
        .agent
        .user()
        .discover(&urls("https://example.com"), &DiscoveryOptions::default())
        .await
        .unwrap();

    assert_eq!(result, response);
}

#[tokio::test]
async fn user_discover_translates_options() {
    let harness = TestHarness::new().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/user/discover"))
        .and(body_json(json!({
            "urls": ["https://example.com"],
            "findCompetitors": true,
            "findBranding": false,
            "deepSearch": true
        })))
        .respond_with(ok(json!({"name": "Test Business"})))
        .expect(1)
        .mount(&harness.server)
        .await;

    let options = DiscoveryOptions::new()
        .with_find_competitors(true)
        .with_find_branding(false)
        .with_deep_search(true);
    harness
        .agent
        .user()
        .discover(&urls("https://example.com"), &options)
        .await
        .unwrap();
}

#[tokio::test]
async fn user_discover_translates_point_of_contact() {
    let harness = TestHarness::new().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/user/discover"))
        .and(body_json(json!({
            "urls": ["https://example.com"],
            "pointOfContact": {"name": "John Doe", "position": "CEO"}
        })))
        .respond_with(ok(json!({"name": "Test Business"})))
        .expect(1)
        .mount(&harness.server)
        .await;

    let options =
        DiscoveryOptions::new().with_point_of_contact(&PointOfContact::new("John Doe", "CEO"));
    harness
        .agent
        .user()
        .discover(&urls("https://example.com"), &options)
        .await
        .unwrap();
}

#[tokio::test]
async fn user_discover_empty_urls_never_sends() {
    let harness = TestHarness::new().await;
    harness.expect_no_requests().await;

    let err = harness
        .agent
        .user()
        .discover(&[], &DiscoveryOptions::default())
        .await
        .unwrap_err();

    let validation = err.as_validation().expect("expected a validation error");
    assert!(validation.message.contains("URLs must be a non-empty list"));
    assert!(validation.validation_errors.contains_key("urls"));
    assert!(harness.request_bodies().await.is_empty());
}

#[tokio::test]
async fn user_discover_invalid_point_of_contact_never_sends() {
    let harness = TestHarness::new().await;
    harness.expect_no_requests().await;

    let options = DiscoveryOptions::new().with_point_of_contact_value(json!("invalid"));
    let err = harness
        .agent
        .user()
        .discover(&urls("https://example.com"), &options)
        .await
        .unwrap_err();

    let validation = err.as_validation().unwrap();
    assert!(validation.message.contains("point_of_contact must be a dictionary"));
    assert!(validation.validation_errors.contains_key("point_of_contact"));
}

#[tokio::test]
async fn user_refine_success() {
    let harness = TestHarness::new().await;
    let business_data = business("Test Business");
    let response = json!({"name": "Refined Business", "industry": "Tech"});
    Mock::given(method("POST"))
        .and(path("/api/v1/user/refine"))
        .and(body_json(json!({
            "businessData": business_data,
            "additionalInfo": "Additional information"
        })))
        .respond_with(ok(response.clone()))
        .expect(1)
        .mount(&harness.server)
        .await;

    let result = harness
        .agent
        .user()
        .refine(&business_data, "Additional information")
        .await
        .unwrap();

    assert_eq!(result, response);
}

#[tokio::test]
async fn user_refine_rejects_business_data_the_same_way() {
    let harness = TestHarness::new().await;
    harness.expect_no_requests().await;

    let mut errors = Vec::new();
    for bad in [Value::Null, json!("invalid"), json!({})] {
        let err = harness
            .agent
            .user()
            .refine(&bad, "Additional info")
            .await
            .unwrap_err();
        errors.push(err.as_validation().unwrap().clone());
    }

    assert_eq!(errors[0].message, "business_data must be a dictionary");
    assert!(errors[0].validation_errors.contains_key("business_data"));
    assert_eq!(errors[0], errors[1]);
    assert_eq!(errors[1], errors[2]);
}

#[tokio::test]
async fn user_refine_rejects_empty_additional_info() {
    let harness = TestHarness::new().await;
    harness.expect_no_requests().await;

    let err = harness
        .agent
        .user()
        .refine(&business("Test Business"), "")
        .await
        .unwrap_err();

    let validation = err.as_validation().unwrap();
    assert!(validation.message.contains("additional_info must be a non-empty string"));
    assert!(validation.validation_errors.contains_key("additional_info"));
}

#[tokio::test]
async fn discover_twice_sends_identical_payloads() {
    let harness = TestHarness::new().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/user/discover"))
        .respond_with(ok(json!({"name": "Test Business"})))
        .expect(2)
        .mount(&harness.server)
        .await;

    let urls = urls("https://example.com");
    let options = DiscoveryOptions::new().with_deep_search(true);
    let first = harness.agent.user().discover(&urls, &options).await.unwrap();
    let second = harness.agent.user().discover(&urls, &options).await.unwrap();

    assert_eq!(first, second);
    let bodies = harness.request_bodies().await;
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(
        bodies[0],
        json!({"urls": ["https://example.com"], "deepSearch": true})
    );
}

#[tokio::test]
async fn api_errors_pass_through_services() {
    let harness = TestHarness::new().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/user/discover"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid API key"})),
        )
        .mount(&harness.server)
        .await;

    let err = harness
        .agent
        .user()
        .discover(&urls("https://example.com"), &DiscoveryOptions::default())
        .await
        .unwrap_err();

    let api = err.as_api().unwrap();
    assert_eq!(api.status, 401);
    assert_eq!(api.message, "Invalid API key");
}

// ============================================================================
// Business
// ============================================================================

#[tokio::test]
async fn business_discover_uses_business_endpoint() {
    let harness = TestHarness::new().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/business/discover"))
        .and(body_json(json!({
            "urls": ["https://target.com"],
            "findCompetitors": true
        })))
        .respond_with(ok(json!({"name": "Target"})))
        .expect(1)
        .mount(&harness.server)
        .await;

    let result = harness
        .agent
        .business()
        .discover(
            &urls("https://target.com"),
            &DiscoveryOptions::new().with_find_competitors(true),
        )
        .await
        .unwrap();

    assert_eq!(result, json!({"name": "Target"}));
}

#[tokio::test]
async fn business_discover_empty_urls_never_sends() {
    let harness = TestHarness::new().await;
    harness.expect_no_requests().await;

    let err = harness
        .agent
        .business()
        .discover(&[], &DiscoveryOptions::default())
        .await
        .unwrap_err();

    assert!(err.as_validation().unwrap().validation_errors.contains_key("urls"));
}

#[tokio::test]
async fn business_refine_uses_business_endpoint() {
    let harness = TestHarness::new().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/business/refine"))
        .and(body_json(json!({
            "businessData": business("Target"),
            "additionalInfo": "They sell to hospitals"
        })))
        .respond_with(ok(json!({"name": "Target"})))
        .expect(1)
        .mount(&harness.server)
        .await;

    harness
        .agent
        .business()
        .refine(&business("Target"), "They sell to hospitals")
        .await
        .unwrap();
}

#[tokio::test]
async fn business_compatibility_sends_both_businesses() {
    let harness = TestHarness::new().await;
    let score = json!({"score": 0.85, "reasoning": "Good match"});
    Mock::given(method("POST"))
        .and(path("/api/v1/business/compatibility"))
        .and(body_json(json!({
            "userBusiness": business("Acme"),
            "targetBusiness": business("Globex")
        })))
        .respond_with(ok(score.clone()))
        .expect(1)
        .mount(&harness.server)
        .await;

    let result = harness
        .agent
        .business()
        .compatibility(&business("Acme"), &business("Globex"))
        .await
        .unwrap();

    assert_eq!(result, score);
}

#[tokio::test]
async fn business_compatibility_validates_each_business() {
    let harness = TestHarness::new().await;
    harness.expect_no_requests().await;

    let err = harness
        .agent
        .business()
        .compatibility(&json!({}), &business("Globex"))
        .await
        .unwrap_err();
    assert_eq!(
        err.as_validation().unwrap().message,
        "user_business must be a dictionary"
    );

    let err = harness
        .agent
        .business()
        .compatibility(&business("Acme"), &Value::Null)
        .await
        .unwrap_err();
    assert!(err
        .as_validation()
        .unwrap()
        .validation_errors
        .contains_key("target_business"));
}

// ============================================================================
// Campaigns
// ============================================================================

#[tokio::test]
async fn campaign_create_without_types() {
    let harness = TestHarness::new().await;
    let campaigns = json!({"campaigns": [{"type": "email", "content": "Hello"}]});
    Mock::given(method("POST"))
        .and(path("/api/v1/campaigns/create"))
        .and(body_json(json!({
            "userBusiness": business("Acme"),
            "targetBusiness": business("Globex")
        })))
        .respond_with(ok(campaigns.clone()))
        .expect(1)
        .mount(&harness.server)
        .await;

    let result = harness
        .agent
        .campaigns()
        .create(&business("Acme"), &business("Globex"), &CampaignOptions::new())
        .await
        .unwrap();

    assert_eq!(result, campaigns);
}

#[tokio::test]
async fn campaign_create_with_types() {
    let harness = TestHarness::new().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/campaigns/create"))
        .and(body_json(json!({
            "userBusiness": business("Acme"),
            "targetBusiness": business("Globex"),
            "campaignTypes": ["dm", "sms"]
        })))
        .respond_with(ok(json!({"campaigns": []})))
        .expect(1)
        .mount(&harness.server)
        .await;

    let options = CampaignOptions::new().with_campaign_types([CampaignType::Dm, CampaignType::Sms]);
    harness
        .agent
        .campaigns()
        .create(&business("Acme"), &business("Globex"), &options)
        .await
        .unwrap();
}

#[tokio::test]
async fn campaign_create_rejects_empty_types() {
    let harness = TestHarness::new().await;
    harness.expect_no_requests().await;

    let options = CampaignOptions::new().with_campaign_types(Vec::new());
    let err = harness
        .agent
        .campaigns()
        .create(&business("Acme"), &business("Globex"), &options)
        .await
        .unwrap_err();

    assert_eq!(
        err.as_validation().unwrap().message,
        "campaign_types must be a non-empty list"
    );
}

#[tokio::test]
async fn campaign_refine_sends_campaign_data() {
    let harness = TestHarness::new().await;
    let campaign = json!({"campaigns": [{"type": "email", "content": "Hello"}]});
    Mock::given(method("POST"))
        .and(path("/api/v1/campaigns/refine"))
        .and(body_json(json!({
            "campaignData": campaign,
            "additionalInfo": "Shorter, please"
        })))
        .respond_with(ok(json!({"campaigns": []})))
        .expect(1)
        .mount(&harness.server)
        .await;

    harness
        .agent
        .campaigns()
        .refine(&campaign, "Shorter, please")
        .await
        .unwrap();
}

#[tokio::test]
async fn campaign_refine_validates_inputs() {
    let harness = TestHarness::new().await;
    harness.expect_no_requests().await;

    let err = harness
        .agent
        .campaigns()
        .refine(&json!([]), "Shorter, please")
        .await
        .unwrap_err();
    assert_eq!(
        err.as_validation().unwrap().message,
        "campaign_data must be a dictionary"
    );

    let err = harness
        .agent
        .campaigns()
        .refine(&json!({"campaigns": []}), "")
        .await
        .unwrap_err();
    assert!(err
        .as_validation()
        .unwrap()
        .validation_errors
        .contains_key("additional_info"));
}
