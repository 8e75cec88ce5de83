#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde_json::json;
use std::sync::{Arc, Mutex};
use volley_fund::application::services::ProfileService;
use volley_fund::domain::entities::{
    Campaign, LinkedAccount, LinkedAccountRequest, NewCampaign, NewOrder, OnboardingField,
    Order, ProductConfiguration, SettlementDetails, Stakeholder,
};
use volley_fund::domain::gateway::PaymentGateway;
use volley_fund::domain::repositories::CampaignRepository;
use volley_fund::error::AppError;
use volley_fund::infrastructure::profiles::parse_profiles;
use volley_fund::state::AppState;

pub const KEY_ID: &str = "rzp_test_key";
pub const KEY_SECRET: &str = "test_key_secret";

/// In-memory campaign store.
#[derive(Default)]
pub struct FakeCampaignRepository {
    campaigns: Mutex<Vec<Campaign>>,
    unavailable: bool,
}

impl FakeCampaignRepository {
    /// A repository that fails every call, like a lost database connection.
    pub fn unavailable() -> Self {
        Self {
            campaigns: Mutex::default(),
            unavailable: true,
        }
    }

    /// Seeds `count` campaigns with ids `1..=count`, oldest first.
    pub fn with_campaigns(count: i32) -> Self {
        let start = Utc::now() - Duration::days(i64::from(count));
        let campaigns = (1..=count)
            .map(|id| {
                Campaign::new(
                    id,
                    format!("Campaign {id}"),
                    format!("Description {id}"),
                    None,
                    start + Duration::days(i64::from(id)),
                    None,
                )
            })
            .collect();

        Self {
            campaigns: Mutex::new(campaigns),
            unavailable: false,
        }
    }

    fn check(&self) -> Result<(), AppError> {
        if self.unavailable {
            return Err(AppError::internal(
                "Database error",
                json!({ "reason": "connection refused" }),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CampaignRepository for FakeCampaignRepository {
    async fn create(&self, new_campaign: NewCampaign) -> Result<Campaign, AppError> {
        self.check()?;
        let mut campaigns = self.campaigns.lock().unwrap();
        let campaign = Campaign::new(
            campaigns.len() as i32 + 1,
            new_campaign.title,
            new_campaign.description,
            new_campaign.image_url,
            Utc::now(),
            None,
        );
        campaigns.push(campaign.clone());
        Ok(campaign)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Campaign>, AppError> {
        self.check()?;
        let campaigns = self.campaigns.lock().unwrap();
        Ok(campaigns.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Campaign>, AppError> {
        self.check()?;
        let mut campaigns = self.campaigns.lock().unwrap().clone();
        campaigns.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(campaigns
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        self.check()?;
        Ok(self.campaigns.lock().unwrap().len() as i64)
    }
}

/// Onboarding step at which [`FakeGateway`] starts failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Never,
    Order,
    Account,
    Stakeholder,
    Product,
    Settlements,
}

/// Gateway double that records calls and answers with canned ids.
pub struct FakeGateway {
    fail_at: FailAt,
    calls: Mutex<Vec<String>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::failing_at(FailAt::Never)
    }

    pub fn failing_at(fail_at: FailAt) -> Self {
        Self {
            fail_at,
            calls: Mutex::default(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn step(&self, step: FailAt, name: &str) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(name.to_string());
        if self.fail_at == step {
            return Err(AppError::upstream(
                format!("{name} rejected"),
                json!({ "status": 400 }),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl PaymentGateway for FakeGateway {
    async fn create_order(&self, order: &NewOrder) -> Result<Order, AppError> {
        self.step(FailAt::Order, "create_order")?;
        Ok(Order {
            id: "order_test_1".to_string(),
            amount: order.amount,
            currency: order.currency.clone(),
            receipt: Some(order.receipt.clone()),
            status: "created".to_string(),
        })
    }

    async fn create_linked_account(
        &self,
        _request: &LinkedAccountRequest,
    ) -> Result<LinkedAccount, AppError> {
        self.step(FailAt::Account, "create_linked_account")?;
        Ok(LinkedAccount {
            id: "acc_test_1".to_string(),
            status: Some("created".to_string()),
        })
    }

    async fn create_stakeholder(
        &self,
        account_id: &str,
        _request: &LinkedAccountRequest,
    ) -> Result<Stakeholder, AppError> {
        self.step(FailAt::Stakeholder, &format!("create_stakeholder:{account_id}"))?;
        Ok(Stakeholder {
            id: "sth_test_1".to_string(),
        })
    }

    async fn request_route_product(
        &self,
        account_id: &str,
    ) -> Result<ProductConfiguration, AppError> {
        self.step(FailAt::Product, &format!("request_route_product:{account_id}"))?;
        Ok(ProductConfiguration {
            id: "acc_prd_test_1".to_string(),
            activation_status: Some("requested".to_string()),
        })
    }

    async fn update_settlements(
        &self,
        account_id: &str,
        product_id: &str,
        _settlement: &SettlementDetails,
        beneficiary_name: &str,
    ) -> Result<ProductConfiguration, AppError> {
        self.step(
            FailAt::Settlements,
            &format!("update_settlements:{account_id}:{product_id}:{beneficiary_name}"),
        )?;
        Ok(ProductConfiguration {
            id: product_id.to_string(),
            activation_status: Some("activated".to_string()),
        })
    }
}

fn profile_json(id: i64, slug: &str, video: Option<&str>) -> serde_json::Value {
    json!({
        "id": id,
        "slug": slug,
        "name": format!("Profile {id}"),
        "shortDescription": "Volleyball for everyone",
        "ytVideo": video,
        "imageUrl": "/static/img/profile.jpg",
        "type": "org",
        "tag": "VERIFIED",
        "founder": {
            "name": "Founder",
            "title": "Coach",
            "imageUrl": "/static/img/founder.jpg",
            "bio": ["Played for the state team."],
            "quote": { "text": "Play on.", "attribution": "Founder" }
        },
        "sections": {
            "ourMission": { "heading": "Our Mission", "paragraphs": ["Courts for all."] },
            "whatWeDo": {
                "heading": "What We Do",
                "items": [{ "title": "Coaching", "description": "Weekend camps" }]
            },
            "supportUs": { "heading": "Support Us", "description": "Donate a ball." }
        }
    })
}

/// Three profiles: a valid watch link, an unsupported host, and no video.
pub fn test_profiles() -> ProfileService {
    let raw = json!([
        profile_json(1, "spikers-trust", Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=30")),
        profile_json(2, "vimeo-club", Some("https://vimeo.com/76979871")),
        profile_json(3, "quiet-club", None),
    ])
    .to_string();

    ProfileService::new(parse_profiles(&raw).unwrap())
}

pub fn create_state_with(
    repository: Arc<dyn CampaignRepository>,
    gateway: Arc<dyn PaymentGateway>,
    profiles: ProfileService,
) -> AppState {
    AppState::new(repository, gateway, profiles, KEY_ID, KEY_SECRET, "INR")
}

pub fn create_test_state() -> AppState {
    create_state_with(
        Arc::new(FakeCampaignRepository::with_campaigns(3)),
        Arc::new(FakeGateway::new()),
        test_profiles(),
    )
}

/// An onboarding request that passes validation.
pub fn complete_account_request() -> LinkedAccountRequest {
    let mut req = LinkedAccountRequest::default();
    for (field, value) in [
        (OnboardingField::Email, "owner@example.org"),
        (OnboardingField::Phone, "9876543210"),
        (OnboardingField::LegalBusinessName, "Spikers Trust"),
        (OnboardingField::ContactName, "R. Kumar"),
        (OnboardingField::BusinessType, "trust"),
        (OnboardingField::Category, "education"),
        (OnboardingField::Subcategory, "sports"),
        (OnboardingField::Street1, "12 Court Road"),
        (OnboardingField::City, "Madurai"),
        (OnboardingField::State, "Tamil Nadu"),
        (OnboardingField::PostalCode, "625001"),
        (OnboardingField::Pan, "ABCDE1234F"),
        (OnboardingField::AccountNumber, "1234567890"),
        (OnboardingField::IfscCode, "HDFC0001234"),
    ] {
        req.set(field, value);
    }
    req
}
