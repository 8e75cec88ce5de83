//! Razorpay REST client.

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

use crate::domain::entities::{
    LinkedAccount, LinkedAccountRequest, NewOrder, Order, ProductConfiguration,
    SettlementDetails, Stakeholder,
};
use crate::domain::gateway::PaymentGateway;
use crate::error::AppError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Product that enables splitting payments to linked accounts.
const ROUTE_PRODUCT: &str = "route";

/// Client handle for the Razorpay API.
///
/// Built once at startup and shared through [`crate::state::AppState`].
/// Authenticates every call with HTTP basic auth (`key_id:key_secret`).
pub struct RazorpayClient {
    http: reqwest::Client,
    base_url: String,
    key_id: String,
    key_secret: String,
}

impl RazorpayClient {
    /// Creates a client for the given API base (e.g. `https://api.razorpay.com`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(
        base_url: impl Into<String>,
        key_id: impl Into<String>,
        key_secret: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("volley-fund/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            key_id: key_id.into(),
            key_secret: key_secret.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn call<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        tracing::debug!(method = method.as_str(), path, "Gateway request");

        let response = self
            .http
            .request(method, self.url(path))
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(gateway_error(status, path, &body));
        }

        Ok(response.json::<T>().await?)
    }
}

#[derive(Deserialize)]
struct GatewayErrorBody {
    error: GatewayErrorDetail,
}

#[derive(Deserialize)]
struct GatewayErrorDetail {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    field: Option<String>,
}

/// Maps a non-2xx gateway response to [`AppError::Upstream`].
fn gateway_error(status: StatusCode, path: &str, body: &str) -> AppError {
    tracing::warn!(status = status.as_u16(), path, "Gateway returned an error");

    match serde_json::from_str::<GatewayErrorBody>(body) {
        Ok(GatewayErrorBody { error }) => AppError::upstream(
            error
                .description
                .unwrap_or_else(|| "Payment gateway rejected the request".to_string()),
            json!({
                "status": status.as_u16(),
                "code": error.code,
                "field": error.field,
            }),
        ),
        Err(_) => AppError::upstream(
            "Payment gateway rejected the request",
            json!({ "status": status.as_u16() }),
        ),
    }
}

#[derive(Serialize)]
struct AccountBody<'a> {
    email: &'a str,
    phone: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    reference_id: &'a str,
    legal_business_name: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    customer_facing_business_name: &'a str,
    business_type: &'a str,
    contact_name: &'a str,
    profile: &'a crate::domain::entities::linked_account::BusinessProfile,
    legal_info: LegalInfoBody<'a>,
}

#[derive(Serialize)]
struct LegalInfoBody<'a> {
    pan: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    gst: &'a str,
}

impl<'a> From<&'a LinkedAccountRequest> for AccountBody<'a> {
    fn from(r: &'a LinkedAccountRequest) -> Self {
        Self {
            email: &r.email,
            phone: &r.phone,
            kind: ROUTE_PRODUCT,
            reference_id: &r.reference_id,
            legal_business_name: &r.legal_business_name,
            customer_facing_business_name: &r.customer_facing_business_name,
            business_type: &r.business_type,
            contact_name: &r.contact_name,
            profile: &r.profile,
            legal_info: LegalInfoBody {
                pan: &r.legal_info.pan,
                gst: &r.legal_info.gst,
            },
        }
    }
}

#[derive(Serialize)]
struct StakeholderBody<'a> {
    name: &'a str,
    email: &'a str,
    phone: PhoneBody<'a>,
    addresses: ResidentialBody<'a>,
    kyc: KycBody<'a>,
}

#[derive(Serialize)]
struct PhoneBody<'a> {
    primary: &'a str,
    secondary: &'a str,
}

#[derive(Serialize)]
struct ResidentialBody<'a> {
    residential: StakeholderAddress<'a>,
}

#[derive(Serialize)]
struct StakeholderAddress<'a> {
    street: &'a str,
    city: &'a str,
    state: &'a str,
    postal_code: &'a str,
    country: &'a str,
}

#[derive(Serialize)]
struct KycBody<'a> {
    pan: &'a str,
}

impl<'a> From<&'a LinkedAccountRequest> for StakeholderBody<'a> {
    fn from(r: &'a LinkedAccountRequest) -> Self {
        let address = &r.profile.addresses.registered;
        Self {
            name: &r.contact_name,
            email: &r.email,
            phone: PhoneBody {
                primary: &r.phone,
                secondary: "",
            },
            addresses: ResidentialBody {
                residential: StakeholderAddress {
                    street: &address.street1,
                    city: &address.city,
                    state: &address.state,
                    postal_code: &address.postal_code,
                    country: &address.country,
                },
            },
            kyc: KycBody {
                pan: &r.legal_info.pan,
            },
        }
    }
}

#[derive(Serialize)]
struct ProductRequestBody {
    product_name: &'static str,
    tnc_accepted: bool,
}

#[derive(Serialize)]
struct SettlementUpdateBody<'a> {
    settlements: SettlementsBody<'a>,
    tnc_accepted: bool,
}

#[derive(Serialize)]
struct SettlementsBody<'a> {
    account_number: &'a str,
    ifsc_code: &'a str,
    beneficiary_name: &'a str,
}

#[async_trait]
impl PaymentGateway for RazorpayClient {
    async fn create_order(&self, order: &NewOrder) -> Result<Order, AppError> {
        self.call(Method::POST, "/v1/orders", order).await
    }

    async fn create_linked_account(
        &self,
        request: &LinkedAccountRequest,
    ) -> Result<LinkedAccount, AppError> {
        self.call(Method::POST, "/v2/accounts", &AccountBody::from(request))
            .await
    }

    async fn create_stakeholder(
        &self,
        account_id: &str,
        request: &LinkedAccountRequest,
    ) -> Result<Stakeholder, AppError> {
        let path = format!("/v2/accounts/{account_id}/stakeholders");
        self.call(Method::POST, &path, &StakeholderBody::from(request))
            .await
    }

    async fn request_route_product(
        &self,
        account_id: &str,
    ) -> Result<ProductConfiguration, AppError> {
        let path = format!("/v2/accounts/{account_id}/products");
        let body = ProductRequestBody {
            product_name: ROUTE_PRODUCT,
            tnc_accepted: true,
        };
        self.call(Method::POST, &path, &body).await
    }

    async fn update_settlements(
        &self,
        account_id: &str,
        product_id: &str,
        settlement: &SettlementDetails,
        beneficiary_name: &str,
    ) -> Result<ProductConfiguration, AppError> {
        let path = format!("/v2/accounts/{account_id}/products/{product_id}");
        let body = SettlementUpdateBody {
            settlements: SettlementsBody {
                account_number: &settlement.account_number,
                ifsc_code: &settlement.ifsc_code,
                beneficiary_name,
            },
            tnc_accepted: true,
        };
        self.call(Method::PATCH, &path, &body).await
    }
}
