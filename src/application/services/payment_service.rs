//! Checkout, callback verification and linked-account onboarding.

use std::sync::Arc;

use validator::Validate;

use crate::domain::entities::{
    CallbackPayload, LinkedAccountRequest, NewOrder, OnboardingResult, Order,
};
use crate::domain::gateway::PaymentGateway;
use crate::error::AppError;
use crate::utils::receipt::generate_receipt;
use crate::utils::signature::{AuthenticationOutcome, verify_callback_fields};

/// Payment operations backed by a [`PaymentGateway`].
///
/// Holds the gateway key secret used to authenticate checkout callbacks.
/// The secret never leaves this struct and is never logged.
pub struct PaymentService<G: PaymentGateway + ?Sized> {
    gateway: Arc<G>,
    key_secret: String,
    currency: String,
}

impl<G: PaymentGateway + ?Sized> PaymentService<G> {
    pub fn new(gateway: Arc<G>, key_secret: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            gateway,
            key_secret: key_secret.into(),
            currency: currency.into(),
        }
    }

    /// Currency every order is created in.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Creates a gateway order for `amount` (smallest currency unit) with a
    /// fresh receipt id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the gateway call fails.
    pub async fn create_order(&self, amount: u64) -> Result<Order, AppError> {
        let new_order = NewOrder {
            amount,
            currency: self.currency.clone(),
            receipt: generate_receipt(),
        };

        let order = self.gateway.create_order(&new_order).await?;

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(order_id = %order.id, amount, "Order created");

        Ok(order)
    }

    /// Authenticates a checkout callback against the configured key secret.
    pub fn verify_callback(&self, payload: &CallbackPayload) -> AuthenticationOutcome {
        let outcome = verify_callback_fields(
            payload.order_id.as_deref(),
            payload.payment_id.as_deref(),
            payload.signature.as_deref(),
            &self.key_secret,
        );

        metrics::counter!("payment_callbacks_total", "outcome" => outcome.as_str()).increment(1);

        match outcome {
            AuthenticationOutcome::Authentic => {
                tracing::info!(order_id = payload.order_id.as_deref(), "Payment callback verified");
            }
            AuthenticationOutcome::Forged => {
                tracing::warn!(order_id = payload.order_id.as_deref(), "Payment callback rejected");
            }
        }

        outcome
    }

    /// Onboards a campaign owner as a linked account.
    ///
    /// Runs account creation, stakeholder creation, route product request and
    /// settlement update in order. The first failing step aborts the sequence;
    /// earlier steps are not rolled back.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the request is incomplete and
    /// [`AppError::Upstream`] if any gateway step fails.
    pub async fn onboard(&self, request: &LinkedAccountRequest) -> Result<OnboardingResult, AppError> {
        request.validate()?;

        let account = self.gateway.create_linked_account(request).await?;
        tracing::info!(account_id = %account.id, "Linked account created");

        let stakeholder = self.gateway.create_stakeholder(&account.id, request).await?;

        let product = self.gateway.request_route_product(&account.id).await?;

        let product = self
            .gateway
            .update_settlements(
                &account.id,
                &product.id,
                &request.settlement,
                &request.contact_name,
            )
            .await?;
        tracing::info!(
            account_id = %account.id,
            product_id = %product.id,
            "Linked account settlements configured"
        );

        Ok(OnboardingResult {
            account,
            stakeholder,
            product,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{
        LinkedAccount, OnboardingField, ProductConfiguration, Stakeholder,
    };
    use crate::domain::gateway::MockPaymentGateway;
    use crate::utils::signature::compute_signature;
    use serde_json::json;

    const SECRET: &str = "test_key_secret";

    fn service(gateway: MockPaymentGateway) -> PaymentService<MockPaymentGateway> {
        PaymentService::new(Arc::new(gateway), SECRET, "INR")
    }

    fn complete_request() -> LinkedAccountRequest {
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

    fn product(id: &str, status: &str) -> ProductConfiguration {
        ProductConfiguration {
            id: id.to_string(),
            activation_status: Some(status.to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_order_uses_configured_currency() {
        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_create_order()
            .withf(|o| o.amount == 50_000 && o.currency == "INR" && o.receipt.starts_with("rcpt_"))
            .times(1)
            .returning(|o| {
                Ok(Order {
                    id: "order_1".to_string(),
                    amount: o.amount,
                    currency: o.currency.clone(),
                    receipt: Some(o.receipt.clone()),
                    status: "created".to_string(),
                })
            });

        let order = service(gateway).create_order(50_000).await.unwrap();
        assert_eq!(order.id, "order_1");
        assert_eq!(order.amount, 50_000);
    }

    #[tokio::test]
    async fn test_create_order_propagates_gateway_error() {
        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_create_order()
            .times(1)
            .returning(|_| Err(AppError::upstream("gateway down", json!({}))));

        let err = service(gateway).create_order(100).await.unwrap_err();
        assert!(matches!(err, AppError::Upstream { .. }));
    }

    #[test]
    fn test_verify_callback_authentic() {
        let payload = CallbackPayload {
            order_id: Some("order_1".to_string()),
            payment_id: Some("pay_1".to_string()),
            signature: Some(compute_signature("order_1", "pay_1", SECRET)),
        };

        let outcome = service(MockPaymentGateway::new()).verify_callback(&payload);
        assert_eq!(outcome, AuthenticationOutcome::Authentic);
    }

    #[test]
    fn test_verify_callback_wrong_secret() {
        let payload = CallbackPayload {
            order_id: Some("order_1".to_string()),
            payment_id: Some("pay_1".to_string()),
            signature: Some(compute_signature("order_1", "pay_1", "other_secret")),
        };

        let outcome = service(MockPaymentGateway::new()).verify_callback(&payload);
        assert_eq!(outcome, AuthenticationOutcome::Forged);
    }

    #[test]
    fn test_verify_callback_missing_fields() {
        let outcome = service(MockPaymentGateway::new()).verify_callback(&CallbackPayload::default());
        assert_eq!(outcome, AuthenticationOutcome::Forged);
    }

    #[tokio::test]
    async fn test_onboard_runs_full_sequence() {
        let mut gateway = MockPaymentGateway::new();
        let mut seq = mockall::Sequence::new();

        gateway
            .expect_create_linked_account()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(LinkedAccount {
                    id: "acc_1".to_string(),
                    status: Some("created".to_string()),
                })
            });
        gateway
            .expect_create_stakeholder()
            .withf(|account_id, _| account_id == "acc_1")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(Stakeholder { id: "sth_1".to_string() }));
        gateway
            .expect_request_route_product()
            .withf(|account_id| account_id == "acc_1")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(product("acc_prd_1", "requested")));
        gateway
            .expect_update_settlements()
            .withf(|account_id, product_id, settlement, beneficiary| {
                account_id == "acc_1"
                    && product_id == "acc_prd_1"
                    && settlement.ifsc_code == "HDFC0001234"
                    && beneficiary == "R. Kumar"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _, _| Ok(product("acc_prd_1", "activated")));

        let result = service(gateway).onboard(&complete_request()).await.unwrap();

        assert_eq!(result.account.id, "acc_1");
        assert_eq!(result.stakeholder.id, "sth_1");
        assert_eq!(result.product.activation_status.as_deref(), Some("activated"));
    }

    #[tokio::test]
    async fn test_onboard_stops_at_first_failure() {
        let mut gateway = MockPaymentGateway::new();
        gateway.expect_create_linked_account().times(1).returning(|_| {
            Ok(LinkedAccount {
                id: "acc_1".to_string(),
                status: None,
            })
        });
        gateway
            .expect_create_stakeholder()
            .times(1)
            .returning(|_, _| Err(AppError::upstream("Invalid PAN", json!({ "status": 400 }))));
        gateway.expect_request_route_product().times(0);
        gateway.expect_update_settlements().times(0);

        let err = service(gateway).onboard(&complete_request()).await.unwrap_err();
        assert!(matches!(err, AppError::Upstream { .. }));
    }

    #[tokio::test]
    async fn test_onboard_rejects_invalid_request_before_gateway() {
        let mut gateway = MockPaymentGateway::new();
        gateway.expect_create_linked_account().times(0);

        let mut request = complete_request();
        request.set(OnboardingField::Pan, "not-a-pan");

        let err = service(gateway).onboard(&request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
