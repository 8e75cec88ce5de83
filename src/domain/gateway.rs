//! Payment gateway contract.
//!
//! Each method is a single direct call to the hosted gateway. Callers get the
//! gateway's answer or an [`AppError::Upstream`]; nothing is retried and
//! nothing is recorded locally.

use async_trait::async_trait;

use crate::domain::entities::{
    LinkedAccount, LinkedAccountRequest, NewOrder, Order, ProductConfiguration,
    SettlementDetails, Stakeholder,
};
use crate::error::AppError;

/// Operations the service needs from the payment gateway.
///
/// # Implementations
///
/// - [`crate::infrastructure::gateway::RazorpayClient`] - Razorpay REST API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Creates a checkout order.
    async fn create_order(&self, order: &NewOrder) -> Result<Order, AppError>;

    /// Registers a campaign owner as a linked account.
    async fn create_linked_account(
        &self,
        request: &LinkedAccountRequest,
    ) -> Result<LinkedAccount, AppError>;

    /// Attaches the owner as the stakeholder of a linked account.
    async fn create_stakeholder(
        &self,
        account_id: &str,
        request: &LinkedAccountRequest,
    ) -> Result<Stakeholder, AppError>;

    /// Requests the fund-routing product for a linked account.
    async fn request_route_product(
        &self,
        account_id: &str,
    ) -> Result<ProductConfiguration, AppError>;

    /// Sets the settlement bank account on a product configuration.
    async fn update_settlements(
        &self,
        account_id: &str,
        product_id: &str,
        settlement: &SettlementDetails,
        beneficiary_name: &str,
    ) -> Result<ProductConfiguration, AppError>;
}
