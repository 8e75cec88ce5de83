//! Linked (sub-merchant) account onboarding data.
//!
//! A campaign owner is registered with the gateway as a linked account so that
//! donations can be routed to them. The owner's details form a fixed tree;
//! individual leaves are addressed through [`OnboardingField`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use validator::Validate;

static PAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap());

static IFSC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{4}0[A-Z0-9]{6}$").unwrap());

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{8,15}$").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Address {
    #[validate(length(min = 1, max = 100))]
    pub street1: String,
    #[serde(default)]
    pub street2: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(length(min = 1, max = 100))]
    pub state: String,
    #[validate(length(min = 1, max = 10))]
    pub postal_code: String,
    #[validate(length(equal = 2))]
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct Addresses {
    #[validate(nested)]
    pub registered: Address,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct BusinessProfile {
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(length(min = 1))]
    pub subcategory: String,
    #[validate(nested)]
    pub addresses: Addresses,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct LegalInfo {
    #[validate(regex(path = "*PAN_REGEX", message = "PAN must look like ABCDE1234F"))]
    pub pan: String,
    #[serde(default)]
    pub gst: String,
}

/// Bank account that receives settlements for the linked account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct SettlementDetails {
    #[validate(length(min = 6, max = 20))]
    pub account_number: String,
    #[validate(regex(path = "*IFSC_REGEX", message = "Invalid IFSC code"))]
    pub ifsc_code: String,
}

/// Everything needed to onboard a campaign owner as a linked account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LinkedAccountRequest {
    #[validate(email)]
    pub email: String,
    #[validate(regex(path = "*PHONE_REGEX", message = "Phone must be 8-15 digits"))]
    pub phone: String,
    #[validate(length(min = 4, max = 200))]
    pub legal_business_name: String,
    #[serde(default)]
    pub customer_facing_business_name: String,
    #[validate(length(min = 4, max = 255))]
    pub contact_name: String,
    #[validate(length(min = 1))]
    pub business_type: String,
    #[serde(default)]
    #[validate(length(max = 512))]
    pub reference_id: String,
    #[validate(nested)]
    pub profile: BusinessProfile,
    #[validate(nested)]
    pub legal_info: LegalInfo,
    #[validate(nested)]
    pub settlement: SettlementDetails,
}

impl Default for LinkedAccountRequest {
    fn default() -> Self {
        Self {
            email: String::new(),
            phone: String::new(),
            legal_business_name: String::new(),
            customer_facing_business_name: String::new(),
            contact_name: String::new(),
            business_type: String::new(),
            reference_id: String::new(),
            profile: BusinessProfile {
                addresses: Addresses {
                    registered: Address {
                        country: "IN".to_string(),
                        ..Address::default()
                    },
                },
                ..BusinessProfile::default()
            },
            legal_info: LegalInfo::default(),
            settlement: SettlementDetails::default(),
        }
    }
}

/// A settable leaf of [`LinkedAccountRequest`], named by its dotted path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnboardingField {
    Email,
    Phone,
    LegalBusinessName,
    CustomerFacingBusinessName,
    ContactName,
    BusinessType,
    ReferenceId,
    Category,
    Subcategory,
    Street1,
    Street2,
    City,
    State,
    PostalCode,
    Country,
    Pan,
    Gst,
    AccountNumber,
    IfscCode,
}

impl OnboardingField {
    pub const ALL: [OnboardingField; 19] = [
        Self::LegalBusinessName,
        Self::CustomerFacingBusinessName,
        Self::ContactName,
        Self::Email,
        Self::Phone,
        Self::BusinessType,
        Self::ReferenceId,
        Self::Category,
        Self::Subcategory,
        Self::Street1,
        Self::Street2,
        Self::City,
        Self::State,
        Self::PostalCode,
        Self::Country,
        Self::Pan,
        Self::Gst,
        Self::AccountNumber,
        Self::IfscCode,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::LegalBusinessName => "legal_business_name",
            Self::CustomerFacingBusinessName => "customer_facing_business_name",
            Self::ContactName => "contact_name",
            Self::BusinessType => "business_type",
            Self::ReferenceId => "reference_id",
            Self::Category => "profile.category",
            Self::Subcategory => "profile.subcategory",
            Self::Street1 => "profile.addresses.registered.street1",
            Self::Street2 => "profile.addresses.registered.street2",
            Self::City => "profile.addresses.registered.city",
            Self::State => "profile.addresses.registered.state",
            Self::PostalCode => "profile.addresses.registered.postal_code",
            Self::Country => "profile.addresses.registered.country",
            Self::Pan => "legal_info.pan",
            Self::Gst => "legal_info.gst",
            Self::AccountNumber => "settlement.account_number",
            Self::IfscCode => "settlement.ifsc_code",
        }
    }

    /// Human-readable label for prompts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::LegalBusinessName => "Legal business name",
            Self::CustomerFacingBusinessName => "Customer-facing business name",
            Self::ContactName => "Contact name",
            Self::BusinessType => "Business type",
            Self::ReferenceId => "Reference id",
            Self::Category => "Category",
            Self::Subcategory => "Subcategory",
            Self::Street1 => "Street (line 1)",
            Self::Street2 => "Street (line 2)",
            Self::City => "City",
            Self::State => "State",
            Self::PostalCode => "Postal code",
            Self::Country => "Country (ISO 3166 alpha-2)",
            Self::Pan => "PAN",
            Self::Gst => "GST",
            Self::AccountNumber => "Bank account number",
            Self::IfscCode => "IFSC code",
        }
    }

    /// Fields that may be left empty.
    pub fn is_optional(self) -> bool {
        matches!(
            self,
            Self::CustomerFacingBusinessName | Self::ReferenceId | Self::Street2 | Self::Gst
        )
    }
}

impl fmt::Display for OnboardingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown onboarding field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for OnboardingField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.path() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

impl LinkedAccountRequest {
    /// Mutable handle to the leaf named by `field`.
    fn slot(&mut self, field: OnboardingField) -> &mut String {
        let address = &mut self.profile.addresses.registered;
        match field {
            OnboardingField::Email => &mut self.email,
            OnboardingField::Phone => &mut self.phone,
            OnboardingField::LegalBusinessName => &mut self.legal_business_name,
            OnboardingField::CustomerFacingBusinessName => {
                &mut self.customer_facing_business_name
            }
            OnboardingField::ContactName => &mut self.contact_name,
            OnboardingField::BusinessType => &mut self.business_type,
            OnboardingField::ReferenceId => &mut self.reference_id,
            OnboardingField::Category => &mut self.profile.category,
            OnboardingField::Subcategory => &mut self.profile.subcategory,
            OnboardingField::Street1 => &mut address.street1,
            OnboardingField::Street2 => &mut address.street2,
            OnboardingField::City => &mut address.city,
            OnboardingField::State => &mut address.state,
            OnboardingField::PostalCode => &mut address.postal_code,
            OnboardingField::Country => &mut address.country,
            OnboardingField::Pan => &mut self.legal_info.pan,
            OnboardingField::Gst => &mut self.legal_info.gst,
            OnboardingField::AccountNumber => &mut self.settlement.account_number,
            OnboardingField::IfscCode => &mut self.settlement.ifsc_code,
        }
    }

    /// Sets one leaf field.
    pub fn set(&mut self, field: OnboardingField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    /// Reads one leaf field.
    pub fn get(&self, field: OnboardingField) -> &str {
        let address = &self.profile.addresses.registered;
        match field {
            OnboardingField::Email => &self.email,
            OnboardingField::Phone => &self.phone,
            OnboardingField::LegalBusinessName => &self.legal_business_name,
            OnboardingField::CustomerFacingBusinessName => &self.customer_facing_business_name,
            OnboardingField::ContactName => &self.contact_name,
            OnboardingField::BusinessType => &self.business_type,
            OnboardingField::ReferenceId => &self.reference_id,
            OnboardingField::Category => &self.profile.category,
            OnboardingField::Subcategory => &self.profile.subcategory,
            OnboardingField::Street1 => &address.street1,
            OnboardingField::Street2 => &address.street2,
            OnboardingField::City => &address.city,
            OnboardingField::State => &address.state,
            OnboardingField::PostalCode => &address.postal_code,
            OnboardingField::Country => &address.country,
            OnboardingField::Pan => &self.legal_info.pan,
            OnboardingField::Gst => &self.legal_info.gst,
            OnboardingField::AccountNumber => &self.settlement.account_number,
            OnboardingField::IfscCode => &self.settlement.ifsc_code,
        }
    }
}

/// A linked account as created by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedAccount {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Stakeholder (the individual behind the linked account) as created by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stakeholder {
    pub id: String,
}

/// Product configuration attached to a linked account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductConfiguration {
    pub id: String,
    #[serde(default)]
    pub activation_status: Option<String>,
}

/// Outcome of the full onboarding sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OnboardingResult {
    pub account: LinkedAccount,
    pub stakeholder: Stakeholder,
    pub product: ProductConfiguration,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_request() -> LinkedAccountRequest {
        let mut req = LinkedAccountRequest::default();
        for (field, value) in [
            (OnboardingField::Email, "owner@spikers.example.org"),
            (OnboardingField::Phone, "9876543210"),
            (OnboardingField::LegalBusinessName, "Spikers Trust"),
            (OnboardingField::ContactName, "R. Kumar"),
            (OnboardingField::BusinessType, "trust"),
            (OnboardingField::Category, "education"),
            (OnboardingField::Subcategory, "sports"),
            (OnboardingField::Street1, "12 Court Road"),
            (OnboardingField::City, "Madurai"),
            (OnboardingField::State, "TAMIL NADU"),
            (OnboardingField::PostalCode, "625001"),
            (OnboardingField::Pan, "ABCDE1234F"),
            (OnboardingField::AccountNumber, "1234567890"),
            (OnboardingField::IfscCode, "HDFC0001234"),
        ] {
            req.set(field, value);
        }
        req
    }

    #[test]
    fn test_default_country_is_india() {
        let req = LinkedAccountRequest::default();
        assert_eq!(req.get(OnboardingField::Country), "IN");
    }

    #[test]
    fn test_set_nested_field() {
        let mut req = LinkedAccountRequest::default();
        req.set(OnboardingField::City, "Kochi");
        req.set(OnboardingField::Pan, "ABCDE1234F");

        assert_eq!(req.profile.addresses.registered.city, "Kochi");
        assert_eq!(req.legal_info.pan, "ABCDE1234F");
    }

    #[test]
    fn test_every_field_roundtrips_through_path() {
        for field in OnboardingField::ALL {
            assert_eq!(field.path().parse::<OnboardingField>(), Ok(field));
        }
    }

    #[test]
    fn test_every_field_is_independent() {
        let mut req = LinkedAccountRequest::default();
        for (i, field) in OnboardingField::ALL.into_iter().enumerate() {
            req.set(field, format!("v{i}"));
        }
        for (i, field) in OnboardingField::ALL.into_iter().enumerate() {
            assert_eq!(req.get(field), format!("v{i}"));
        }
    }

    #[test]
    fn test_unknown_path_rejected() {
        let err = "profile.addresses.billing.city"
            .parse::<OnboardingField>()
            .unwrap_err();
        assert_eq!(err.0, "profile.addresses.billing.city");
    }

    #[test]
    fn test_complete_request_is_valid() {
        assert!(complete_request().validate().is_ok());
    }

    #[test]
    fn test_invalid_pan_rejected() {
        let mut req = complete_request();
        req.set(OnboardingField::Pan, "abcde1234f");
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_invalid_ifsc_rejected() {
        let mut req = complete_request();
        req.set(OnboardingField::IfscCode, "HDFC1001234");
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut req = complete_request();
        req.set(OnboardingField::Email, "not-an-email");
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_optional_fields() {
        assert!(OnboardingField::Gst.is_optional());
        assert!(!OnboardingField::Pan.is_optional());
    }
}
