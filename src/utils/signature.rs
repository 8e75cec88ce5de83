//! Payment callback signature verification.
//!
//! The gateway signs `order_id|payment_id` with HMAC-SHA256 keyed by the
//! merchant key secret and sends the lowercase hex digest alongside the ids.

use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Length of a hex-encoded HMAC-SHA256 tag.
const SIGNATURE_HEX_LEN: usize = 64;

/// Result of checking a payment callback against the shared secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthenticationOutcome {
    Authentic,
    Forged,
}

impl AuthenticationOutcome {
    pub fn is_authentic(self) -> bool {
        self == Self::Authentic
    }

    /// Label used for logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Authentic => "authentic",
            Self::Forged => "forged",
        }
    }
}

/// Computes the expected callback signature for an order/payment pair.
///
/// Returns a 64-character lowercase hex-encoded MAC over `order_id|payment_id`.
pub fn compute_signature(order_id: &str, payment_id: &str, secret: &str) -> String {
    hex::encode(callback_mac(order_id, payment_id, secret).finalize().into_bytes())
}

/// Verifies a callback signature.
///
/// `Authentic` only when `signature` is exactly the lowercase hex digest that
/// [`compute_signature`] would produce. Uppercase hex, wrong length or
/// anything undecodable is `Forged`. The digest comparison itself runs in
/// constant time.
pub fn verify_callback(
    order_id: &str,
    payment_id: &str,
    signature: &str,
    secret: &str,
) -> AuthenticationOutcome {
    if signature.len() != SIGNATURE_HEX_LEN
        || !signature
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    {
        return AuthenticationOutcome::Forged;
    }

    let Ok(tag) = hex::decode(signature) else {
        return AuthenticationOutcome::Forged;
    };

    match callback_mac(order_id, payment_id, secret).verify_slice(&tag) {
        Ok(()) => AuthenticationOutcome::Authentic,
        Err(_) => AuthenticationOutcome::Forged,
    }
}

/// Verifies a callback whose fields may be missing.
///
/// Any absent field is `Forged`.
pub fn verify_callback_fields(
    order_id: Option<&str>,
    payment_id: Option<&str>,
    signature: Option<&str>,
    secret: &str,
) -> AuthenticationOutcome {
    match (order_id, payment_id, signature) {
        (Some(order_id), Some(payment_id), Some(signature)) => {
            verify_callback(order_id, payment_id, signature, secret)
        }
        _ => AuthenticationOutcome::Forged,
    }
}

fn callback_mac(order_id: &str, payment_id: &str, secret: &str) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    mac
}
