//! Receipt identifiers attached to gateway orders.

use base64::Engine as _;

/// Random bytes before base64 encoding.
const RECEIPT_BYTES: usize = 12;

/// Prefix that marks receipts issued by this service.
const RECEIPT_PREFIX: &str = "rcpt_";

/// Generates a random receipt id such as `rcpt_3q2-7wEVr4Xb8Fk1`.
///
/// The gateway caps receipts at 40 characters; this produces 21.
///
/// # Panics
///
/// Panics if the system random number generator fails.
pub fn generate_receipt() -> String {
    let mut buffer = [0u8; RECEIPT_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    format!(
        "{RECEIPT_PREFIX}{}",
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
    )
}
