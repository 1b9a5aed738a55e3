//! Area-code (pincode) validation.

/// Validate a pincode: exactly six ASCII digits.
///
/// The pincode is the routing key that maps a complaint to the
/// municipal/NGO account responsible for that area. Matching is always
/// exact — no trimming or normalization happens anywhere downstream, so
/// malformed values must be rejected at the boundary.
pub fn validate_pincode(pincode: &str) -> bool {
    pincode.len() == 6 && pincode.bytes().all(|b| b.is_ascii_digit())
}
