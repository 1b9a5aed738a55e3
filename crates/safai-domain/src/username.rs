//! Username validation.

/// Validate a username: 3–30 chars, ASCII alphanumeric or underscore only.
///
/// Uniqueness is case-insensitive and enforced by the profiles store, not
/// here; this only gates the character set and length.
pub fn validate_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }
    username
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
