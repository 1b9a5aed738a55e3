//! Provider session-token validation.
//!
//! The identity provider issues HS256 JWTs whose claims carry the user id,
//! email, and the unvalidated signup-time metadata hints. Only the token
//! format is consumed here; issuing and refreshing stay with the provider.

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::Deserialize;
#[cfg(test)]
use serde::Serialize;
use uuid::Uuid;

use safai_domain::session::{SessionMetadata, UserSession};

/// Errors returned by [`decode_session_token`].
#[derive(Debug, thiserror::Error)]
pub enum SessionTokenError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

/// Claims payload of a provider session token.
///
/// `user_metadata` mirrors what the client supplied at signup — `role`,
/// `area_code`, and `username` hints. It is opaque to the provider and
/// never trusted over a resolved profile.
#[derive(Debug, Deserialize)]
#[cfg_attr(test, derive(Serialize))]
pub struct SessionClaims {
    /// User ID (UUID string).
    pub sub: String,
    /// Account email.
    pub email: String,
    /// Signup-time hints; absent for providers that strip metadata.
    #[serde(default)]
    pub user_metadata: SessionMetadata,
    /// Expiration timestamp (seconds since UNIX epoch).
    pub exp: u64,
}

/// Decode and validate a provider session token.
///
/// Validation: HS256, exp checked, required claims `exp` + `sub`.
/// Default leeway = 60s — tolerates clock skew against the provider.
pub fn decode_session_token(token: &str, secret: &str) -> Result<UserSession, SessionTokenError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionTokenError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => SessionTokenError::InvalidSignature,
        _ => SessionTokenError::Malformed,
    })?;

    let user_id = data
        .claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| SessionTokenError::Malformed)?;

    Ok(UserSession {
        user_id,
        email: data.claims.email,
        metadata: data.claims.user_metadata,
    })
}
