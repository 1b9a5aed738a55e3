//! Identity-provider session types.
//!
//! A [`UserSession`] is what the provider attests about a signed-in user.
//! The metadata hints are supplied by the client at signup time and are
//! unvalidated — a resolved profile always takes precedence over them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unvalidated signup-time hints carried in the provider session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMetadata {
    pub username: Option<String>,
    pub role: Option<String>,
    pub area_code: Option<String>,
}

/// An authenticated identity-provider session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: Uuid,
    pub email: String,
    #[serde(default)]
    pub metadata: SessionMetadata,
}
