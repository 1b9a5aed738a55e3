//! Session-change event feed types.
//!
//! The provider posts one webhook per auth event. `SIGNED_IN` and
//! `TOKEN_REFRESHED` carry a session token; `SIGNED_OUT` carries nothing.

use serde::Deserialize;

use safai_domain::session::UserSession;

/// Raw webhook body as posted by the provider.
#[derive(Debug, Deserialize)]
pub struct SessionEventPayload {
    pub event: String,
    pub session_token: Option<String>,
}

/// Event kind discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEventKind {
    SignedIn,
    TokenRefreshed,
    SignedOut,
}

impl SessionEventKind {
    /// Parse the provider's SCREAMING_SNAKE event names.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "SIGNED_IN" => Some(Self::SignedIn),
            "TOKEN_REFRESHED" => Some(Self::TokenRefreshed),
            "SIGNED_OUT" => Some(Self::SignedOut),
            _ => None,
        }
    }
}

/// A decoded session-change event, ready for the session container queue.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    SignedIn(UserSession),
    TokenRefreshed(UserSession),
    SignedOut,
}
