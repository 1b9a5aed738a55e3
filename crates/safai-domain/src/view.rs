//! The merged user view.
//!
//! A [`UserView`] is the in-memory identity the rest of the system reads:
//! provider session fields merged with the persisted profile. It is
//! recomputed wholesale on every session change and never mutated in place.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::role::Role;
use crate::session::UserSession;

/// Resolved-profile projection used for merging.
///
/// Carries only the fields the merge cares about; the owning service keeps
/// the full persisted record (timestamps and all) to itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub username: String,
    pub role: Role,
    pub area_code: String,
}

/// Merged session + profile identity.
///
/// `profile_synced` is false when the view was built from session metadata
/// alone, either because no profile row exists yet or because the profile
/// fetch failed and the system fell back to the hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub role: Role,
    pub area_code: String,
    pub profile_synced: bool,
}

impl UserView {
    /// Merge per field: profile value, then session-metadata value, then
    /// default (`role` → `user`, `area_code` → `""`, `username` → `""`).
    ///
    /// Profile precedence is canonical: once a profile row exists, signup
    /// hints in the session metadata are ignored.
    pub fn merge(session: &UserSession, profile: Option<&ProfileView>) -> Self {
        let meta = &session.metadata;
        match profile {
            Some(p) => Self {
                id: session.user_id,
                email: session.email.clone(),
                username: p.username.clone(),
                role: p.role,
                area_code: p.area_code.clone(),
                profile_synced: true,
            },
            None => Self {
                id: session.user_id,
                email: session.email.clone(),
                username: meta.username.clone().unwrap_or_default(),
                role: meta
                    .role
                    .as_deref()
                    .and_then(Role::from_str)
                    .unwrap_or_default(),
                area_code: meta.area_code.clone().unwrap_or_default(),
                profile_synced: false,
            },
        }
    }
}
