//! Provider-session fixture builders.

use uuid::Uuid;

use safai_domain::session::{SessionMetadata, UserSession};

/// A signed-in citizen session with a username hint and no area code.
pub fn citizen_session(user_id: Uuid, username: &str) -> UserSession {
    UserSession {
        user_id,
        email: format!("{username}@example.com"),
        metadata: SessionMetadata {
            username: Some(username.to_owned()),
            role: None,
            area_code: None,
        },
    }
}

/// A signed-in staff session carrying role and area-code hints.
pub fn staff_session(user_id: Uuid, username: &str, role: &str, area_code: &str) -> UserSession {
    UserSession {
        user_id,
        email: format!("{username}@example.com"),
        metadata: SessionMetadata {
            username: Some(username.to_owned()),
            role: Some(role.to_owned()),
            area_code: Some(area_code.to_owned()),
        },
    }
}

/// A session with no metadata hints at all, as issued for bare email signup.
pub fn bare_session(user_id: Uuid, email: &str) -> UserSession {
    UserSession {
        user_id,
        email: email.to_owned(),
        metadata: SessionMetadata::default(),
    }
}
