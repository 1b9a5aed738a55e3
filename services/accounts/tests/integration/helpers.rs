use std::sync::{Arc, Mutex};

use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use safai_accounts::domain::repository::{InsertOutcome, ProfileRepository};
use safai_accounts::domain::types::Profile;
use safai_accounts::error::AccountsServiceError;
use safai_domain::session::UserSession;

// ── MemoryProfileRepo ────────────────────────────────────────────────────────

/// In-memory profile store enforcing the same uniqueness rules as the
/// database schema: one row per user id, case-insensitive usernames.
#[derive(Clone, Default)]
pub struct MemoryProfileRepo {
    pub rows: Arc<Mutex<Vec<Profile>>>,
}

impl MemoryProfileRepo {
    pub fn seeded(rows: Vec<Profile>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
        }
    }
}

impl ProfileRepository for MemoryProfileRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, AccountsServiceError> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, profile: &Profile) -> Result<InsertOutcome, AccountsServiceError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|p| p.id == profile.id) {
            return Ok(InsertOutcome::IdConflict);
        }
        if rows
            .iter()
            .any(|p| p.username.eq_ignore_ascii_case(&profile.username))
        {
            return Ok(InsertOutcome::UsernameConflict);
        }
        rows.push(profile.clone());
        Ok(InsertOutcome::Inserted)
    }
}

// ── Session token helpers ────────────────────────────────────────────────────

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-integration-tests";

/// Sign a provider session token the way the identity provider would.
pub fn issue_session_token(session: &UserSession, secret: &str, exp: u64) -> String {
    let claims = serde_json::json!({
        "sub": session.user_id.to_string(),
        "email": session.email,
        "user_metadata": session.metadata,
        "exp": exp,
    });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

pub fn future_exp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs()
        + 3600
}
