use anyhow::anyhow;
use rand::RngExt as _;
use uuid::Uuid;

use safai_domain::area::validate_pincode;
use safai_domain::role::Role;
use safai_domain::username::validate_username;

use crate::domain::repository::{InsertOutcome, ProfileRepository};
use crate::domain::types::Profile;
use crate::error::AccountsServiceError;

/// Insert attempts per creation, counting the unsuffixed first try.
pub const CREATE_PROFILE_ATTEMPTS: usize = 3;

// ── FetchProfile ─────────────────────────────────────────────────────────────

pub struct FetchProfileUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> FetchProfileUseCase<R> {
    /// `None` means no profile row exists; store failures propagate.
    pub async fn execute(&self, user_id: Uuid) -> Result<Option<Profile>, AccountsServiceError> {
        self.repo.find_by_id(user_id).await
    }
}

// ── CreateProfile ────────────────────────────────────────────────────────────

pub struct CreateProfileInput {
    pub user_id: Uuid,
    pub username: String,
    pub role: Option<Role>,
    pub area_code: Option<String>,
}

/// Idempotent-intent profile creation.
///
/// An existing profile for the same user id is returned unchanged — there
/// are no update-on-conflict semantics for re-creation. Username conflicts
/// (case-insensitive, enforced by the database constraint) are retried with
/// a random numeric suffix up to [`CREATE_PROFILE_ATTEMPTS`] attempts.
pub struct CreateProfileUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> CreateProfileUseCase<R> {
    pub async fn execute(
        &self,
        input: CreateProfileInput,
    ) -> Result<Profile, AccountsServiceError> {
        if let Some(existing) = self.repo.find_by_id(input.user_id).await? {
            return Ok(existing);
        }
        if !validate_username(&input.username) {
            return Err(AccountsServiceError::InvalidUsername);
        }
        let role = input.role.unwrap_or_default();
        let area_code = input.area_code.unwrap_or_default();
        // Staff accounts are routed by area; a malformed code would make the
        // account unreachable from every dashboard query.
        if role.is_staff() && !validate_pincode(&area_code) {
            return Err(AccountsServiceError::InvalidAreaCode);
        }

        let mut username = input.username.clone();
        for _ in 0..CREATE_PROFILE_ATTEMPTS {
            let profile = Profile::new(input.user_id, username.clone(), role, area_code.clone());
            match self.repo.insert(&profile).await? {
                InsertOutcome::Inserted => return Ok(profile),
                InsertOutcome::IdConflict => {
                    // Lost a race against another creation for the same
                    // account; the winner's row is the profile of record.
                    return self
                        .repo
                        .find_by_id(input.user_id)
                        .await?
                        .ok_or_else(|| anyhow!("profile vanished after id conflict").into());
                }
                InsertOutcome::UsernameConflict => {
                    tracing::warn!(username = %username, "username taken, retrying with suffix");
                    username = suffixed_username(&input.username);
                }
            }
        }
        Err(AccountsServiceError::UsernameTaken)
    }
}

/// `base` plus a random 3-digit suffix, truncated so the result stays within
/// the 30-char username limit.
fn suffixed_username(base: &str) -> String {
    let n: u16 = rand::rng().random_range(100..1000);
    let cut = base.len().min(27);
    format!("{}{n}", &base[..cut])
}
