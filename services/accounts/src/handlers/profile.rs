use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use safai_domain::role::Role;
use safai_session_types::identity::IdentityHeaders;

use crate::domain::types::Profile;
use crate::error::AccountsServiceError;
use crate::state::AppState;
use crate::usecase::profile::{CreateProfileInput, CreateProfileUseCase, FetchProfileUseCase};

#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub username: String,
    pub account_type: Role,
    pub area_code: String,
    #[serde(serialize_with = "safai_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "safai_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id.to_string(),
            username: p.username,
            account_type: p.role,
            area_code: p.area_code,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

// ── POST /profiles ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateProfileRequest {
    pub username: String,
    pub role: Option<Role>,
    pub area_code: Option<String>,
}

pub async fn create_profile(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>), AccountsServiceError> {
    let usecase = CreateProfileUseCase {
        repo: state.profile_repo(),
    };
    let profile = usecase
        .execute(CreateProfileInput {
            user_id: identity.user_id,
            username: body.username,
            role: body.role,
            area_code: body.area_code,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(profile.into())))
}

// ── GET /profiles/@me ────────────────────────────────────────────────────────

pub async fn get_me(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, AccountsServiceError> {
    let usecase = FetchProfileUseCase {
        repo: state.profile_repo(),
    };
    let profile = usecase
        .execute(identity.user_id)
        .await?
        .ok_or(AccountsServiceError::ProfileNotFound)?;
    Ok(Json(profile.into()))
}
