use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use safai_domain::complaint::ComplaintStatus;
use safai_session_types::identity::IdentityHeaders;

use crate::domain::types::{Complaint, NewComplaint};
use crate::error::ComplaintsServiceError;
use crate::state::AppState;
use crate::usecase::complaint::{
    CreateComplaintUseCase, DeleteComplaintUseCase, ListAreaComplaintsUseCase,
    ListOwnerComplaintsUseCase, UpdateStatusInput, UpdateStatusUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ComplaintResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub location: String,
    pub pincode: String,
    pub description: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_image_url: Option<String>,
    pub status: ComplaintStatus,
    #[serde(serialize_with = "safai_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "safai_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Complaint> for ComplaintResponse {
    fn from(c: Complaint) -> Self {
        ComplaintResponse {
            id: c.id,
            user_id: c.user_id,
            title: c.title,
            location: c.location,
            pincode: c.pincode,
            description: c.description,
            image_url: c.image_url,
            after_image_url: c.after_image_url,
            status: c.status,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ComplaintListQuery {
    pub area_code: Option<String>,
    pub status: Option<String>,
}

// ── GET /complaints ──────────────────────────────────────────────────────────

/// Area listing for the dashboards. `area-code` defaults to the caller's own
/// area; a caller without one gets an empty list.
pub async fn get_area_complaints(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Vec<ComplaintResponse>>, ComplaintsServiceError> {
    let query: ComplaintListQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| ComplaintsServiceError::MissingField("query"))?
        .unwrap_or_default();

    let status = query
        .status
        .as_deref()
        .map(|s| ComplaintStatus::from_str(s).ok_or(ComplaintsServiceError::InvalidStatus))
        .transpose()?;

    let area_code = query
        .area_code
        .or(identity.area_code)
        .unwrap_or_default();

    let uc = ListAreaComplaintsUseCase {
        repo: state.complaint_repo(),
    };
    let complaints = uc.execute(&area_code, status).await?;
    Ok(Json(
        complaints.into_iter().map(ComplaintResponse::from).collect(),
    ))
}

// ── GET /complaints/@me ──────────────────────────────────────────────────────

pub async fn get_my_complaints(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<ComplaintResponse>>, ComplaintsServiceError> {
    let uc = ListOwnerComplaintsUseCase {
        repo: state.complaint_repo(),
    };
    let complaints = uc.execute(identity.user_id).await?;
    Ok(Json(
        complaints.into_iter().map(ComplaintResponse::from).collect(),
    ))
}

// ── POST /complaints ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateComplaintRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

pub async fn create_complaint(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateComplaintRequest>,
) -> Result<(StatusCode, Json<ComplaintResponse>), ComplaintsServiceError> {
    let uc = CreateComplaintUseCase {
        repo: state.complaint_repo(),
    };
    let complaint = uc
        .execute(NewComplaint {
            user_id: identity.user_id,
            title: body.title,
            location: body.location,
            pincode: body.pincode,
            description: body.description,
            image_url: body.image_url,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(complaint.into())))
}

// ── PATCH /complaints/{id}/status ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
    pub after_image_url: Option<String>,
}

pub async fn update_complaint_status(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<StatusCode, ComplaintsServiceError> {
    let status = ComplaintStatus::from_str(&body.status)
        .ok_or(ComplaintsServiceError::InvalidStatus)?;

    let uc = UpdateStatusUseCase {
        repo: state.complaint_repo(),
    };
    uc.execute(UpdateStatusInput {
        id,
        caller_role: identity.role,
        caller_area: identity.area_code,
        status,
        after_image_url: body.after_image_url,
    })
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /complaints/{id} ──────────────────────────────────────────────────

pub async fn delete_complaint(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ComplaintsServiceError> {
    let uc = DeleteComplaintUseCase {
        repo: state.complaint_repo(),
        images: state.image_store(),
    };
    uc.execute(id, identity.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
