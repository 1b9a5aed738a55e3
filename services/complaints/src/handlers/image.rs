use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use serde::Serialize;

use safai_session_types::identity::IdentityHeaders;

use crate::domain::repository::ImageStore as _;
use crate::error::ComplaintsServiceError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct UploadedImageResponse {
    pub url: String,
}

// ── POST /complaints/images ──────────────────────────────────────────────────

/// Accepts the first `file` part of the multipart body and stores it,
/// returning the public URL to embed in a complaint.
pub async fn upload_image(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadedImageResponse>), ComplaintsServiceError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ComplaintsServiceError::MissingField("file"))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload").to_owned();
        let bytes = field
            .bytes()
            .await
            .map_err(|_| ComplaintsServiceError::MissingField("file"))?;
        if bytes.is_empty() {
            return Err(ComplaintsServiceError::ImageRequired);
        }

        let url = state.image_store().upload(bytes, &filename).await?;
        return Ok((StatusCode::CREATED, Json(UploadedImageResponse { url })));
    }
    Err(ComplaintsServiceError::MissingField("file"))
}
