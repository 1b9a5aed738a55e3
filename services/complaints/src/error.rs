use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Complaints service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ComplaintsServiceError {
    #[error("complaint not found")]
    ComplaintNotFound,
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("invalid pincode")]
    InvalidPincode,
    #[error("photo required")]
    ImageRequired,
    #[error("resolution photo required")]
    AfterPhotoRequired,
    #[error("invalid status")]
    InvalidStatus,
    #[error("forbidden")]
    Forbidden,
    #[error("image upload is not configured")]
    UploadNotConfigured,
    #[error("image upload failed")]
    UploadFailed(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ComplaintsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ComplaintNotFound => "COMPLAINT_NOT_FOUND",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidPincode => "INVALID_PINCODE",
            Self::ImageRequired => "IMAGE_REQUIRED",
            Self::AfterPhotoRequired => "AFTER_PHOTO_REQUIRED",
            Self::InvalidStatus => "INVALID_STATUS",
            Self::Forbidden => "FORBIDDEN",
            Self::UploadNotConfigured => "UPLOAD_NOT_CONFIGURED",
            Self::UploadFailed(_) => "UPLOAD_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ComplaintsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::ComplaintNotFound => StatusCode::NOT_FOUND,
            Self::MissingField(_)
            | Self::InvalidPincode
            | Self::ImageRequired
            | Self::AfterPhotoRequired
            | Self::InvalidStatus => StatusCode::BAD_REQUEST,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UploadNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::UploadFailed(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        match &self {
            Self::Internal(e) => {
                tracing::error!(error = %e, kind = "INTERNAL", "internal error");
            }
            Self::UploadFailed(e) => {
                tracing::error!(error = %e, kind = "UPLOAD_FAILED", "image upload failed");
            }
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
