use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Accounts service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum AccountsServiceError {
    #[error("profile not found")]
    ProfileNotFound,
    #[error("username taken")]
    UsernameTaken,
    #[error("invalid username")]
    InvalidUsername,
    #[error("invalid area code")]
    InvalidAreaCode,
    #[error("invalid event")]
    InvalidEvent,
    #[error("invalid session token")]
    InvalidSessionToken,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AccountsServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::InvalidUsername => "INVALID_USERNAME",
            Self::InvalidAreaCode => "INVALID_AREA_CODE",
            Self::InvalidEvent => "INVALID_EVENT",
            Self::InvalidSessionToken => "INVALID_SESSION_TOKEN",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AccountsServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::ProfileNotFound => StatusCode::NOT_FOUND,
            Self::UsernameTaken => StatusCode::CONFLICT,
            Self::InvalidUsername
            | Self::InvalidAreaCode
            | Self::InvalidEvent
            | Self::InvalidSessionToken => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
