//! Gateway-injected identity headers extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

use safai_domain::role::Role;

/// Caller identity injected by the gateway via `x-safai-user-id`,
/// `x-safai-user-role`, and (for staff) `x-safai-area-code` headers.
///
/// Returns 401 if the user id is absent or not a UUID, or if the role is
/// absent or unknown. Permission enforcement (403) is done by handlers
/// after extraction.
#[derive(Debug, Clone)]
pub struct IdentityHeaders {
    pub user_id: Uuid,
    pub role: Role,
    pub area_code: Option<String>,
}

impl<S> FromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let user_id = parts
            .headers
            .get("x-safai-user-id")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<Uuid>().ok());

        let role = parts
            .headers
            .get("x-safai-user-role")
            .and_then(|v| v.to_str().ok())
            .and_then(Role::from_str);

        let area_code = parts
            .headers
            .get("x-safai-area-code")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        async move {
            let user_id = user_id.ok_or(StatusCode::UNAUTHORIZED)?;
            let role = role.ok_or(StatusCode::UNAUTHORIZED)?;
            Ok(Self {
                user_id,
                role,
                area_code,
            })
        }
    }
}
