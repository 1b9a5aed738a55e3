use axum::{Json, extract::Query, extract::State, http::StatusCode};
use serde::Deserialize;

use safai_domain::guard::{self, RouteDecision};
use safai_session_types::event::{SessionEvent, SessionEventKind, SessionEventPayload};
use safai_session_types::token::decode_session_token;

use crate::error::AccountsServiceError;
use crate::session::AuthSnapshot;
use crate::state::AppState;

// ── POST /session/events ─────────────────────────────────────────────────────

/// Provider webhook. Events are enqueued and applied by the container task
/// in arrival order; 202 means accepted, not yet applied.
pub async fn post_session_event(
    State(state): State<AppState>,
    Json(payload): Json<SessionEventPayload>,
) -> Result<StatusCode, AccountsServiceError> {
    let kind = SessionEventKind::from_str(&payload.event)
        .ok_or(AccountsServiceError::InvalidEvent)?;

    let event = match kind {
        SessionEventKind::SignedOut => SessionEvent::SignedOut,
        SessionEventKind::SignedIn | SessionEventKind::TokenRefreshed => {
            let token = payload
                .session_token
                .as_deref()
                .ok_or(AccountsServiceError::InvalidSessionToken)?;
            let session = decode_session_token(token, &state.session_jwt_secret)
                .map_err(|_| AccountsServiceError::InvalidSessionToken)?;
            match kind {
                SessionEventKind::SignedIn => SessionEvent::SignedIn(session),
                _ => SessionEvent::TokenRefreshed(session),
            }
        }
    };

    state.container.send(event).await?;
    Ok(StatusCode::ACCEPTED)
}

// ── GET /session ─────────────────────────────────────────────────────────────

pub async fn get_session(State(state): State<AppState>) -> Json<AuthSnapshot> {
    Json(state.container.snapshot())
}

// ── GET /session/guard ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GuardQuery {
    pub path: String,
}

pub async fn get_route_decision(
    State(state): State<AppState>,
    Query(query): Query<GuardQuery>,
) -> Json<serde_json::Value> {
    let snapshot = state.container.snapshot();
    let decision = guard::decide(&query.path, snapshot.state.user_view());
    let body = match decision {
        RouteDecision::Allow => serde_json::json!({ "allow": true }),
        RouteDecision::Redirect { to, notice } => serde_json::json!({
            "redirect_to": to,
            "notice": notice,
        }),
    };
    Json(body)
}
