use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use safai_core::health::{healthz, readyz};
use safai_core::middleware::request_id_layer;

use crate::handlers::{
    profile::{create_profile, get_me},
    session::{get_route_decision, get_session, post_session_event},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Profiles
        .route("/profiles", post(create_profile))
        .route("/profiles/@me", get(get_me))
        // Session
        .route("/session/events", post(post_session_event))
        .route("/session", get(get_session))
        .route("/session/guard", get(get_route_decision))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
