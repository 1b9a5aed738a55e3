use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

use safai_core::health::{healthz, readyz};
use safai_core::middleware::request_id_layer;

use crate::handlers::{
    complaint::{
        create_complaint, delete_complaint, get_area_complaints, get_my_complaints,
        update_complaint_status,
    },
    image::upload_image,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Complaints
        .route("/complaints", get(get_area_complaints))
        .route("/complaints/@me", get(get_my_complaints))
        .route("/complaints", post(create_complaint))
        .route("/complaints/{id}/status", patch(update_complaint_status))
        .route("/complaints/{id}", delete(delete_complaint))
        // Images
        .route("/complaints/images", post(upload_image))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
