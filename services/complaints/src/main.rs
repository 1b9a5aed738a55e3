use sea_orm::Database;
use tracing::info;

use safai_complaints::config::ComplaintsConfig;
use safai_complaints::infra::images::CdnImageStore;
use safai_complaints::router::build_router;
use safai_complaints::state::AppState;
use safai_core::config::Config as _;

#[tokio::main]
async fn main() {
    safai_core::tracing::init_tracing();

    let config = ComplaintsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let images = CdnImageStore::new(config.cdn_cloud_name, config.cdn_upload_preset);

    let state = AppState { db, images };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.complaints_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("complaints service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
