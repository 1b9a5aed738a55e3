use sea_orm::Database;
use tracing::info;

use safai_accounts::config::AccountsConfig;
use safai_accounts::infra::db::DbProfileRepository;
use safai_accounts::router::build_router;
use safai_accounts::session::SessionContainer;
use safai_accounts::state::AppState;
use safai_core::config::Config as _;

#[tokio::main]
async fn main() {
    safai_core::tracing::init_tracing();

    let config = AccountsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    // Fresh boot has no provider session; the container starts Anonymous
    // and fills from the webhook feed.
    let container = SessionContainer::spawn(DbProfileRepository { db: db.clone() }, None);

    let state = AppState {
        db,
        container,
        session_jwt_secret: config.session_jwt_secret,
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.accounts_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("accounts service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
