use sea_orm::DatabaseConnection;

use crate::infra::db::DbProfileRepository;
use crate::session::SessionContainer;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub container: SessionContainer,
    pub session_jwt_secret: String,
}

impl AppState {
    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
        }
    }
}
