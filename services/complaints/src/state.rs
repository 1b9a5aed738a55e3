use sea_orm::DatabaseConnection;

use crate::infra::db::DbComplaintRepository;
use crate::infra::images::CdnImageStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub images: CdnImageStore,
}

impl AppState {
    pub fn complaint_repo(&self) -> DbComplaintRepository {
        DbComplaintRepository {
            db: self.db.clone(),
        }
    }

    pub fn image_store(&self) -> CdnImageStore {
        self.images.clone()
    }
}
