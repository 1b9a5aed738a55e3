use chrono::{DateTime, Utc};
use uuid::Uuid;

use safai_domain::role::Role;
use safai_domain::view::ProfileView;

/// Persisted application profile, one row per identity-provider account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
    pub area_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(id: Uuid, username: String, role: Role, area_code: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            role,
            area_code,
            created_at: now,
            updated_at: now,
        }
    }

    /// Projection used when merging into a [`safai_domain::view::UserView`].
    pub fn view(&self) -> ProfileView {
        ProfileView {
            username: self.username.clone(),
            role: self.role,
            area_code: self.area_code.clone(),
        }
    }
}
