//! Mock identity helpers for integration tests.
//!
//! Services behind the gateway receive `x-safai-user-id` + `x-safai-user-role`
//! (and `x-safai-area-code` for staff) headers injected by the gateway. In
//! tests, `MockIdentity` injects these headers directly so no real gateway or
//! JWT is needed.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use uuid::Uuid;

use safai_domain::role::Role;

/// Configurable identity injected into test requests.
pub struct MockIdentity {
    pub user_id: Uuid,
    pub role: Role,
    pub area_code: Option<String>,
}

impl MockIdentity {
    pub fn citizen(user_id: Uuid) -> Self {
        Self {
            user_id,
            role: Role::User,
            area_code: None,
        }
    }

    pub fn staff(user_id: Uuid, role: Role, area_code: &str) -> Self {
        Self {
            user_id,
            role,
            area_code: Some(area_code.to_owned()),
        }
    }

    /// Return headers as if the gateway injected them.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(
            HeaderName::from_static("x-safai-user-id"),
            HeaderValue::from_str(&self.user_id.to_string()).unwrap(),
        );
        map.insert(
            HeaderName::from_static("x-safai-user-role"),
            HeaderValue::from_static(self.role.as_str()),
        );
        if let Some(area_code) = &self.area_code {
            map.insert(
                HeaderName::from_static("x-safai-area-code"),
                HeaderValue::from_str(area_code).unwrap(),
            );
        }
        map
    }
}
