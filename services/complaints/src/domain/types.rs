use chrono::{DateTime, Utc};
use uuid::Uuid;

use safai_domain::complaint::ComplaintStatus;

/// A filed waste complaint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complaint {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub location: String,
    pub pincode: String,
    pub description: String,
    pub image_url: String,
    pub after_image_url: Option<String>,
    pub status: ComplaintStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a new complaint, before validation.
#[derive(Debug, Clone)]
pub struct NewComplaint {
    pub user_id: Uuid,
    pub title: String,
    pub location: String,
    pub pincode: String,
    pub description: String,
    pub image_url: String,
}

impl NewComplaint {
    /// Build the persisted record; the store defaults status to `Pending`.
    pub fn into_complaint(self) -> Complaint {
        let now = Utc::now();
        Complaint {
            id: Uuid::now_v7(),
            user_id: self.user_id,
            title: self.title,
            location: self.location,
            pincode: self.pincode,
            description: self.description,
            image_url: self.image_url,
            after_image_url: None,
            status: ComplaintStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}
