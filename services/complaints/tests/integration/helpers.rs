use std::sync::{Arc, Mutex};

use bytes::Bytes;
use chrono::Utc;
use uuid::Uuid;

use safai_complaints::domain::repository::{ComplaintRepository, ImageStore};
use safai_complaints::domain::types::{Complaint, NewComplaint};
use safai_complaints::error::ComplaintsServiceError;
use safai_domain::complaint::ComplaintStatus;

// ── MemoryComplaintRepo ──────────────────────────────────────────────────────

/// In-memory complaint store with the same query semantics as the database
/// repository: exact pincode match, newest first, owner-scoped deletes.
#[derive(Clone, Default)]
pub struct MemoryComplaintRepo {
    pub rows: Arc<Mutex<Vec<Complaint>>>,
}

impl ComplaintRepository for MemoryComplaintRepo {
    async fn list_by_area(
        &self,
        area_code: &str,
        status: Option<ComplaintStatus>,
    ) -> Result<Vec<Complaint>, ComplaintsServiceError> {
        let mut rows: Vec<Complaint> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.pincode == area_code)
            .filter(|c| status.is_none_or(|s| c.status == s))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn list_by_owner(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Complaint>, ComplaintsServiceError> {
        let mut rows: Vec<Complaint> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Complaint>, ComplaintsServiceError> {
        Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, complaint: &Complaint) -> Result<(), ComplaintsServiceError> {
        self.rows.lock().unwrap().push(complaint.clone());
        Ok(())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: ComplaintStatus,
        after_image_url: Option<&str>,
    ) -> Result<bool, ComplaintsServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|c| c.id == id) else {
            return Ok(false);
        };
        row.status = status;
        if let Some(url) = after_image_url {
            row.after_image_url = Some(url.to_owned());
        }
        row.updated_at = Utc::now();
        Ok(true)
    }

    async fn delete(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<Option<Complaint>, ComplaintsServiceError> {
        let mut rows = self.rows.lock().unwrap();
        let pos = rows.iter().position(|c| c.id == id && c.user_id == owner_id);
        Ok(pos.map(|i| rows.remove(i)))
    }
}

// ── RecordingImageStore ──────────────────────────────────────────────────────

/// Image store that records operations instead of talking to a CDN.
#[derive(Clone, Default)]
pub struct RecordingImageStore {
    pub deleted: Arc<Mutex<Vec<String>>>,
}

impl ImageStore for RecordingImageStore {
    async fn upload(
        &self,
        _bytes: Bytes,
        filename: &str,
    ) -> Result<String, ComplaintsServiceError> {
        Ok(format!("https://cdn.test/safai/{filename}"))
    }

    async fn delete(&self, url: &str) -> Result<(), ComplaintsServiceError> {
        self.deleted.lock().unwrap().push(url.to_owned());
        Ok(())
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn new_complaint(user_id: Uuid, pincode: &str) -> NewComplaint {
    NewComplaint {
        user_id,
        title: "Overflowing bin".into(),
        location: "Ward 12 market street".into(),
        pincode: pincode.into(),
        description: "Garbage uncollected for three days".into(),
        image_url: "https://cdn.test/safai/before.jpg".into(),
    }
}
