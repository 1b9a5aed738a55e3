#![allow(async_fn_in_trait)]

use uuid::Uuid;

use safai_domain::complaint::ComplaintStatus;

use crate::domain::types::Complaint;
use crate::error::ComplaintsServiceError;

/// Repository for complaints.
pub trait ComplaintRepository: Send + Sync {
    /// All complaints whose pincode equals `area_code` (exact match),
    /// optionally narrowed by status, newest first.
    async fn list_by_area(
        &self,
        area_code: &str,
        status: Option<ComplaintStatus>,
    ) -> Result<Vec<Complaint>, ComplaintsServiceError>;

    /// All complaints owned by `user_id`, newest first.
    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<Complaint>, ComplaintsServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Complaint>, ComplaintsServiceError>;

    async fn insert(&self, complaint: &Complaint) -> Result<(), ComplaintsServiceError>;

    /// Persist a status change (and the after-image URL when given).
    /// Returns `false` when no row matched.
    async fn update_status(
        &self,
        id: Uuid,
        status: ComplaintStatus,
        after_image_url: Option<&str>,
    ) -> Result<bool, ComplaintsServiceError>;

    /// Delete the complaint scoped to `(id, owner_id)`. Returns the deleted
    /// row so the caller can clean up its stored images.
    async fn delete(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> Result<Option<Complaint>, ComplaintsServiceError>;
}

/// Port for the image CDN / object storage.
pub trait ImageStore: Send + Sync {
    /// Upload image bytes, returning a publicly fetchable URL.
    async fn upload(
        &self,
        bytes: bytes::Bytes,
        filename: &str,
    ) -> Result<String, ComplaintsServiceError>;

    /// Delete a stored image by the URL it was issued under.
    async fn delete(&self, url: &str) -> Result<(), ComplaintsServiceError>;
}
