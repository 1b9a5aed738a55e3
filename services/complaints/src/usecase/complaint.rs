use std::time::Duration;

use uuid::Uuid;

use safai_domain::area::validate_pincode;
use safai_domain::complaint::ComplaintStatus;
use safai_domain::role::Role;

use crate::domain::repository::{ComplaintRepository, ImageStore};
use crate::domain::types::{Complaint, NewComplaint};
use crate::error::ComplaintsServiceError;

/// Attempts for the area listing query, counting the first try.
pub const LIST_AREA_ATTEMPTS: u32 = 3;

/// Backoff ceiling for the area listing retries.
const BACKOFF_CAP: Duration = Duration::from_secs(30);

// ── ListAreaComplaints ───────────────────────────────────────────────────────

/// Area listing for the staff dashboard.
///
/// A blank area code short-circuits to an empty list without touching the
/// store — staff accounts created without an area would otherwise hammer
/// the database with unanswerable queries. Store failures retry with
/// exponential backoff before surfacing.
pub struct ListAreaComplaintsUseCase<R: ComplaintRepository> {
    pub repo: R,
}

impl<R: ComplaintRepository> ListAreaComplaintsUseCase<R> {
    pub async fn execute(
        &self,
        area_code: &str,
        status: Option<ComplaintStatus>,
    ) -> Result<Vec<Complaint>, ComplaintsServiceError> {
        if area_code.is_empty() {
            return Ok(vec![]);
        }
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.repo.list_by_area(area_code, status).await {
                Ok(rows) => return Ok(rows),
                Err(e) if attempt < LIST_AREA_ATTEMPTS => {
                    let backoff = Duration::from_secs(1 << (attempt - 1)).min(BACKOFF_CAP);
                    tracing::warn!(
                        attempt,
                        error = %e,
                        backoff_secs = backoff.as_secs(),
                        "area listing failed, retrying"
                    );
                    tokio::time::sleep(backoff).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

// ── ListOwnerComplaints ──────────────────────────────────────────────────────

pub struct ListOwnerComplaintsUseCase<R: ComplaintRepository> {
    pub repo: R,
}

impl<R: ComplaintRepository> ListOwnerComplaintsUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<Complaint>, ComplaintsServiceError> {
        self.repo.list_by_owner(user_id).await
    }
}

// ── CreateComplaint ──────────────────────────────────────────────────────────

pub struct CreateComplaintUseCase<R: ComplaintRepository> {
    pub repo: R,
}

impl<R: ComplaintRepository> CreateComplaintUseCase<R> {
    /// Validates every field before any store call; a rejected complaint
    /// leaves no partial state behind.
    pub async fn execute(
        &self,
        input: NewComplaint,
    ) -> Result<Complaint, ComplaintsServiceError> {
        if input.title.trim().is_empty() {
            return Err(ComplaintsServiceError::MissingField("title"));
        }
        if input.location.trim().is_empty() {
            return Err(ComplaintsServiceError::MissingField("location"));
        }
        if input.description.trim().is_empty() {
            return Err(ComplaintsServiceError::MissingField("description"));
        }
        if !validate_pincode(&input.pincode) {
            return Err(ComplaintsServiceError::InvalidPincode);
        }
        if input.image_url.trim().is_empty() {
            return Err(ComplaintsServiceError::ImageRequired);
        }
        let complaint = input.into_complaint();
        self.repo.insert(&complaint).await?;
        Ok(complaint)
    }
}

// ── UpdateStatus ─────────────────────────────────────────────────────────────

pub struct UpdateStatusInput {
    pub id: Uuid,
    pub caller_role: Role,
    pub caller_area: Option<String>,
    pub status: ComplaintStatus,
    pub after_image_url: Option<String>,
}

/// Status transitions are a staff operation scoped to the caller's area.
pub struct UpdateStatusUseCase<R: ComplaintRepository> {
    pub repo: R,
}

impl<R: ComplaintRepository> UpdateStatusUseCase<R> {
    pub async fn execute(&self, input: UpdateStatusInput) -> Result<(), ComplaintsServiceError> {
        if !input.caller_role.is_staff() {
            return Err(ComplaintsServiceError::Forbidden);
        }
        let complaint = self
            .repo
            .find_by_id(input.id)
            .await?
            .ok_or(ComplaintsServiceError::ComplaintNotFound)?;
        if input.caller_area.as_deref() != Some(complaint.pincode.as_str()) {
            return Err(ComplaintsServiceError::Forbidden);
        }
        let after = input.after_image_url.as_deref().filter(|s| !s.is_empty());
        if input.status == ComplaintStatus::Resolved && after.is_none() {
            return Err(ComplaintsServiceError::AfterPhotoRequired);
        }
        let updated = self.repo.update_status(input.id, input.status, after).await?;
        if !updated {
            return Err(ComplaintsServiceError::ComplaintNotFound);
        }
        Ok(())
    }
}

// ── DeleteComplaint ──────────────────────────────────────────────────────────

/// Owner-scoped deletion. The row is the operation of record; stored images
/// are removed best-effort afterwards and failures only warn.
pub struct DeleteComplaintUseCase<R: ComplaintRepository, S: ImageStore> {
    pub repo: R,
    pub images: S,
}

impl<R: ComplaintRepository, S: ImageStore> DeleteComplaintUseCase<R, S> {
    pub async fn execute(&self, id: Uuid, owner_id: Uuid) -> Result<(), ComplaintsServiceError> {
        let deleted = self
            .repo
            .delete(id, owner_id)
            .await?
            .ok_or(ComplaintsServiceError::ComplaintNotFound)?;

        let urls = std::iter::once(deleted.image_url.as_str())
            .chain(deleted.after_image_url.as_deref());
        for url in urls {
            if let Err(e) = self.images.delete(url).await {
                tracing::warn!(complaint_id = %id, url, error = %e, "image deletion failed");
            }
        }
        Ok(())
    }
}
