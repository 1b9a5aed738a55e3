use axum::extract::FromRequestParts;
use axum::http::Request;
use uuid::Uuid;

use safai_complaints::error::ComplaintsServiceError;
use safai_complaints::usecase::complaint::{
    CreateComplaintUseCase, DeleteComplaintUseCase, ListAreaComplaintsUseCase,
    ListOwnerComplaintsUseCase, UpdateStatusInput, UpdateStatusUseCase,
};
use safai_domain::complaint::ComplaintStatus;
use safai_domain::role::Role;
use safai_session_types::identity::IdentityHeaders;
use safai_testing::identity::MockIdentity;

use crate::helpers::{MemoryComplaintRepo, RecordingImageStore, new_complaint};

// ── Citizen lifecycle ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_walk_complaint_through_full_lifecycle() {
    let repo = MemoryComplaintRepo::default();
    let images = RecordingImageStore::default();
    let citizen = Uuid::new_v4();

    // File the complaint.
    let complaint = CreateComplaintUseCase { repo: repo.clone() }
        .execute(new_complaint(citizen, "110001"))
        .await
        .unwrap();
    assert_eq!(complaint.status, ComplaintStatus::Pending);

    // The owner sees it in their tracking list.
    let mine = ListOwnerComplaintsUseCase { repo: repo.clone() }
        .execute(citizen)
        .await
        .unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, complaint.id);

    // Staff from the same area picks it up.
    let update = UpdateStatusUseCase { repo: repo.clone() };
    update
        .execute(UpdateStatusInput {
            id: complaint.id,
            caller_role: Role::Municipal,
            caller_area: Some("110001".into()),
            status: ComplaintStatus::InProgress,
            after_image_url: None,
        })
        .await
        .unwrap();

    // Resolution without an after-photo is refused.
    let result = update
        .execute(UpdateStatusInput {
            id: complaint.id,
            caller_role: Role::Municipal,
            caller_area: Some("110001".into()),
            status: ComplaintStatus::Resolved,
            after_image_url: None,
        })
        .await;
    assert!(matches!(
        result,
        Err(ComplaintsServiceError::AfterPhotoRequired)
    ));

    // With the photo it goes through.
    update
        .execute(UpdateStatusInput {
            id: complaint.id,
            caller_role: Role::Municipal,
            caller_area: Some("110001".into()),
            status: ComplaintStatus::Resolved,
            after_image_url: Some("https://cdn.test/safai/after.jpg".into()),
        })
        .await
        .unwrap();

    let resolved = ListAreaComplaintsUseCase { repo: repo.clone() }
        .execute("110001", Some(ComplaintStatus::Resolved))
        .await
        .unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(
        resolved[0].after_image_url.as_deref(),
        Some("https://cdn.test/safai/after.jpg")
    );

    // The owner deletes it; both stored images are cleaned up.
    DeleteComplaintUseCase {
        repo: repo.clone(),
        images: images.clone(),
    }
    .execute(complaint.id, citizen)
    .await
    .unwrap();

    let deleted = images.deleted.lock().unwrap().clone();
    assert_eq!(
        deleted,
        vec![
            "https://cdn.test/safai/before.jpg".to_owned(),
            "https://cdn.test/safai/after.jpg".to_owned(),
        ]
    );

    // A repeat delete reports the row gone.
    let again = DeleteComplaintUseCase { repo, images }
        .execute(complaint.id, citizen)
        .await;
    assert!(matches!(
        again,
        Err(ComplaintsServiceError::ComplaintNotFound)
    ));
}

// ── Area scoping ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_refuse_staff_update_outside_their_area() {
    let repo = MemoryComplaintRepo::default();
    let complaint = CreateComplaintUseCase { repo: repo.clone() }
        .execute(new_complaint(Uuid::new_v4(), "110001"))
        .await
        .unwrap();

    let result = UpdateStatusUseCase { repo }
        .execute(UpdateStatusInput {
            id: complaint.id,
            caller_role: Role::Ngo,
            caller_area: Some("560001".into()),
            status: ComplaintStatus::UnderReview,
            after_image_url: None,
        })
        .await;
    assert!(matches!(result, Err(ComplaintsServiceError::Forbidden)));
}

#[tokio::test]
async fn should_keep_area_listings_disjoint() {
    let repo = MemoryComplaintRepo::default();
    let create = CreateComplaintUseCase { repo: repo.clone() };
    create
        .execute(new_complaint(Uuid::new_v4(), "110001"))
        .await
        .unwrap();
    create
        .execute(new_complaint(Uuid::new_v4(), "560001"))
        .await
        .unwrap();

    let list = ListAreaComplaintsUseCase { repo };
    let delhi = list.execute("110001", None).await.unwrap();
    let bengaluru = list.execute("560001", None).await.unwrap();
    assert_eq!(delhi.len(), 1);
    assert_eq!(bengaluru.len(), 1);
    assert_ne!(delhi[0].id, bengaluru[0].id);
}

// ── Gateway identity to staff update ─────────────────────────────────────────

#[tokio::test]
async fn should_drive_status_update_from_gateway_headers() {
    let repo = MemoryComplaintRepo::default();
    let complaint = CreateComplaintUseCase { repo: repo.clone() }
        .execute(new_complaint(Uuid::new_v4(), "110001"))
        .await
        .unwrap();

    // Extract the identity exactly as the handler would.
    let mock = MockIdentity::staff(Uuid::new_v4(), Role::Municipal, "110001");
    let mut request = Request::builder().method("PATCH").uri("/complaints");
    for (name, value) in mock.headers().iter() {
        request = request.header(name, value);
    }
    let (mut parts, _) = request.body(()).unwrap().into_parts();
    let identity = IdentityHeaders::from_request_parts(&mut parts, &())
        .await
        .unwrap();

    UpdateStatusUseCase { repo: repo.clone() }
        .execute(UpdateStatusInput {
            id: complaint.id,
            caller_role: identity.role,
            caller_area: identity.area_code,
            status: ComplaintStatus::UnderReview,
            after_image_url: None,
        })
        .await
        .unwrap();

    let rows = repo.rows.lock().unwrap();
    assert_eq!(rows[0].status, ComplaintStatus::UnderReview);
}
