use uuid::Uuid;

use safai_accounts::error::AccountsServiceError;
use safai_accounts::usecase::profile::{
    CreateProfileInput, CreateProfileUseCase, FetchProfileUseCase,
};
use safai_domain::role::Role;

use crate::helpers::MemoryProfileRepo;

use safai_accounts::domain::types::Profile;

// ── CreateProfile + FetchProfile round trip ──────────────────────────────────

#[tokio::test]
async fn should_fetch_profile_after_creation() {
    let repo = MemoryProfileRepo::default();
    let user_id = Uuid::new_v4();

    let created = CreateProfileUseCase { repo: repo.clone() }
        .execute(CreateProfileInput {
            user_id,
            username: "ravi_k".into(),
            role: Some(Role::Municipal),
            area_code: Some("110001".into()),
        })
        .await
        .unwrap();

    let fetched = FetchProfileUseCase { repo }
        .execute(user_id)
        .await
        .unwrap()
        .expect("profile exists");

    assert_eq!(fetched, created);
    assert_eq!(fetched.role, Role::Municipal);
    assert_eq!(fetched.area_code, "110001");
}

#[tokio::test]
async fn should_return_none_for_unknown_profile() {
    let repo = MemoryProfileRepo::default();
    let fetched = FetchProfileUseCase { repo }
        .execute(Uuid::new_v4())
        .await
        .unwrap();
    assert!(fetched.is_none());
}

// ── Username uniqueness ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_suffix_username_on_case_insensitive_conflict() {
    let owner = Profile::new(Uuid::new_v4(), "Asha".into(), Role::User, "".into());
    let repo = MemoryProfileRepo::seeded(vec![owner.clone()]);
    let newcomer_id = Uuid::new_v4();

    let created = CreateProfileUseCase { repo: repo.clone() }
        .execute(CreateProfileInput {
            user_id: newcomer_id,
            username: "asha".into(),
            role: None,
            area_code: None,
        })
        .await
        .unwrap();

    assert_eq!(created.id, newcomer_id);
    assert_ne!(created.username.to_lowercase(), "asha");
    assert!(created.username.starts_with("asha"));

    // The original owner's row is untouched.
    let rows = repo.rows.lock().unwrap();
    let original = rows.iter().find(|p| p.username == "Asha").unwrap();
    assert_eq!(original.id, owner.id);
}

#[tokio::test]
async fn should_return_existing_row_when_same_user_races_itself() {
    let repo = MemoryProfileRepo::default();
    let user_id = Uuid::new_v4();

    let first = CreateProfileUseCase { repo: repo.clone() }
        .execute(CreateProfileInput {
            user_id,
            username: "first_name".into(),
            role: None,
            area_code: None,
        })
        .await
        .unwrap();

    // A duplicate webhook delivery retries creation with a different hint;
    // the stored row wins.
    let second = CreateProfileUseCase { repo: repo.clone() }
        .execute(CreateProfileInput {
            user_id,
            username: "second_name".into(),
            role: Some(Role::Ngo),
            area_code: Some("560001".into()),
        })
        .await
        .unwrap();

    assert_eq!(second, first);
    assert_eq!(repo.rows.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_staff_creation_with_malformed_area_code() {
    let repo = MemoryProfileRepo::default();
    let result = CreateProfileUseCase { repo }
        .execute(CreateProfileInput {
            user_id: Uuid::new_v4(),
            username: "ward_office".into(),
            role: Some(Role::Ngo),
            area_code: Some("56001A".into()),
        })
        .await;
    assert!(matches!(result, Err(AccountsServiceError::InvalidAreaCode)));
}
