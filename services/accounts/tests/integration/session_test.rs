use uuid::Uuid;

use safai_accounts::session::{AuthSnapshot, AuthState, SessionContainer};
use safai_domain::guard::{RouteDecision, decide};
use safai_domain::role::Role;
use safai_session_types::event::SessionEvent;
use safai_session_types::token::{SessionTokenError, decode_session_token};
use safai_testing::session::{bare_session, citizen_session, staff_session};

use crate::helpers::{MemoryProfileRepo, TEST_JWT_SECRET, future_exp, issue_session_token};

async fn settle(container: &SessionContainer) -> AuthSnapshot {
    let mut rx = container.subscribe();
    loop {
        {
            let snap = rx.borrow_and_update().clone();
            if snap.state != AuthState::Loading {
                return snap;
            }
        }
        rx.changed().await.unwrap();
    }
}

// ── Webhook flow: token in, snapshot out ─────────────────────────────────────

#[tokio::test]
async fn should_authenticate_from_signed_webhook_token() {
    let repo = MemoryProfileRepo::default();
    let container = SessionContainer::spawn(repo.clone(), None);
    let mut rx = container.subscribe();
    settle(&container).await;

    let session = citizen_session(Uuid::new_v4(), "ravi_k");
    let token = issue_session_token(&session, TEST_JWT_SECRET, future_exp());
    let decoded = decode_session_token(&token, TEST_JWT_SECRET).unwrap();
    assert_eq!(decoded, session);

    container
        .send(SessionEvent::SignedIn(decoded))
        .await
        .unwrap();

    rx.changed().await.unwrap();
    let snap = rx.borrow().clone();
    let view = snap.state.user_view().expect("authenticated");
    assert_eq!(view.id, session.user_id);
    assert_eq!(view.username, "ravi_k");
    // The profile was created from the signup hints on first sign-in.
    assert!(view.profile_synced);
    assert_eq!(repo.rows.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_webhook_token_signed_with_wrong_secret() {
    let session = citizen_session(Uuid::new_v4(), "ravi_k");
    let token = issue_session_token(&session, "not-the-secret", future_exp());
    let err = decode_session_token(&token, TEST_JWT_SECRET).unwrap_err();
    assert!(matches!(err, SessionTokenError::InvalidSignature));
}

#[tokio::test]
async fn should_reject_expired_webhook_token() {
    let session = citizen_session(Uuid::new_v4(), "ravi_k");
    let token = issue_session_token(&session, TEST_JWT_SECRET, 1_000_000);
    let err = decode_session_token(&token, TEST_JWT_SECRET).unwrap_err();
    assert!(matches!(err, SessionTokenError::Expired));
}

// ── Sessions without hints ───────────────────────────────────────────────────

#[tokio::test]
async fn should_fall_back_to_defaults_for_hintless_session() {
    let container = SessionContainer::spawn(MemoryProfileRepo::default(), None);
    settle(&container).await;
    let mut rx = container.subscribe();

    let session = bare_session(Uuid::new_v4(), "plain@example.com");
    container
        .send(SessionEvent::SignedIn(session.clone()))
        .await
        .unwrap();

    rx.changed().await.unwrap();
    let snap = rx.borrow().clone();
    let view = snap.state.user_view().expect("authenticated");
    assert_eq!(view.role, Role::User);
    // No username hint → nothing to create a profile from.
    assert!(!view.profile_synced);
}

// ── Guard over container snapshots ───────────────────────────────────────────

#[tokio::test]
async fn should_guard_routes_against_current_snapshot() {
    let repo = MemoryProfileRepo::default();
    let staff = staff_session(Uuid::new_v4(), "ward_office", "municipal", "110001");
    let container = SessionContainer::spawn(repo, Some(staff));

    let snap = settle(&container).await;
    let view = snap.state.user_view();

    assert_eq!(decide("/municipal-dashboard", view), RouteDecision::Allow);
    assert_eq!(
        decide("/report", view),
        RouteDecision::Redirect {
            to: "/municipal-dashboard",
            notice: "access restricted",
        }
    );
}

#[tokio::test]
async fn should_guard_protected_routes_after_sign_out() {
    let container = SessionContainer::spawn(
        MemoryProfileRepo::default(),
        Some(citizen_session(Uuid::new_v4(), "ravi_k")),
    );
    settle(&container).await;
    let mut rx = container.subscribe();

    container.send(SessionEvent::SignedOut).await.unwrap();
    rx.changed().await.unwrap();
    let snap = rx.borrow().clone();

    assert_eq!(snap.state, AuthState::Anonymous);
    assert_eq!(
        decide("/track", snap.state.user_view()),
        RouteDecision::Redirect {
            to: "/auth",
            notice: "authentication required",
        }
    );
}
