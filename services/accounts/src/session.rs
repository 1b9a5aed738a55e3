//! Session state container.
//!
//! A single consumer task owns the auth state and applies session-change
//! events strictly in arrival order; everyone else sees immutable
//! [`AuthSnapshot`] values through a `watch` channel. There is no shared
//! mutable state and no event can overwrite a newer one.

use serde::Serialize;
use tokio::sync::{mpsc, watch};

use safai_domain::guard::AUTH_PATH;
use safai_domain::role::Role;
use safai_domain::session::UserSession;
use safai_domain::view::UserView;

use safai_session_types::event::SessionEvent;

use crate::domain::repository::ProfileRepository;
use crate::usecase::profile::{CreateProfileInput, CreateProfileUseCase};
use crate::usecase::session::ProcessSessionUseCase;

/// Capacity of the event queue; provider webhooks beyond this apply
/// backpressure on the sender.
const EVENT_QUEUE_CAPACITY: usize = 64;

/// Auth state as seen by the rest of the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "user", rename_all = "snake_case")]
pub enum AuthState {
    Loading,
    Authenticated(UserView),
    Anonymous,
}

impl AuthState {
    /// The current user view, if authenticated.
    pub fn user_view(&self) -> Option<&UserView> {
        match self {
            Self::Authenticated(view) => Some(view),
            _ => None,
        }
    }
}

/// One published state change. Notices are one-shot: they belong to the
/// snapshot that introduced them and are not carried forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthSnapshot {
    #[serde(flatten)]
    pub state: AuthState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
}

impl AuthSnapshot {
    fn loading() -> Self {
        Self {
            state: AuthState::Loading,
            notice: None,
            redirect_to: None,
        }
    }

    fn anonymous(notice: Option<&str>, redirect_to: Option<&str>) -> Self {
        Self {
            state: AuthState::Anonymous,
            notice: notice.map(str::to_owned),
            redirect_to: redirect_to.map(str::to_owned),
        }
    }

    fn authenticated(view: UserView, notice: Option<&str>) -> Self {
        Self {
            state: AuthState::Authenticated(view),
            notice: notice.map(str::to_owned),
            redirect_to: None,
        }
    }
}

/// Handle to the session container task.
///
/// Cloning shares the same queue and snapshot feed. Dropping every handle
/// closes the queue and ends the consumer task.
#[derive(Clone)]
pub struct SessionContainer {
    events: mpsc::Sender<SessionEvent>,
    snapshots: watch::Receiver<AuthSnapshot>,
}

impl SessionContainer {
    /// Spawn the consumer task.
    ///
    /// `initial_session` mirrors the mount-time provider lookup: `None`
    /// publishes `Anonymous` immediately, a session is processed into
    /// `Authenticated` before the first event is consumed.
    pub fn spawn<R>(repo: R, initial_session: Option<UserSession>) -> Self
    where
        R: ProfileRepository + Clone + Send + Sync + 'static,
    {
        let (event_tx, mut event_rx) = mpsc::channel(EVENT_QUEUE_CAPACITY);
        let (snap_tx, snap_rx) = watch::channel(AuthSnapshot::loading());

        tokio::spawn(async move {
            let first = match initial_session {
                None => AuthSnapshot::anonymous(None, None),
                Some(session) => authenticate(&repo, session, None).await,
            };
            let _ = snap_tx.send(first);

            while let Some(event) = event_rx.recv().await {
                let snapshot = match event {
                    SessionEvent::SignedIn(session) => {
                        authenticate(&repo, session, Some("welcome back")).await
                    }
                    SessionEvent::TokenRefreshed(session) => {
                        authenticate(&repo, session, None).await
                    }
                    SessionEvent::SignedOut => {
                        AuthSnapshot::anonymous(Some("signed out"), Some(AUTH_PATH))
                    }
                };
                if snap_tx.send(snapshot).is_err() {
                    break;
                }
            }
            tracing::debug!("session container task exited");
        });

        Self {
            events: event_tx,
            snapshots: snap_rx,
        }
    }

    /// Enqueue a session-change event. Fails only when the consumer task
    /// has exited.
    pub async fn send(&self, event: SessionEvent) -> Result<(), anyhow::Error> {
        self.events
            .send(event)
            .await
            .map_err(|_| anyhow::anyhow!("session container task is gone"))
    }

    /// Current snapshot (immutable copy).
    pub fn snapshot(&self) -> AuthSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<AuthSnapshot> {
        self.snapshots.clone()
    }
}

/// Process a session into an authenticated snapshot, creating the profile
/// from the signup hints when none exists yet. Creation failures are logged
/// and the metadata-derived view is published anyway.
async fn authenticate<R>(repo: &R, session: UserSession, notice: Option<&str>) -> AuthSnapshot
where
    R: ProfileRepository + Clone,
{
    let processor = ProcessSessionUseCase { repo: repo.clone() };
    let processed = processor.execute(&session).await;
    if processed.profile.is_some() {
        return AuthSnapshot::authenticated(processed.view, notice);
    }

    let Some(username) = session.metadata.username.clone() else {
        // Nothing to create a profile from; the hint-derived view stands.
        return AuthSnapshot::authenticated(processed.view, notice);
    };

    let creator = CreateProfileUseCase { repo: repo.clone() };
    let created = creator
        .execute(CreateProfileInput {
            user_id: session.user_id,
            username,
            role: session.metadata.role.as_deref().and_then(Role::from_str),
            area_code: session.metadata.area_code.clone(),
        })
        .await;

    match created {
        Ok(profile) => {
            AuthSnapshot::authenticated(UserView::merge(&session, Some(&profile.view())), notice)
        }
        Err(e) => {
            tracing::warn!(
                user_id = %session.user_id,
                error = %e,
                "profile creation failed, keeping metadata-derived view"
            );
            AuthSnapshot::authenticated(processed.view, notice)
        }
    }
}
