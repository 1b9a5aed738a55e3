use safai_domain::session::UserSession;
use safai_domain::view::UserView;

use crate::domain::repository::ProfileRepository;
use crate::domain::types::Profile;
use crate::error::AccountsServiceError;

/// Result of processing one provider session.
#[derive(Debug, Clone)]
pub struct ProcessedSession {
    pub view: UserView,
    /// `None` when no profile row exists (or the fetch failed); the caller
    /// is responsible for triggering creation asynchronously.
    pub profile: Option<Profile>,
}

/// Combine a raw provider session with the resolved profile.
///
/// Never fails: a store error is logged and the view falls back to the
/// session-metadata hints, so the caller keeps rendering with
/// possibly-stale role/area information.
pub struct ProcessSessionUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> ProcessSessionUseCase<R> {
    pub async fn execute(&self, session: &UserSession) -> ProcessedSession {
        let profile = match self.repo.find_by_id(session.user_id).await {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(
                    user_id = %session.user_id,
                    error = %e,
                    "profile fetch failed, falling back to session metadata"
                );
                None
            }
        };
        let view = UserView::merge(session, profile.as_ref().map(Profile::view).as_ref());
        ProcessedSession { view, profile }
    }
}
