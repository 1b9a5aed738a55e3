//! Route guard.
//!
//! Pure decision function evaluated on every navigation and on every
//! user-view change. Unknown paths are allowed — the SPA's catch-all
//! not-found route handles them without a redirect.

use crate::view::UserView;

/// Paths that require an authenticated session.
pub const PROTECTED_PATHS: [&str; 4] = ["/report", "/track", "/municipal-dashboard", "/profile"];

/// Citizen-only paths: staff accounts are routed to their dashboard instead.
pub const CITIZEN_PATHS: [&str; 2] = ["/report", "/track"];

/// The staff dashboard path.
pub const DASHBOARD_PATH: &str = "/municipal-dashboard";

/// The sign-in page.
pub const AUTH_PATH: &str = "/auth";

/// Outcome of a route-guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect {
        to: &'static str,
        notice: &'static str,
    },
}

/// Decide whether `path` may render for the given user view.
///
/// `None` means no authenticated session (anonymous or still loading).
pub fn decide(path: &str, user: Option<&UserView>) -> RouteDecision {
    match user {
        None => {
            if PROTECTED_PATHS.contains(&path) {
                RouteDecision::Redirect {
                    to: AUTH_PATH,
                    notice: "authentication required",
                }
            } else {
                RouteDecision::Allow
            }
        }
        Some(view) => {
            if !view.role.is_staff() && path == DASHBOARD_PATH {
                return RouteDecision::Redirect {
                    to: "/",
                    notice: "access denied",
                };
            }
            if view.role.is_staff() && CITIZEN_PATHS.contains(&path) {
                return RouteDecision::Redirect {
                    to: DASHBOARD_PATH,
                    notice: "access restricted",
                };
            }
            RouteDecision::Allow
        }
    }
}
