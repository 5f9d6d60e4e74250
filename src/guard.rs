//! Per-portal route guards.
//!
//! A guard is a pure decision over the auth state: while the session is
//! still loading it asks the host to wait (never a redirect — that would
//! flicker visitors to the login page before their identity is known);
//! afterwards it either allows rendering or bounces to the login page with
//! the original path preserved. Role mismatch and anonymity are treated
//! identically.

use crate::auth::AuthState;
use crate::models::enums::{LoginType, UserType};
use crate::routes;

/// The four guarded portals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Portal {
    Admin,
    Clinic,
    Patient,
    Medical,
}

impl Portal {
    /// Whether an identity satisfies this portal's role set.
    fn admits(&self, user_type: UserType, login_type: Option<LoginType>) -> bool {
        match self {
            Self::Admin => user_type == UserType::Admin,
            Self::Clinic => user_type == UserType::ClinicStaff,
            Self::Patient => user_type == UserType::Patient,
            Self::Medical => {
                matches!(user_type, UserType::Doctor | UserType::Nurse)
                    && login_type == Some(LoginType::Medical)
            }
        }
    }
}

/// What the host should render for a guarded route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Identity not yet known — render a blocking wait indicator.
    Wait,
    /// Viewer may see the protected content.
    Allow,
    /// Send the viewer to this path instead.
    Redirect(String),
}

/// Evaluate a portal guard for a viewer at `location`.
pub fn evaluate(portal: Portal, state: &AuthState, location: &str) -> GuardDecision {
    match state {
        AuthState::Uninitialized | AuthState::Loading => GuardDecision::Wait,
        AuthState::Anonymous => GuardDecision::Redirect(routes::login_redirect(location)),
        AuthState::Authenticated(identity) => {
            if portal.admits(identity.user_type, identity.login_type) {
                GuardDecision::Allow
            } else {
                GuardDecision::Redirect(routes::login_redirect(location))
            }
        }
    }
}
