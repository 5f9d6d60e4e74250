//! Session lifecycle and role-based redirect policy.
//!
//! `AuthService` is the portal's only stateful engine: one session slot,
//! explicit lifecycle (initialize → login/logout → teardown), injected into
//! screens by reference instead of reached through an ambient singleton.
//!
//! State machine: `Uninitialized → Loading → {Authenticated, Anonymous}`.
//! Initialization is the single async suspension point at startup — the host
//! renders a wait indicator until it resolves.

use crate::api::client::PortalApi;
use crate::api::error::ApiError;
use crate::api::types::{AuthResponse, RegisterClinicRequest, RegisterPatientRequest};
use crate::models::enums::{LoginType, UserType};
use crate::models::PortalUser;
use crate::routes;
use crate::session_store::{SessionStore, StoredSession};

// ═══════════════════════════════════════════════════════════
// Identity and state
// ═══════════════════════════════════════════════════════════

/// The signed-in account as the rest of the portal sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub user: PortalUser,
    pub user_type: UserType,
    /// Which portal entrance staff used. Only meaningful for
    /// clinic staff, doctors, and nurses.
    pub login_type: Option<LoginType>,
}

/// One session slot. `Authenticated` carries the identity, so
/// "authenticated with no user" is unrepresentable.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Uninitialized,
    /// Startup profile fetch in flight. Hosts block rendering on this.
    Loading,
    Authenticated(Identity),
    Anonymous,
}

impl AuthState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Uninitialized | Self::Loading)
    }
}

/// Errors surfaced to login/registration forms.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Unexpected account data from server: {0}")]
    Profile(#[from] serde_json::Error),
}

// ═══════════════════════════════════════════════════════════
// Login type resolution
// ═══════════════════════════════════════════════════════════

/// Resolve the effective login type with three-tier precedence:
/// the server's response field, then the type the form requested,
/// then a derivation from the authoritative user type
/// (clinic_staff → staff, doctor/nurse → medical).
///
/// The server is allowed to omit `login_type`; this fallback chain is the
/// documented contract for that case, not a workaround.
pub fn resolve_login_type(
    response: Option<LoginType>,
    requested: Option<LoginType>,
    user_type: UserType,
) -> Option<LoginType> {
    if !user_type.uses_login_type() {
        return None;
    }
    response.or(requested).or(match user_type {
        UserType::ClinicStaff => Some(LoginType::Staff),
        UserType::Doctor | UserType::Nurse => Some(LoginType::Medical),
        UserType::Patient | UserType::Admin => None,
    })
}

// ═══════════════════════════════════════════════════════════
// AuthService
// ═══════════════════════════════════════════════════════════

/// Owns the session: token, identity, persistence, and redirect policy.
pub struct AuthService<A: PortalApi, S: SessionStore> {
    api: A,
    store: S,
    state: AuthState,
    token: Option<String>,
}

impl<A: PortalApi, S: SessionStore> AuthService<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            state: AuthState::Uninitialized,
            token: None,
        }
    }

    // ── Read access ─────────────────────────────────────────

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn identity(&self) -> Option<&Identity> {
        match &self.state {
            AuthState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity().is_some()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    // ── Startup ─────────────────────────────────────────────

    /// Rehydrate the session from the durable store.
    ///
    /// No stored token → `Anonymous` without touching the network. A stored
    /// token is only trusted after the profile endpoint confirms it; any
    /// failure clears the store and lands on `Anonymous`.
    pub async fn initialize(&mut self) {
        let stored = self.store.load();
        let Some(token) = stored.token else {
            self.state = AuthState::Anonymous;
            return;
        };

        self.state = AuthState::Loading;
        self.api.set_token(Some(token.clone()));
        self.token = Some(token);

        match self.api.get_profile().await {
            Ok(profile) => {
                match PortalUser::from_payload(profile.user_type, profile.user) {
                    Ok(user) => {
                        let login_type = resolve_login_type(
                            profile.login_type,
                            stored.login_type,
                            profile.user_type,
                        );
                        tracing::info!(user_type = profile.user_type.as_str(), "Session restored");
                        self.establish(user, profile.user_type, login_type);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Stored session returned an undecodable profile");
                        self.force_logout();
                    }
                }
            }
            Err(e) => {
                tracing::info!(error = %e, "Stored token rejected, starting anonymous");
                self.force_logout();
            }
        }
    }

    // ── Logins and registrations ────────────────────────────

    /// Patient login. Returns the redirect target on success; failures
    /// propagate to the form and leave the state unchanged.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<&'static str, AuthError> {
        let response = self.api.login(email, password).await?;
        self.adopt(response, None)
    }

    /// Unified staff/medical login.
    ///
    /// The response's `user_type` is authoritative. When it does not match
    /// what the form requested (e.g. a clinic-staff account entering through
    /// the medical door), the redirect follows the actual type — graceful
    /// degradation, not an error.
    pub async fn clinic_login(
        &mut self,
        email: &str,
        password: &str,
        requested: LoginType,
    ) -> Result<&'static str, AuthError> {
        let response = self.api.clinic_login(email, password, requested).await?;
        let actual = response.user_type;
        let matches_request = match requested {
            LoginType::Staff => actual == UserType::ClinicStaff,
            LoginType::Medical => matches!(actual, UserType::Doctor | UserType::Nurse),
        };
        if !matches_request {
            tracing::warn!(
                requested = requested.as_str(),
                actual = actual.as_str(),
                "Login entrance does not match account type, redirecting by account type"
            );
        }
        self.adopt(response, Some(requested))
    }

    /// Patient self-registration; behaves like a successful login.
    pub async fn register_patient(
        &mut self,
        request: &RegisterPatientRequest,
    ) -> Result<&'static str, AuthError> {
        let response = self.api.register_patient(request).await?;
        self.adopt(response, None)
    }

    /// Clinic registration; behaves like a successful login.
    pub async fn register_clinic(
        &mut self,
        request: &RegisterClinicRequest,
    ) -> Result<&'static str, AuthError> {
        let response = self.api.register_clinic(request).await?;
        self.adopt(response, None)
    }

    // ── Teardown and refresh ────────────────────────────────

    /// Clear durable and in-memory state. Synchronous, no server call,
    /// idempotent.
    pub fn logout(&mut self) {
        self.force_logout();
    }

    /// Re-fetch the profile with the current token.
    ///
    /// Any failure means the session is no longer valid server-side; the
    /// user is returned to the login screen via forced logout. Nothing
    /// escapes to the caller.
    pub async fn refresh_profile(&mut self) {
        if self.token.is_none() {
            return;
        }
        match self.api.get_profile().await {
            Ok(profile) => {
                match PortalUser::from_payload(profile.user_type, profile.user) {
                    Ok(user) => {
                        let stored_login = self.identity().and_then(|i| i.login_type);
                        let login_type = resolve_login_type(
                            profile.login_type,
                            stored_login,
                            profile.user_type,
                        );
                        self.establish(user, profile.user_type, login_type);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Profile refresh returned undecodable data");
                        self.force_logout();
                    }
                }
            }
            Err(e) => {
                tracing::info!(error = %e, "Profile refresh rejected, session invalidated");
                self.force_logout();
            }
        }
    }

    // ── Redirect policy ─────────────────────────────────────

    /// Where an authenticated visitor at `location` should be sent instead.
    ///
    /// Re-evaluated by the host whenever identity or location changes: an
    /// authenticated session sitting under the auth pages is bounced to its
    /// role home. Anonymous and loading sessions stay put — guards own the
    /// other direction.
    pub fn redirect_for_location(&self, location: &str) -> Option<&'static str> {
        let identity = self.identity()?;
        if location.starts_with(routes::AUTH_PREFIX) {
            Some(routes::home_path(identity.user_type))
        } else {
            None
        }
    }

    // ── Internal ────────────────────────────────────────────

    /// Persist and enter `Authenticated` from a login/registration response.
    fn adopt(
        &mut self,
        response: AuthResponse,
        requested: Option<LoginType>,
    ) -> Result<&'static str, AuthError> {
        let user = PortalUser::from_payload(response.user_type, response.user)?;
        let login_type = resolve_login_type(response.login_type, requested, response.user_type);

        self.api.set_token(Some(response.token.clone()));
        self.token = Some(response.token);
        tracing::info!(user_type = response.user_type.as_str(), "Signed in");
        self.establish(user, response.user_type, login_type);

        Ok(routes::home_path(response.user_type))
    }

    fn establish(&mut self, user: PortalUser, user_type: UserType, login_type: Option<LoginType>) {
        let session = StoredSession {
            token: self.token.clone(),
            user_type: Some(user_type),
            login_type,
        };
        if let Err(e) = self.store.save(&session) {
            // The in-memory session still works; only restart survival is lost.
            tracing::warn!(error = %e, "Failed to persist session");
        }
        self.state = AuthState::Authenticated(Identity {
            user,
            user_type,
            login_type,
        });
    }

    fn force_logout(&mut self) {
        self.store.clear();
        self.api.set_token(None);
        self.token = None;
        self.state = AuthState::Anonymous;
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
