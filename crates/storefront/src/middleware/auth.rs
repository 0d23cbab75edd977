//! Admin authentication gate.
//!
//! Admin pages are wrapped by a gate with three states: unresolved (the
//! initial session check has not completed), admitted, and refused. While
//! unresolved the gate shows a loading indicator and never the protected
//! content; once refused it redirects to the login page. The gate also
//! tracks session-change events, so a sign-out observed mid-visit refuses
//! on the next check.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use tower_sessions::Session;

use perfume_house_core::AuthSession;

use crate::gateway::SessionChanges;

/// Keys under which values are stored in the cookie session.
pub mod session_keys {
    /// The admin's `AuthSession`.
    pub const ADMIN_SESSION: &str = "admin.session";
}

/// Resolution state of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Initial session check still in flight. Renders the loading
    /// indicator, never the protected content.
    Unknown,
    /// A live session was observed.
    Authenticated,
    /// No session, or an expired one.
    Unauthenticated,
}

/// The gate itself: a state machine fed by session observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthGate {
    state: GateState,
}

impl AuthGate {
    /// A freshly mounted gate, before the first session check resolves.
    #[must_use]
    pub const fn mount() -> Self {
        Self {
            state: GateState::Unknown,
        }
    }

    /// Feed one session observation into the gate. An expired session
    /// counts as absent. Used both for the initial check and for every
    /// subsequent change event.
    pub fn observe(&mut self, session: Option<&AuthSession>) {
        self.state = match session {
            Some(s) if !s.is_expired(Utc::now()) => GateState::Authenticated,
            _ => GateState::Unauthenticated,
        };
    }

    /// Current resolution.
    #[must_use]
    pub const fn state(&self) -> GateState {
        self.state
    }

    /// Whether the protected content may render.
    #[must_use]
    pub const fn admits(&self) -> bool {
        matches!(self.state, GateState::Authenticated)
    }

    /// Whether the gate is still waiting on the first check.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.state, GateState::Unknown)
    }

    /// Follow session-change events until the stream closes, updating the
    /// gate on each one.
    pub async fn follow(&mut self, mut changes: SessionChanges) {
        while let Some(session) = changes.next().await {
            self.observe(session.as_ref());
        }
    }
}

/// Extractor that requires an admin session.
///
/// Unauthenticated requests are redirected to the login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdmin(session): RequireAdmin,
/// ) -> impl IntoResponse {
///     format!("Signed in as {}", session.user_id)
/// }
/// ```
pub struct RequireAdmin(pub AuthSession);

/// Rejection when the gate refuses a request.
pub enum GateRejection {
    /// Redirect to the login page.
    RedirectToLogin,
    /// Session machinery missing entirely.
    Unauthorized,
}

impl IntoResponse for GateRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/admin/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = GateRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(GateRejection::Unauthorized)?;

        let auth: Option<AuthSession> = session
            .get(session_keys::ADMIN_SESSION)
            .await
            .ok()
            .flatten();

        match auth {
            Some(auth) if !auth.is_expired(Utc::now()) => Ok(Self(auth)),
            _ => Err(GateRejection::RedirectToLogin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    use crate::gateway::SessionHub;

    fn live_session() -> AuthSession {
        AuthSession {
            access_token: "token".to_string(),
            user_id: "admin-1".to_string(),
            expires_at: Utc::now() + TimeDelta::hours(1),
        }
    }

    #[test]
    fn test_mounts_unresolved() {
        let gate = AuthGate::mount();
        assert!(gate.is_pending());
        assert!(!gate.admits());
    }

    #[test]
    fn test_live_session_admits() {
        let mut gate = AuthGate::mount();
        gate.observe(Some(&live_session()));
        assert_eq!(gate.state(), GateState::Authenticated);
        assert!(gate.admits());
    }

    #[test]
    fn test_absent_or_expired_session_refuses() {
        let mut gate = AuthGate::mount();
        gate.observe(None);
        assert_eq!(gate.state(), GateState::Unauthenticated);

        let mut expired = live_session();
        expired.expires_at = Utc::now() - TimeDelta::seconds(1);
        let mut gate = AuthGate::mount();
        gate.observe(Some(&expired));
        assert_eq!(gate.state(), GateState::Unauthenticated);
    }

    #[tokio::test]
    async fn test_sign_out_event_flips_the_gate() {
        let hub = SessionHub::new();
        hub.set(Some(live_session()));

        let mut gate = AuthGate::mount();
        gate.observe(hub.current().as_ref());
        assert!(gate.admits());

        let mut changes = hub.subscribe();
        hub.set(None);
        let observed = changes.next().await.flatten();
        gate.observe(observed.as_ref());
        assert_eq!(gate.state(), GateState::Unauthenticated);
    }
}
