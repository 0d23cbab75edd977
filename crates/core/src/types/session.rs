//! Authentication session types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An authentication session issued by the data service.
///
/// The storefront only ever observes presence or absence of a session; it
/// never mutates one. Stored in the session cookie after a successful
/// sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Bearer token for authorized data-service calls.
    pub access_token: String,
    /// Data-service user id of the signed-in admin.
    pub user_id: String,
    /// Absolute expiry of the token.
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    /// Whether the session has expired at `now`.
    ///
    /// An expired session counts as absent everywhere it is observed.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
