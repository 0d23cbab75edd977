//! Process-wide authentication session state.
//!
//! The data service owns the session; this hub mirrors it so in-process
//! observers (the auth gate) can see the current value and be notified of
//! changes. One writer (the sign-in/sign-out handlers), many observers.

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::watch;

use perfume_house_core::AuthSession;

/// Shared holder of the current session.
#[derive(Debug, Clone)]
pub struct SessionHub {
    tx: Arc<watch::Sender<Option<AuthSession>>>,
}

impl SessionHub {
    /// Create an empty hub (no session).
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// The current session, if one is live.
    ///
    /// An expired session counts as absent.
    #[must_use]
    pub fn current(&self) -> Option<AuthSession> {
        self.tx
            .borrow()
            .clone()
            .filter(|s| !s.is_expired(Utc::now()))
    }

    /// Replace the current session and notify all subscribers.
    pub fn set(&self, session: Option<AuthSession>) {
        self.tx.send_replace(session);
    }

    /// Subscribe to session changes.
    ///
    /// The subscription is released when the returned handle is dropped.
    #[must_use]
    pub fn subscribe(&self) -> SessionChanges {
        SessionChanges {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for SessionHub {
    fn default() -> Self {
        Self::new()
    }
}

/// A live subscription to session changes.
#[derive(Debug)]
pub struct SessionChanges {
    rx: watch::Receiver<Option<AuthSession>>,
}

impl SessionChanges {
    /// Wait for the next change and return the new value.
    ///
    /// Returns `None` once the hub is gone.
    pub async fn next(&mut self) -> Option<Option<AuthSession>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// Release the subscription.
    ///
    /// Equivalent to dropping the handle; named for call sites where the
    /// release is the point.
    pub fn release(self) {}
}
