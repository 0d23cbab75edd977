//! Application state shared across handlers.

use std::sync::Arc;

use crate::bootstrap::Bootstrap;
use crate::carousel::CarouselHandle;
use crate::config::StorefrontConfig;
use crate::gateway::{SessionHub, StoreGateway};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; provides access to configuration, the data
/// service client, and the long-lived bootstrap/carousel/session state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    gateway: Arc<dyn StoreGateway>,
    bootstrap: Bootstrap,
    carousel: CarouselHandle,
    sessions: SessionHub,
}

impl AppState {
    /// Assemble the state from its already-started parts.
    #[must_use]
    pub fn new(
        config: StorefrontConfig,
        gateway: Arc<dyn StoreGateway>,
        bootstrap: Bootstrap,
        carousel: CarouselHandle,
        sessions: SessionHub,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                gateway,
                bootstrap,
                carousel,
                sessions,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the data service client.
    #[must_use]
    pub fn gateway(&self) -> &dyn StoreGateway {
        self.inner.gateway.as_ref()
    }

    /// Get a reference to the bootstrap sequencer.
    #[must_use]
    pub fn bootstrap(&self) -> &Bootstrap {
        &self.inner.bootstrap
    }

    /// Get a reference to the carousel handle.
    #[must_use]
    pub fn carousel(&self) -> &CarouselHandle {
        &self.inner.carousel
    }

    /// Get a reference to the session hub.
    #[must_use]
    pub fn sessions(&self) -> &SessionHub {
        &self.inner.sessions
    }
}
