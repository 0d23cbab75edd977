//! Application bootstrap sequencer.
//!
//! On startup, three tasks race independently: the settings fetch, the
//! banner fetch, and a fixed minimum-duration splash timer. The splash is
//! cleared by the timer alone - never early, even if both fetches resolve
//! instantly - and fetches that finish after the timer simply update the
//! published state in place. Shutting the sequencer down aborts all three
//! tasks, and every task re-checks liveness (via `Weak`) before writing, so
//! late completions never touch torn-down state.

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use perfume_house_core::{Banner, StoreSettings};

use crate::gateway::StoreGateway;

/// Minimum time the splash screen stays up.
pub const SPLASH_MIN: Duration = Duration::from_millis(2000);

/// Handle to the bootstrap state. Cheaply cloneable.
#[derive(Clone)]
pub struct Bootstrap {
    inner: Arc<BootstrapInner>,
}

struct BootstrapInner {
    gateway: Arc<dyn StoreGateway>,
    settings_tx: watch::Sender<Option<StoreSettings>>,
    banners_tx: watch::Sender<Vec<Banner>>,
    loaded_tx: watch::Sender<bool>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl Bootstrap {
    /// Start the bootstrap sequence.
    ///
    /// Returns immediately; consumers observe progress through the watch
    /// channels.
    #[must_use]
    pub fn start(gateway: Arc<dyn StoreGateway>) -> Self {
        let (settings_tx, _) = watch::channel(None);
        let (banners_tx, _) = watch::channel(Vec::new());
        let (loaded_tx, _) = watch::channel(false);

        let inner = Arc::new(BootstrapInner {
            gateway,
            settings_tx,
            banners_tx,
            loaded_tx,
            tasks: Mutex::new(Vec::new()),
        });

        let handles = vec![
            tokio::spawn(fetch_settings_task(Arc::downgrade(&inner))),
            tokio::spawn(fetch_banners_task(Arc::downgrade(&inner))),
            tokio::spawn(splash_timer_task(Arc::downgrade(&inner))),
        ];
        if let Ok(mut tasks) = inner.tasks.lock() {
            *tasks = handles;
        }

        Self { inner }
    }

    /// Whether the splash has been dismissed.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        *self.inner.loaded_tx.borrow()
    }

    /// Subscribe to the settings value.
    #[must_use]
    pub fn settings(&self) -> watch::Receiver<Option<StoreSettings>> {
        self.inner.settings_tx.subscribe()
    }

    /// Subscribe to the banner list.
    #[must_use]
    pub fn banners(&self) -> watch::Receiver<Vec<Banner>> {
        self.inner.banners_tx.subscribe()
    }

    /// Subscribe to the loaded flag.
    #[must_use]
    pub fn loaded(&self) -> watch::Receiver<bool> {
        self.inner.loaded_tx.subscribe()
    }

    /// Clone the current settings and banners for a request handler.
    #[must_use]
    pub fn snapshot(&self) -> (Option<StoreSettings>, Vec<Banner>) {
        (
            self.inner.settings_tx.borrow().clone(),
            self.inner.banners_tx.borrow().clone(),
        )
    }

    /// Re-fetch only the settings record and overwrite the current value.
    ///
    /// Used by the admin area after a successful settings edit. Bypasses
    /// the splash and banner logic entirely. Fetch failure or an absent
    /// record leaves the previous value in place.
    pub async fn refresh_settings(&self) {
        match self.inner.gateway.fetch_settings().await {
            Ok(Some(settings)) => {
                self.inner.settings_tx.send_replace(Some(settings));
                info!("settings refreshed");
            }
            Ok(None) => warn!("settings refresh found no record; keeping current value"),
            Err(e) => warn!("settings refresh failed: {e}; keeping current value"),
        }
    }

    /// Abort the startup tasks.
    ///
    /// After this, no further bootstrap writes occur. Idempotent.
    pub fn shutdown(&self) {
        if let Ok(mut tasks) = self.inner.tasks.lock() {
            for task in tasks.drain(..) {
                task.abort();
            }
        }
    }
}

impl Drop for BootstrapInner {
    fn drop(&mut self) {
        if let Ok(mut tasks) = self.tasks.lock() {
            for task in tasks.drain(..) {
                task.abort();
            }
        }
    }
}

async fn fetch_settings_task(inner: Weak<BootstrapInner>) {
    let Some(gateway) = inner.upgrade().map(|i| Arc::clone(&i.gateway)) else {
        return;
    };

    let result = gateway.fetch_settings().await;

    // Re-check liveness after the await; a torn-down sequencer gets no writes.
    let Some(inner) = inner.upgrade() else { return };
    match result {
        Ok(Some(settings)) => {
            inner.settings_tx.send_replace(Some(settings));
            info!("store settings loaded");
        }
        Ok(None) => warn!("no settings record; rendering with fallbacks"),
        Err(e) => warn!("settings fetch failed: {e}; rendering with fallbacks"),
    }
}

async fn fetch_banners_task(inner: Weak<BootstrapInner>) {
    let Some(gateway) = inner.upgrade().map(|i| Arc::clone(&i.gateway)) else {
        return;
    };

    let result = gateway.fetch_banners().await;

    let Some(inner) = inner.upgrade() else { return };
    match result {
        Ok(banners) => {
            info!(count = banners.len(), "banners loaded");
            inner.banners_tx.send_replace(banners);
        }
        Err(e) => {
            // Banner failure degrades to an empty carousel, never an error.
            warn!("banner fetch failed: {e}; continuing with none");
            inner.banners_tx.send_replace(Vec::new());
        }
    }
}

async fn splash_timer_task(inner: Weak<BootstrapInner>) {
    tokio::time::sleep(SPLASH_MIN).await;

    let Some(inner) = inner.upgrade() else { return };
    inner.loaded_tx.send_replace(true);
    info!("splash dismissed");
}
