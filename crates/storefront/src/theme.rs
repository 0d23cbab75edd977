//! The global styling context and the task that keeps it current.
//!
//! The derived theme variables live in one process-wide store with exactly
//! one writer: the engine task below, triggered only by settings changes.
//! Writes are idempotent (last value wins), so redundant re-application is
//! harmless. Readers take a cheap snapshot per render.

use tokio::sync::watch;
use tracing::info;

use perfume_house_core::{StoreSettings, ThemeVariables};

/// The shared styling context.
///
/// Module boundary enforces the single-writer rule: only
/// [`run_theme_engine`] calls [`styles::apply`] outside of tests.
pub mod styles {
    use std::sync::{OnceLock, RwLock};

    use perfume_house_core::ThemeVariables;

    fn context() -> &'static RwLock<ThemeVariables> {
        static CONTEXT: OnceLock<RwLock<ThemeVariables>> = OnceLock::new();
        CONTEXT.get_or_init(|| RwLock::new(ThemeVariables::default()))
    }

    /// Replace the current variables. Last write wins.
    pub fn apply(vars: ThemeVariables) {
        if let Ok(mut current) = context().write() {
            *current = vars;
        }
    }

    /// Snapshot the current variables for rendering.
    #[must_use]
    pub fn snapshot() -> ThemeVariables {
        context()
            .read()
            .map_or_else(|_| ThemeVariables::default(), |current| current.clone())
    }
}

/// React to settings changes by re-deriving and applying the variables.
///
/// Mirrors the settings lifecycle: nothing is applied until the first
/// settings value arrives (the stylesheet defaults cover that window), and
/// every later change - including admin refreshes - overwrites the context.
/// Runs until the bootstrap sequencer is dropped.
pub async fn run_theme_engine(mut settings: watch::Receiver<Option<StoreSettings>>) {
    loop {
        if settings.changed().await.is_err() {
            break;
        }
        let current = settings.borrow_and_update().clone();
        if let Some(settings) = current {
            styles::apply(ThemeVariables::derive(Some(&settings)));
            info!("theme variables applied");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfume_house_core::ThemeSettings;

    // The style context is process-global, so exercise it in one test to
    // avoid cross-test write races.
    #[tokio::test]
    async fn test_engine_applies_on_settings_change() {
        let (tx, rx) = watch::channel(None);
        let engine = tokio::spawn(run_theme_engine(rx));

        let settings = StoreSettings {
            theme_settings: ThemeSettings {
                primary_color: Some("#112233".to_string()),
                ..ThemeSettings::default()
            },
            ..StoreSettings::default()
        };
        tx.send_replace(Some(settings));
        tokio::task::yield_now().await;

        assert_eq!(styles::snapshot().primary, "#112233");

        // Idempotent re-application of the same value.
        let again = tx.borrow().clone();
        tx.send_replace(again);
        tokio::task::yield_now().await;
        assert_eq!(styles::snapshot().primary, "#112233");

        drop(tx);
        engine.await.expect("engine exits when the source closes");
    }
}
