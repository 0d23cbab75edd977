//! One-shot fade-in for routed page content.
//!
//! Every routed page body mounts hidden and slightly offset, then settles
//! into place after a short delay. Opacity and position animate with
//! distinct durations; both run exactly once.

use std::time::Duration;

use tokio::time::sleep;

/// Delay before the transition starts.
pub const FADE_DELAY: Duration = Duration::from_millis(50);
/// Duration of the opacity transition.
pub const OPACITY_MS: u32 = 1200;
/// Duration of the position transition.
pub const TRANSFORM_MS: u32 = 700;
/// Easing curve shared by both transitions.
pub const EASING: &str = "cubic-bezier(.4,0,.2,1)";
/// Initial vertical offset in pixels.
pub const OFFSET_PX: u32 = 16;

/// The two phases of the wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeIn {
    /// Mounted but not yet visible.
    Hidden,
    /// Transitioned into place. Terminal.
    Settled,
}

impl FadeIn {
    /// Initial state on mount.
    #[must_use]
    pub const fn mount() -> Self {
        Self::Hidden
    }

    /// Wait out the delay, then settle. One-shot; settling twice is a
    /// no-op. Dropping the future before the delay elapses cancels the
    /// transition without any state change.
    pub async fn settle(&mut self) {
        if *self == Self::Hidden {
            sleep(FADE_DELAY).await;
            *self = Self::Settled;
        }
    }

    /// Inline style for the wrapper in this phase.
    #[must_use]
    pub fn style_attr(&self) -> String {
        let (opacity, transform) = match self {
            Self::Hidden => ("0", format!("translateY({OFFSET_PX}px)")),
            Self::Settled => ("1", "translateY(0)".to_string()),
        };
        format!(
            "opacity: {opacity}; transform: {transform}; transition: opacity {OPACITY_MS}ms {EASING}, transform {TRANSFORM_MS}ms {EASING};"
        )
    }
}

/// CSS animation equivalent for server-rendered pages, where the browser
/// plays the one-shot transition on its own. Embedded by the base layout.
#[must_use]
pub fn page_fade_css() -> String {
    let delay_ms = FADE_DELAY.as_millis();
    format!(
        ".page-fade {{\n  animation: page-fade-opacity {OPACITY_MS}ms {EASING} {delay_ms}ms both,\n             page-fade-shift {TRANSFORM_MS}ms {EASING} {delay_ms}ms both;\n}}\n@keyframes page-fade-opacity {{ from {{ opacity: 0; }} to {{ opacity: 1; }} }}\n@keyframes page-fade-shift {{ from {{ transform: translateY({OFFSET_PX}px); }} to {{ transform: translateY(0); }} }}\n"
    )
}
