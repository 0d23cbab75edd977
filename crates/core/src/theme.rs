//! Derivation of the named theme variables from store settings.
//!
//! The storefront propagates a fixed set of named visual variables to every
//! rendered page. This module is the single place where they are computed;
//! applying them to the shared styling context is the storefront's job.

use crate::types::StoreSettings;

/// Fallback primary color when the theme omits one.
pub const FALLBACK_PRIMARY: &str = "#c7a17a";
/// Fallback secondary color.
pub const FALLBACK_SECONDARY: &str = "#fff";
/// Fallback font stack.
pub const FALLBACK_FONT_FAMILY: &str = "Cairo, sans-serif";
/// Fallback flat background color.
pub const FALLBACK_BACKGROUND: &str = "#000";
/// Accent color. Fixed, not configurable through settings.
pub const ACCENT: &str = "#d99323";
/// Light accent color. Fixed, not configurable through settings.
pub const ACCENT_LIGHT: &str = "#e0a745";

/// The named visual variables consumed by all visual components.
///
/// Exactly one of `background_gradient` / `background_color` is non-empty:
/// a non-empty (trimmed) gradient in the settings wins and clears the flat
/// color; otherwise the flat color is set and the gradient cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeVariables {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub accent_light: String,
    pub font_family: String,
    pub background_gradient: String,
    pub background_color: String,
}

impl ThemeVariables {
    /// Derive the variables from the current settings.
    ///
    /// `None` (settings not yet fetched, or absent upstream) yields the
    /// documented fallback literals for every variable.
    #[must_use]
    pub fn derive(settings: Option<&StoreSettings>) -> Self {
        let theme = settings.map(|s| &s.theme_settings);

        let primary = theme
            .and_then(|t| t.primary_color.clone())
            .unwrap_or_else(|| FALLBACK_PRIMARY.to_string());
        let secondary = theme
            .and_then(|t| t.secondary_color.clone())
            .unwrap_or_else(|| FALLBACK_SECONDARY.to_string());
        let font_family = theme
            .and_then(|t| t.font_family.clone())
            .unwrap_or_else(|| FALLBACK_FONT_FAMILY.to_string());

        let gradient = theme
            .and_then(|t| t.background_gradient.clone())
            .unwrap_or_default();

        let (background_gradient, background_color) = if gradient.trim().is_empty() {
            let color = theme
                .and_then(|t| t.background_color.clone())
                .unwrap_or_else(|| FALLBACK_BACKGROUND.to_string());
            (String::new(), color)
        } else {
            (gradient, String::new())
        };

        Self {
            primary,
            secondary,
            accent: ACCENT.to_string(),
            accent_light: ACCENT_LIGHT.to_string(),
            font_family,
            background_gradient,
            background_color,
        }
    }

    /// Render the variables as CSS custom properties for a `:root` block.
    ///
    /// Cleared background variables are omitted entirely rather than set to
    /// an empty value.
    #[must_use]
    pub fn css_custom_properties(&self) -> String {
        let mut css = format!(
            "--color-primary: {};\n--color-secondary: {};\n--color-accent: {};\n--color-accent-light: {};\n--font-family: {};\n",
            self.primary, self.secondary, self.accent, self.accent_light, self.font_family
        );
        if !self.background_gradient.is_empty() {
            css.push_str(&format!("--background-gradient: {};\n", self.background_gradient));
        }
        if !self.background_color.is_empty() {
            css.push_str(&format!("--background-color: {};\n", self.background_color));
        }
        css
    }
}

impl Default for ThemeVariables {
    fn default() -> Self {
        Self::derive(None)
    }
}
