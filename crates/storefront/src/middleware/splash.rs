//! Splash gate.
//!
//! Until the bootstrap declares the app loaded, every gated route answers
//! with the splash screen instead of its page. The health endpoint is wired
//! outside the gate.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::filters;
use crate::layout::{FALLBACK_LOGO_URL, FALLBACK_STORE_NAME};
use crate::state::AppState;
use crate::theme::styles;

/// Splash screen template.
#[derive(Template, WebTemplate)]
#[template(path = "splash.html")]
pub struct SplashTemplate {
    pub store_name: String,
    pub logo_url: String,
    pub theme_css: String,
}

impl SplashTemplate {
    /// Build the splash from whatever settings have arrived so far; the
    /// splash can render before the settings fetch completes.
    fn from_state(state: &AppState) -> Self {
        let (settings, _) = state.bootstrap().snapshot();
        Self {
            store_name: settings
                .as_ref()
                .and_then(|s| s.store_name.clone())
                .unwrap_or_else(|| FALLBACK_STORE_NAME.to_string()),
            logo_url: settings
                .as_ref()
                .and_then(|s| s.logo_url.clone())
                .unwrap_or_else(|| FALLBACK_LOGO_URL.to_string()),
            theme_css: styles::snapshot().css_custom_properties(),
        }
    }
}

/// Answer with the splash screen until the bootstrap completes.
pub async fn splash_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if state.bootstrap().is_loaded() {
        next.run(request).await
    } else {
        SplashTemplate::from_state(&state).into_response()
    }
}
